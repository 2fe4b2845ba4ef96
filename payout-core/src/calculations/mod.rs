//! Tax calculations for salary and dividend payouts.
//!
//! The modules build on each other: [`bracket_table`] resolves marginal income
//! tax rates, [`formulas`] turns amounts into taxes, [`scenarios`] scores a grid
//! of allocations and [`selection`] picks the interesting ones.

pub mod bracket_table;
pub mod common;
pub mod formulas;
pub mod scenarios;
pub mod selection;

pub use bracket_table::{BracketTable, BracketTableError};
pub use formulas::DividendSplit;
pub use scenarios::ScenarioGenerator;
pub use selection::ScenarioComparison;
