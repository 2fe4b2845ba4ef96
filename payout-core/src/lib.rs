pub mod calculations;
pub mod models;

pub use calculations::bracket_table::{BracketTable, BracketTableError};
pub use calculations::scenarios::{ScenarioGenerator, get_scenarios};
pub use calculations::selection::{
    ScenarioComparison, compare_with_next_cheaper, get_ideal_scenario, pick_cheapest, pick_ideal,
    pick_most_expensive,
};
pub use models::*;
