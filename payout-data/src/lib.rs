//! Loading income tax bracket tables from CSV.

pub mod loader;

pub use loader::{BracketLoaderError, BracketTableLoader, TaxBracketRecord};
