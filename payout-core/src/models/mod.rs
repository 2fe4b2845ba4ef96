mod configuration;
mod scenario;
mod tax_bracket;

pub use configuration::{Configuration, ConfigurationError, MINIMUM_COMBINED_AMOUNT};
pub use scenario::Scenario;
pub use tax_bracket::TaxBracket;
