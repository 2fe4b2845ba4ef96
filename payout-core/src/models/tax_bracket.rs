use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of the marginal income tax schedule.
///
/// A bracket applies from `income_threshold` (inclusive) up to the next
/// bracket's threshold (exclusive). The last bracket of a table is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub income_threshold: Decimal,
    pub marginal_rate_percent: Decimal,
}

impl TaxBracket {
    pub fn new(
        income_threshold: Decimal,
        marginal_rate_percent: Decimal,
    ) -> Self {
        Self {
            income_threshold,
            marginal_rate_percent,
        }
    }

    /// The marginal rate as a fraction (e.g. `0.235` for 23.5%).
    pub fn rate(&self) -> Decimal {
        self.marginal_rate_percent / Decimal::ONE_HUNDRED
    }
}
