use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Combined amount the three inputs must exceed before scenarios are worth
/// generating.
pub const MINIMUM_COMBINED_AMOUNT: Decimal = dec!(2000);

/// Errors raised when a [`Configuration`] cannot be used for a computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// One of the inputs is below zero.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    /// The inputs together are too small to produce meaningful scenarios.
    #[error("net worth, profit and living expenses must add up to more than {minimum}, got {total}")]
    InsufficientAssets { total: Decimal, minimum: Decimal },
}

/// The three numbers a user provides.
///
/// The engine never stores a configuration; callers pass it in for every
/// computation and own its persistence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Net income the owner needs per year.
    pub living_expenses: Decimal,

    /// Net worth of the company, the basis of the dividend split.
    pub company_net_worth: Decimal,

    /// Profit the company expects to make before the owner's salary.
    pub company_profit_estimate: Decimal,
}

impl Configuration {
    pub fn new(
        living_expenses: Decimal,
        company_net_worth: Decimal,
        company_profit_estimate: Decimal,
    ) -> Self {
        Self {
            living_expenses,
            company_net_worth,
            company_profit_estimate,
        }
    }

    /// Example company shown when nothing has been configured yet.
    pub fn demo() -> Self {
        Self {
            living_expenses: Decimal::ZERO,
            company_net_worth: Decimal::from(100_000),
            company_profit_estimate: Decimal::from(30_000),
        }
    }

    /// True when every input is zero, i.e. the user has not entered anything.
    pub fn is_unset(&self) -> bool {
        self.living_expenses.is_zero()
            && self.company_net_worth.is_zero()
            && self.company_profit_estimate.is_zero()
    }

    /// Checks that the configuration can be handed to the scenario engine.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if:
    /// - any input is negative
    /// - the inputs add up to [`MINIMUM_COMBINED_AMOUNT`] or less
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (field, value) in [
            ("living_expenses", self.living_expenses),
            ("company_net_worth", self.company_net_worth),
            ("company_profit_estimate", self.company_profit_estimate),
        ] {
            if value < Decimal::ZERO {
                return Err(ConfigurationError::Negative { field, value });
            }
        }

        let total = self.living_expenses + self.company_net_worth + self.company_profit_estimate;
        if total <= MINIMUM_COMBINED_AMOUNT {
            return Err(ConfigurationError::InsufficientAssets {
                total,
                minimum: MINIMUM_COMBINED_AMOUNT,
            });
        }

        Ok(())
    }
}
