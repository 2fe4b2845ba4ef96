//! Shareable query-string encoding of a [`Configuration`].
//!
//! A configuration is written as `l=<living expenses>&n=<net worth>&p=<profit>`
//! with whole, non-negative euro amounts. Decoding is all or nothing: a single
//! bad pair rejects the whole string.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payout_cli::share;
//! use payout_core::Configuration;
//!
//! let config = Configuration::new(dec!(20000), dec!(100000), dec!(150000));
//! let encoded = share::encode(&config);
//!
//! assert_eq!(encoded, "l=20000&n=100000&p=150000");
//! assert_eq!(share::decode(&encoded).unwrap(), config);
//! ```

use payout_core::{Configuration, ConfigurationError};
use rust_decimal::Decimal;
use thiserror::Error;

const LIVING_EXPENSES_KEY: &str = "l";
const NET_WORTH_KEY: &str = "n";
const PROFIT_ESTIMATE_KEY: &str = "p";

/// Errors that can occur while decoding a share string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareCodeError {
    #[error("expected key=value, got '{0}'")]
    Malformed(String),

    #[error("unknown key '{0}'")]
    UnknownKey(String),

    #[error("value '{value}' for '{key}' is not a non-negative whole number")]
    InvalidValue { key: String, value: String },

    #[error("missing value for '{0}'")]
    MissingKey(&'static str),

    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}

/// Encodes a configuration as a query string. Amounts are truncated to whole euros.
pub fn encode(config: &Configuration) -> String {
    format!(
        "{LIVING_EXPENSES_KEY}={}&{NET_WORTH_KEY}={}&{PROFIT_ESTIMATE_KEY}={}",
        config.living_expenses.trunc().normalize(),
        config.company_net_worth.trunc().normalize(),
        config.company_profit_estimate.trunc().normalize(),
    )
}

/// Decodes a query string produced by [`encode`].
///
/// A leading `?` is ignored, as are empty pairs. The decoded configuration
/// must pass [`Configuration::validate`].
pub fn decode(input: &str) -> Result<Configuration, ShareCodeError> {
    let mut living_expenses = None;
    let mut company_net_worth = None;
    let mut company_profit_estimate = None;

    for pair in input.trim().trim_start_matches('?').split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| ShareCodeError::Malformed(pair.to_string()))?;

        let slot = match key {
            LIVING_EXPENSES_KEY => &mut living_expenses,
            NET_WORTH_KEY => &mut company_net_worth,
            PROFIT_ESTIMATE_KEY => &mut company_profit_estimate,
            _ => return Err(ShareCodeError::UnknownKey(key.to_string())),
        };

        let amount: u64 = value.parse().map_err(|_| ShareCodeError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        *slot = Some(Decimal::from(amount));
    }

    let config = Configuration::new(
        living_expenses.ok_or(ShareCodeError::MissingKey(LIVING_EXPENSES_KEY))?,
        company_net_worth.ok_or(ShareCodeError::MissingKey(NET_WORTH_KEY))?,
        company_profit_estimate.ok_or(ShareCodeError::MissingKey(PROFIT_ESTIMATE_KEY))?,
    );
    config.validate()?;

    Ok(config)
}
