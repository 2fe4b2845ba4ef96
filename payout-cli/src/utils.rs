use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when user input cannot be used as a euro amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{input}' must not be negative")]
    Negative { input: String },
}

/// Normalizes input for amount parsing: trims whitespace and removes
/// thousands separators (comma, space, underscore).
fn normalize_amount_input(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '_' | '\u{a0}'))
        .collect()
}

/// Parses free text into a whole, non-negative euro amount.
///
/// Handles `1,234`, `1 234` and `1_234` style thousands separators.
/// Empty or whitespace-only input is treated as 0. Cents are dropped.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid {
            input: s.to_string(),
            source: e,
        }
    })?;

    if value < Decimal::ZERO {
        return Err(ParseAmountError::Negative {
            input: s.to_string(),
        });
    }

    Ok(value.trunc())
}

/// Formats an amount as whole euros with space-separated thousands,
/// e.g. `12 345 €`.
pub fn format_euros(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().normalize().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if rounded < Decimal::ZERO {
        format!("-{grouped} €")
    } else {
        format!("{grouped} €")
    }
}

/// Formats a percentage without trailing zeros, e.g. `23.5 %`.
pub fn format_percent(value: Decimal) -> String {
    format!("{} %", value.normalize())
}
