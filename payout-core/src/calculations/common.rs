//! Common helpers shared by the formula and scenario modules.

use rust_decimal::Decimal;

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use payout_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Exponential ease-in curve on `[0, 1]`.
///
/// Maps `0` to `0` and grows as `2^(10x - 10)`, so evenly spaced inputs land
/// close together near zero and far apart near one.
pub fn ease_in_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * x - 10.0)
    }
}

/// Rounds a euro amount to the nearest thousand, halves rounding up.
///
/// Non-finite input yields zero.
pub fn round_to_thousand(value: f64) -> Decimal {
    let thousands = (value / 1000.0).round();
    if !thousands.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from(thousands as i64) * Decimal::ONE_THOUSAND
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // max / min tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn max_handles_negative_values() {
        assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
    }

    #[test]
    fn min_returns_smaller_value() {
        assert_eq!(min(dec!(100.00), dec!(200.00)), dec!(100.00));
        assert_eq!(min(dec!(150.00), dec!(150.00)), dec!(150.00));
    }

    // =========================================================================
    // ease_in_expo tests
    // =========================================================================

    #[test]
    fn ease_in_expo_starts_at_zero() {
        assert_eq!(ease_in_expo(0.0), 0.0);
    }

    #[test]
    fn ease_in_expo_reaches_one() {
        assert!((ease_in_expo(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn ease_in_expo_halfway_is_small() {
        assert!((ease_in_expo(0.5) - 0.03125).abs() < 1e-12);
    }

    #[test]
    fn ease_in_expo_is_increasing() {
        let samples: Vec<f64> = (0..100).map(|i| ease_in_expo(i as f64 / 100.0)).collect();

        assert!(samples.windows(2).all(|w| w[0] < w[1]));
    }

    // =========================================================================
    // round_to_thousand tests
    // =========================================================================

    #[test]
    fn round_to_thousand_rounds_down_below_midpoint() {
        assert_eq!(round_to_thousand(12_499.0), dec!(12000));
    }

    #[test]
    fn round_to_thousand_rounds_up_at_midpoint() {
        assert_eq!(round_to_thousand(12_500.0), dec!(13000));
    }

    #[test]
    fn round_to_thousand_small_values_become_zero() {
        assert_eq!(round_to_thousand(0.97), dec!(0));
        assert_eq!(round_to_thousand(0.0), dec!(0));
    }

    #[test]
    fn round_to_thousand_ignores_nan() {
        assert_eq!(round_to_thousand(f64::NAN), dec!(0));
    }
}
