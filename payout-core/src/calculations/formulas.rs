//! Tax formulas for an owner-employee of a limited company.
//!
//! Every function here is pure and works on yearly euro amounts. Nothing is
//! rounded; rounding happens where allocations are generated.
//!
//! # Dividend taxation
//!
//! A dividend is split against the company's net worth:
//!
//! | Part | Amount | Taxed as |
//! |------|--------|----------|
//! | Capital gains | up to 8% of net worth | capital income, 25% taxable up to 150,000 and 85% above |
//! | Work income | the rest | earned income, 75% taxable |
//!
//! Taxable capital income is taxed at 30% up to 30,000 and 34% above.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payout_core::calculations::formulas::{
//!     capital_gains_tax, corporate_tax_from_dividends, split_dividend_into_taxable_classes,
//! };
//!
//! let split = split_dividend_into_taxable_classes(dec!(10000), dec!(100000));
//!
//! assert_eq!(split.capital_gains, dec!(8000));
//! assert_eq!(split.work_income, dec!(1500));
//! assert_eq!(capital_gains_tax(split.capital_gains), dec!(600));
//! assert_eq!(corporate_tax_from_dividends(dec!(10000)), dec!(2500));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::TaxBracket;
use crate::calculations::common::{max, min};

/// Share of net worth that can be paid out as capital-gains-taxed dividend.
pub const CAPITAL_GAINS_SHARE_OF_NET_WORTH: Decimal = dec!(0.08);

/// Taxable share of the dividend part that exceeds the capital gains share.
pub const WORK_INCOME_INCLUSION_RATE: Decimal = dec!(0.75);

/// Capital gains up to this amount use the lower inclusion rate.
pub const CAPITAL_GAINS_INCLUSION_LIMIT: Decimal = dec!(150000);

/// Taxable share of capital gains up to [`CAPITAL_GAINS_INCLUSION_LIMIT`].
pub const CAPITAL_GAINS_LOWER_INCLUSION_RATE: Decimal = dec!(0.25);

/// Taxable share of capital gains above [`CAPITAL_GAINS_INCLUSION_LIMIT`].
pub const CAPITAL_GAINS_UPPER_INCLUSION_RATE: Decimal = dec!(0.85);

/// Taxable capital income up to this amount uses the lower rate.
pub const CAPITAL_INCOME_RATE_LIMIT: Decimal = dec!(30000);

pub const CAPITAL_INCOME_LOWER_RATE: Decimal = dec!(0.30);

pub const CAPITAL_INCOME_UPPER_RATE: Decimal = dec!(0.34);

/// Flat corporate income tax rate.
pub const CORPORATE_TAX_RATE: Decimal = dec!(0.2);

/// How a dividend is divided between the two personal tax classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendSplit {
    /// Part of the dividend taxed as capital gains.
    pub capital_gains: Decimal,

    /// Taxable work income coming from the rest of the dividend, already
    /// reduced to its inclusion rate.
    pub work_income: Decimal,
}

/// Income tax on earned income.
///
/// The bracket's marginal rate is applied to the whole income rather than
/// progressively per bracket.
pub fn income_tax(
    gross_work_income: Decimal,
    bracket: &TaxBracket,
) -> Decimal {
    bracket.rate() * gross_work_income
}

/// Splits a dividend into its capital gains and work income parts.
///
/// The first 8% of `net_worth` paid out is capital gains; 75% of anything
/// above that counts as work income.
pub fn split_dividend_into_taxable_classes(
    dividends: Decimal,
    net_worth: Decimal,
) -> DividendSplit {
    let capital_gains = min(net_worth * CAPITAL_GAINS_SHARE_OF_NET_WORTH, dividends);
    let work_income = max(Decimal::ZERO, dividends - capital_gains) * WORK_INCOME_INCLUSION_RATE;

    DividendSplit {
        capital_gains,
        work_income,
    }
}

/// Taxable part of a capital gains amount.
pub fn capital_gains_taxable_base(capital_gains: Decimal) -> Decimal {
    min(capital_gains, CAPITAL_GAINS_INCLUSION_LIMIT) * CAPITAL_GAINS_LOWER_INCLUSION_RATE
        + max(Decimal::ZERO, capital_gains - CAPITAL_GAINS_INCLUSION_LIMIT)
            * CAPITAL_GAINS_UPPER_INCLUSION_RATE
}

/// Tax on taxable capital income: 30% up to 30,000, 34% above.
pub fn capital_income_tax(taxable_base: Decimal) -> Decimal {
    let upper_part = max(Decimal::ZERO, taxable_base - CAPITAL_INCOME_RATE_LIMIT);
    (taxable_base - upper_part) * CAPITAL_INCOME_LOWER_RATE + upper_part * CAPITAL_INCOME_UPPER_RATE
}

/// Personal tax on the capital gains part of a dividend.
pub fn capital_gains_tax(capital_gains: Decimal) -> Decimal {
    capital_income_tax(capital_gains_taxable_base(capital_gains))
}

/// Personal tax on a whole dividend when both parts are taxed as capital income.
///
/// The capital gains part contributes its taxable base and the remainder
/// contributes 75% of itself; the sum goes through [`capital_income_tax`].
///
/// ```
/// use rust_decimal_macros::dec;
/// use payout_core::calculations::formulas::dividend_tax;
///
/// assert_eq!(dividend_tax(dec!(12000), dec!(12000)), dec!(2556));
/// ```
pub fn dividend_tax(
    dividends: Decimal,
    net_worth: Decimal,
) -> Decimal {
    let split = split_dividend_into_taxable_classes(dividends, net_worth);
    capital_income_tax(capital_gains_taxable_base(split.capital_gains) + split.work_income)
}

/// Corporate tax on a profit. Losses are not taxed and carry nothing back.
pub fn corporate_tax(company_profit: Decimal) -> Decimal {
    max(Decimal::ZERO, company_profit * CORPORATE_TAX_RATE)
}

/// Corporate tax already paid on the profit a dividend was distributed from.
///
/// The dividend is grossed up to pre-tax profit before taxing it.
pub fn corporate_tax_from_dividends(dividends: Decimal) -> Decimal {
    corporate_tax(dividends / (Decimal::ONE - CORPORATE_TAX_RATE))
}

/// Income tax plus capital gains tax. Excludes anything the company pays.
pub fn personal_taxes(
    total_work_income: Decimal,
    capital_gains: Decimal,
    bracket: &TaxBracket,
) -> Decimal {
    income_tax(total_work_income, bracket) + capital_gains_tax(capital_gains)
}

/// Personal taxes plus the corporate tax behind the dividend.
pub fn total_tax(
    total_work_income: Decimal,
    capital_gains: Decimal,
    dividends: Decimal,
    bracket: &TaxBracket,
) -> Decimal {
    personal_taxes(total_work_income, capital_gains, bracket)
        + corporate_tax_from_dividends(dividends)
}

/// Work income plus capital gains, minus the personal taxes on both.
pub fn net_income(
    total_work_income: Decimal,
    capital_gains: Decimal,
    bracket: &TaxBracket,
) -> Decimal {
    total_work_income + capital_gains - personal_taxes(total_work_income, capital_gains, bracket)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn bracket(rate_percent: Decimal) -> TaxBracket {
        TaxBracket::new(Decimal::ZERO, rate_percent)
    }

    // =========================================================================
    // income_tax
    // =========================================================================

    #[test]
    fn income_tax_applies_marginal_rate_to_whole_income() {
        assert_eq!(income_tax(dec!(30000), &bracket(dec!(14))), dec!(4200));
    }

    #[test]
    fn income_tax_zero_rate() {
        assert_eq!(income_tax(dec!(12000), &bracket(dec!(0))), dec!(0));
    }

    #[test]
    fn income_tax_fractional_rate() {
        assert_eq!(income_tax(dec!(50000), &bracket(dec!(23.5))), dec!(11750));
    }

    // =========================================================================
    // split_dividend_into_taxable_classes
    // =========================================================================

    #[test]
    fn split_within_eight_percent_is_all_capital_gains() {
        let split = split_dividend_into_taxable_classes(dec!(5000), dec!(100000));

        assert_eq!(
            split,
            DividendSplit {
                capital_gains: dec!(5000),
                work_income: dec!(0),
            }
        );
    }

    #[test]
    fn split_excess_counts_three_quarters_as_work_income() {
        let split = split_dividend_into_taxable_classes(dec!(12000), dec!(12000));

        assert_eq!(split.capital_gains, dec!(960));
        assert_eq!(split.work_income, dec!(8280));
    }

    #[test]
    fn split_without_net_worth_is_all_work_income() {
        let split = split_dividend_into_taxable_classes(dec!(4000), dec!(0));

        assert_eq!(split.capital_gains, dec!(0));
        assert_eq!(split.work_income, dec!(3000));
    }

    #[test]
    fn split_of_zero_dividend() {
        let split = split_dividend_into_taxable_classes(dec!(0), dec!(100000));

        assert_eq!(split.capital_gains, dec!(0));
        assert_eq!(split.work_income, dec!(0));
    }

    // =========================================================================
    // capital_gains_tax
    // =========================================================================

    #[test]
    fn capital_gains_tax_below_inclusion_limit() {
        // 12,000 * 25% = 3,000 taxable, all at 30%.
        assert_eq!(capital_gains_tax(dec!(12000)), dec!(900));
    }

    #[test]
    fn capital_gains_tax_above_inclusion_limit() {
        // 150,000 * 25% + 50,000 * 85% = 80,000 taxable.
        // 30,000 * 30% + 50,000 * 34% = 26,000.
        assert_eq!(capital_gains_tax(dec!(200000)), dec!(26000));
    }

    #[test]
    fn capital_gains_tax_of_zero() {
        assert_eq!(capital_gains_tax(dec!(0)), dec!(0));
    }

    #[test]
    fn capital_income_tax_switches_rate_at_thirty_thousand() {
        assert_eq!(capital_income_tax(dec!(30000)), dec!(9000));
        assert_eq!(capital_income_tax(dec!(31000)), dec!(9340));
    }

    // =========================================================================
    // dividend_tax
    // =========================================================================

    #[test]
    fn dividend_tax_reference_values() {
        assert_eq!(dividend_tax(dec!(12000), dec!(150000)), dec!(900));
        assert_eq!(dividend_tax(dec!(12000), dec!(12000)), dec!(2556));
        assert_eq!(dividend_tax(dec!(200000), dec!(10000000)), dec!(26000));
        assert_eq!(dividend_tax(dec!(9000), dec!(100000)), dec!(825));
    }

    // =========================================================================
    // corporate_tax
    // =========================================================================

    #[test]
    fn corporate_tax_is_twenty_percent() {
        assert_eq!(corporate_tax(dec!(50000)), dec!(10000));
    }

    #[test]
    fn corporate_tax_of_loss_is_zero() {
        assert_eq!(corporate_tax(dec!(-20000)), dec!(0));
    }

    #[test]
    fn corporate_tax_from_dividends_grosses_up() {
        // 8,000 / 0.8 = 10,000 profit, 20% of which is 2,000.
        assert_eq!(corporate_tax_from_dividends(dec!(8000)), dec!(2000));
    }

    // =========================================================================
    // Composition
    // =========================================================================

    #[test]
    fn personal_taxes_sum_income_and_capital_gains_tax() {
        assert_eq!(
            personal_taxes(dec!(30000), dec!(8000), &bracket(dec!(14))),
            dec!(4800)
        );
    }

    #[test]
    fn total_tax_adds_corporate_tax_from_dividends() {
        assert_eq!(
            total_tax(dec!(30000), dec!(8000), dec!(8000), &bracket(dec!(14))),
            dec!(6800)
        );
    }

    #[test]
    fn net_income_subtracts_personal_taxes() {
        assert_eq!(
            net_income(dec!(30000), dec!(8000), &bracket(dec!(14))),
            dec!(33200)
        );
    }

    proptest! {
        #[test]
        fn corporate_tax_is_never_negative(profit in -10_000_000i64..10_000_000) {
            let tax = corporate_tax(Decimal::from(profit));

            prop_assert!(tax >= Decimal::ZERO);
            if profit <= 0 {
                prop_assert_eq!(tax, Decimal::ZERO);
            }
        }

        #[test]
        fn split_accounts_for_whole_dividend(
            dividends in 0u64..2_000_000,
            net_worth in 0u64..10_000_000,
        ) {
            let dividends = Decimal::from(dividends);
            let net_worth = Decimal::from(net_worth);
            let split = split_dividend_into_taxable_classes(dividends, net_worth);
            let threshold = net_worth * CAPITAL_GAINS_SHARE_OF_NET_WORTH;

            if dividends <= threshold {
                prop_assert_eq!(split.capital_gains, dividends);
                prop_assert_eq!(split.work_income, Decimal::ZERO);
            } else {
                prop_assert_eq!(split.capital_gains, threshold);
            }
            prop_assert_eq!(
                split.capital_gains + split.work_income / WORK_INCOME_INCLUSION_RATE,
                dividends
            );
        }
    }
}
