//! Picking scenarios out of a generated list.
//!
//! None of these functions assume the input is sorted, except
//! [`compare_with_next_cheaper`], which works on the tax-ordered list the
//! generator returns.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::Scenario;

/// How the ideal scenario differs from the next cheaper one.
///
/// Differences are `ideal - next_cheaper`, so positive values are extra tax the
/// ideal scenario pays in exchange for more net income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioComparison {
    pub next_cheaper: Scenario,
    pub personal_tax_difference: Decimal,
    pub company_tax_difference: Decimal,
    pub total_tax_difference: Decimal,
}

/// The scenario with the lowest total tax. Ties go to the earliest scenario.
pub fn pick_cheapest(scenarios: &[Scenario]) -> Option<&Scenario> {
    scenarios.iter().reduce(|best, s| if s.taxes < best.taxes { s } else { best })
}

/// The scenario with the highest total tax. Ties go to the earliest scenario.
pub fn pick_most_expensive(scenarios: &[Scenario]) -> Option<&Scenario> {
    scenarios.iter().reduce(|worst, s| if s.taxes > worst.taxes { s } else { worst })
}

/// The cheapest scenario whose net income covers `living_expenses`.
///
/// When no scenario covers them, returns the one with the most net income
/// instead. Returns `None` only for an empty list.
pub fn pick_ideal(
    scenarios: &[Scenario],
    living_expenses: Decimal,
) -> Option<&Scenario> {
    let affordable = scenarios
        .iter()
        .filter(|s| s.net_income >= living_expenses)
        .reduce(|best, s| if s.taxes < best.taxes { s } else { best });

    affordable.or_else(|| {
        scenarios
            .iter()
            .reduce(|best, s| if s.net_income > best.net_income { s } else { best })
    })
}

/// Same as [`pick_ideal`].
pub fn get_ideal_scenario(
    scenarios: &[Scenario],
    living_expenses: Decimal,
) -> Option<&Scenario> {
    pick_ideal(scenarios, living_expenses)
}

/// Compares `ideal` with the scenario directly before it in `scenarios`.
///
/// `scenarios` must be ordered by total tax. Returns `None` if `ideal` is the
/// first scenario or is not in the list.
pub fn compare_with_next_cheaper(
    scenarios: &[Scenario],
    ideal: &Scenario,
) -> Option<ScenarioComparison> {
    let index = scenarios.iter().position(|s| s == ideal)?;
    let next_cheaper = scenarios.get(index.checked_sub(1)?)?;

    Some(ScenarioComparison {
        personal_tax_difference: ideal.personal_taxes - next_cheaper.personal_taxes,
        company_tax_difference: ideal.company_taxes_from_dividends
            - next_cheaper.company_taxes_from_dividends,
        total_tax_difference: ideal.taxes - next_cheaper.taxes,
        next_cheaper: next_cheaper.clone(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::get_scenarios;

    fn scenario(
        salary: Decimal,
        taxes: Decimal,
        net_income: Decimal,
    ) -> Scenario {
        Scenario {
            dividends: dec!(0),
            salary,
            company_profit: dec!(0),
            gross_income: salary,
            income_tax: taxes,
            income_tax_percentage: dec!(0),
            tax_from_dividends: dec!(0),
            company_taxes: dec!(0),
            company_taxes_from_dividends: dec!(0),
            personal_taxes: taxes,
            taxes,
            net_income,
            net_salary: net_income,
        }
    }

    fn sample() -> Vec<Scenario> {
        vec![
            scenario(dec!(1000), dec!(0), dec!(1000)),
            scenario(dec!(2000), dec!(100), dec!(15000)),
            scenario(dec!(3000), dec!(200), dec!(25000)),
            scenario(dec!(4000), dec!(300), dec!(24000)),
        ]
    }

    // =========================================================================
    // pick_cheapest / pick_most_expensive
    // =========================================================================

    #[test]
    fn pick_cheapest_returns_lowest_taxes() {
        let scenarios = sample();

        assert_eq!(pick_cheapest(&scenarios), Some(&scenarios[0]));
    }

    #[test]
    fn pick_cheapest_prefers_earliest_on_tie() {
        let scenarios = vec![
            scenario(dec!(1000), dec!(50), dec!(900)),
            scenario(dec!(2000), dec!(50), dec!(1900)),
        ];

        assert_eq!(pick_cheapest(&scenarios).map(|s| s.salary), Some(dec!(1000)));
    }

    #[test]
    fn pick_most_expensive_returns_highest_taxes() {
        let scenarios = sample();

        assert_eq!(pick_most_expensive(&scenarios), Some(&scenarios[3]));
    }

    #[test]
    fn picks_on_empty_list_return_none() {
        assert_eq!(pick_cheapest(&[]), None);
        assert_eq!(pick_most_expensive(&[]), None);
        assert_eq!(pick_ideal(&[], dec!(0)), None);
    }

    // =========================================================================
    // pick_ideal
    // =========================================================================

    #[test]
    fn pick_ideal_returns_cheapest_covering_living_expenses() {
        let scenarios = sample();

        assert_eq!(pick_ideal(&scenarios, dec!(20000)), Some(&scenarios[2]));
    }

    #[test]
    fn pick_ideal_accepts_exact_match() {
        let scenarios = sample();

        assert_eq!(pick_ideal(&scenarios, dec!(15000)), Some(&scenarios[1]));
    }

    #[test]
    fn pick_ideal_without_requirement_is_cheapest() {
        let scenarios = sample();

        assert_eq!(pick_ideal(&scenarios, dec!(0)), pick_cheapest(&scenarios));
    }

    #[test]
    fn pick_ideal_falls_back_to_highest_net_income() {
        let scenarios = sample();

        assert_eq!(pick_ideal(&scenarios, dec!(1000000)), Some(&scenarios[2]));
    }

    #[test]
    fn get_ideal_scenario_matches_pick_ideal() {
        let scenarios = sample();

        assert_eq!(
            get_ideal_scenario(&scenarios, dec!(20000)),
            pick_ideal(&scenarios, dec!(20000))
        );
    }

    // =========================================================================
    // compare_with_next_cheaper
    // =========================================================================

    #[test]
    fn compare_reports_differences_to_previous_scenario() {
        let scenarios = sample();

        let comparison = compare_with_next_cheaper(&scenarios, &scenarios[2]).unwrap();

        assert_eq!(comparison.next_cheaper, scenarios[1]);
        assert_eq!(comparison.personal_tax_difference, dec!(100));
        assert_eq!(comparison.company_tax_difference, dec!(0));
        assert_eq!(comparison.total_tax_difference, dec!(100));
    }

    #[test]
    fn compare_first_scenario_has_nothing_cheaper() {
        let scenarios = sample();

        assert_eq!(compare_with_next_cheaper(&scenarios, &scenarios[0]), None);
    }

    #[test]
    fn compare_unknown_scenario_returns_none() {
        let scenarios = sample();
        let outsider = scenario(dec!(9000), dec!(1), dec!(1));

        assert_eq!(compare_with_next_cheaper(&scenarios, &outsider), None);
    }

    // =========================================================================
    // End to end
    // =========================================================================

    #[test]
    fn ideal_and_cheapest_for_typical_company() {
        let scenarios = get_scenarios(dec!(150000), dec!(100000));
        let living_expenses = dec!(20000);

        let ideal = pick_ideal(&scenarios, living_expenses).unwrap();
        let cheapest = pick_cheapest(&scenarios).unwrap();

        assert!(ideal.net_income >= living_expenses);
        let cheapest_affordable = scenarios
            .iter()
            .filter(|s| s.net_income >= living_expenses)
            .map(|s| s.taxes)
            .min()
            .unwrap();
        assert_eq!(ideal.taxes, cheapest_affordable);

        let global_minimum = scenarios.iter().map(|s| s.taxes).min().unwrap();
        assert_eq!(cheapest.taxes, global_minimum);
        assert_eq!(cheapest, &scenarios[0]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn unreachable_requirement_picks_max_net_income(
            profit in 0u64..300_000,
            net_worth in 0u64..600_000,
        ) {
            let scenarios = get_scenarios(Decimal::from(profit), Decimal::from(net_worth));
            let max_net_income = scenarios.iter().map(|s| s.net_income).max().unwrap();

            let ideal = pick_ideal(&scenarios, max_net_income + Decimal::ONE).unwrap();

            prop_assert_eq!(ideal.net_income, max_net_income);
        }
    }
}
