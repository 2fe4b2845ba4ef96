//! Generation of costed salary/dividend scenarios.
//!
//! The generator samples dividends from `0` to 40% of company net worth and
//! salaries from `0` to the profit estimate. Each axis gets 100 positions
//! shaped by [`ease_in_expo`], so small payouts are sampled far more densely
//! than large ones. Sampled amounts are rounded to whole thousands, pairs
//! exceeding the available funds are dropped, duplicates are removed and the
//! survivors are scored and sorted by total tax.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use payout_core::get_scenarios;
//!
//! let scenarios = get_scenarios(dec!(150000), dec!(100000));
//!
//! assert!(!scenarios.is_empty());
//! assert!(scenarios.windows(2).all(|w| w[0].taxes <= w[1].taxes));
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use tracing::{debug, trace, warn};

use crate::calculations::bracket_table::BracketTable;
use crate::calculations::common::{ease_in_expo, round_to_thousand};
use crate::calculations::formulas::{
    capital_gains_tax, corporate_tax, corporate_tax_from_dividends, income_tax, net_income,
    personal_taxes, split_dividend_into_taxable_classes, total_tax,
};
use crate::Scenario;

/// Number of sample positions per axis.
pub const SAMPLES_PER_AXIS: usize = 100;

/// Largest dividend considered, as a share of company net worth.
pub const MAX_DIVIDEND_SHARE_OF_NET_WORTH: Decimal = dec!(0.4);

/// Inclusive euro range sampled on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AllocationRange {
    min: Decimal,
    max: Decimal,
}

impl AllocationRange {
    fn new(
        min: Decimal,
        max: Decimal,
    ) -> Self {
        Self { min, max }
    }

    /// Amount at `position` (0 to 1) along the range, rounded to a thousand.
    fn amount_at(
        &self,
        position: f64,
    ) -> Decimal {
        let min = self.min.to_f64().unwrap_or(0.0);
        let span = (self.max - self.min).to_f64().unwrap_or(0.0);
        round_to_thousand(min + span * position)
    }
}

/// Scores and ranks salary/dividend allocations against a bracket table.
#[derive(Debug, Clone)]
pub struct ScenarioGenerator<'a> {
    brackets: &'a BracketTable,
}

impl<'a> ScenarioGenerator<'a> {
    pub fn new(brackets: &'a BracketTable) -> Self {
        Self { brackets }
    }

    /// Generates every sampled scenario, cheapest first.
    ///
    /// Returns a single all-zero scenario when both inputs are zero. Never
    /// fails for non-negative inputs.
    pub fn generate(
        &self,
        company_profit_estimate: Decimal,
        company_net_worth: Decimal,
    ) -> Vec<Scenario> {
        if company_profit_estimate.is_zero() && company_net_worth.is_zero() {
            warn!("company profit and net worth are both zero, only the empty payout exists");
        }

        let dividend_range = AllocationRange::new(
            Decimal::ZERO,
            company_net_worth * MAX_DIVIDEND_SHARE_OF_NET_WORTH,
        );
        let salary_range = AllocationRange::new(Decimal::ZERO, company_profit_estimate);

        let allocations = self.allocations(
            company_profit_estimate + company_net_worth,
            dividend_range,
            salary_range,
        );

        let scenarios: Vec<Scenario> = allocations
            .into_iter()
            .map(|(dividends, salary)| {
                self.score(company_profit_estimate, company_net_worth, dividends, salary)
            })
            .collect();

        let sorted = sort_by_taxes(&scenarios);
        debug!(
            count = sorted.len(),
            %company_profit_estimate,
            %company_net_worth,
            "generated scenarios"
        );
        sorted
    }

    /// Distinct `(dividends, salary)` pairs that fit within `available_funds`,
    /// in sampling order.
    fn allocations(
        &self,
        available_funds: Decimal,
        dividend_range: AllocationRange,
        salary_range: AllocationRange,
    ) -> Vec<(Decimal, Decimal)> {
        let positions: Vec<f64> = (0..SAMPLES_PER_AXIS)
            .map(|i| ease_in_expo(i as f64 / SAMPLES_PER_AXIS as f64))
            .collect();
        let dividends: Vec<Decimal> = positions
            .iter()
            .map(|&p| dividend_range.amount_at(p))
            .collect();
        let salaries: Vec<Decimal> = positions
            .iter()
            .map(|&p| salary_range.amount_at(p))
            .collect();

        let mut seen = HashSet::new();
        let mut allocations = Vec::new();

        for &dividend in &dividends {
            for &salary in &salaries {
                if dividend + salary > available_funds {
                    continue;
                }
                if seen.insert((dividend, salary)) {
                    allocations.push((dividend, salary));
                }
            }
        }

        trace!(
            candidates = dividends.len() * salaries.len(),
            distinct = allocations.len(),
            "sampled allocations"
        );
        allocations
    }

    /// Computes every tax figure for one allocation.
    pub fn score(
        &self,
        company_profit_estimate: Decimal,
        company_net_worth: Decimal,
        dividends: Decimal,
        salary: Decimal,
    ) -> Scenario {
        let company_profit = company_profit_estimate - salary;
        let split = split_dividend_into_taxable_classes(dividends, company_net_worth);
        let total_work_income = salary + split.work_income;
        let bracket = self.brackets.bracket_for(total_work_income);

        Scenario {
            dividends,
            salary,
            company_profit,
            gross_income: salary + dividends,
            income_tax: income_tax(total_work_income, bracket),
            income_tax_percentage: bracket.marginal_rate_percent,
            tax_from_dividends: capital_gains_tax(split.capital_gains)
                + income_tax(split.work_income, bracket),
            company_taxes: corporate_tax(company_profit),
            company_taxes_from_dividends: corporate_tax_from_dividends(dividends),
            personal_taxes: personal_taxes(total_work_income, split.capital_gains, bracket),
            taxes: total_tax(total_work_income, split.capital_gains, dividends, bracket),
            net_income: net_income(total_work_income, split.capital_gains, bracket),
            net_salary: salary - income_tax(salary, bracket),
        }
    }
}

/// Returns the scenarios ordered by total tax, cheapest first.
///
/// The sort is stable, so equally taxed scenarios keep their relative order.
pub fn sort_by_taxes(scenarios: &[Scenario]) -> Vec<Scenario> {
    let mut sorted = scenarios.to_vec();
    sorted.sort_by(|a, b| a.taxes.cmp(&b.taxes));
    sorted
}

/// Generates scenarios with the built-in Finnish bracket table.
pub fn get_scenarios(
    company_profit_estimate: Decimal,
    company_net_worth: Decimal,
) -> Vec<Scenario> {
    let brackets = BracketTable::finnish();
    ScenarioGenerator::new(&brackets).generate(company_profit_estimate, company_net_worth)
}
