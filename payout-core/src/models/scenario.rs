use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fully costed (dividend, salary) allocation.
///
/// Scenarios are produced by [`ScenarioGenerator`](crate::ScenarioGenerator)
/// and never modified afterwards. All amounts are yearly euros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Dividend paid to the owner.
    pub dividends: Decimal,

    /// Salary paid to the owner.
    pub salary: Decimal,

    /// Profit left in the company after the salary has been paid.
    pub company_profit: Decimal,

    /// Salary plus dividends, before any tax.
    pub gross_income: Decimal,

    /// Income tax on salary plus the work-income share of the dividend.
    pub income_tax: Decimal,

    /// Marginal bracket rate that was applied, in percent.
    pub income_tax_percentage: Decimal,

    /// Personal tax attributable to the dividend alone.
    pub tax_from_dividends: Decimal,

    /// Corporate tax on the profit retained in the company.
    pub company_taxes: Decimal,

    /// Corporate tax the company paid to be able to distribute the dividend.
    pub company_taxes_from_dividends: Decimal,

    /// Income tax plus capital gains tax.
    pub personal_taxes: Decimal,

    /// Personal taxes plus corporate tax from dividends. Scenarios are ranked by this.
    pub taxes: Decimal,

    /// What the owner keeps after personal taxes.
    pub net_income: Decimal,

    /// Salary after income tax at the scenario's marginal rate.
    pub net_salary: Decimal,
}

impl Scenario {
    /// Total tax per euro of net income.
    ///
    /// Returns zero when the scenario has no net income so that the ratio
    /// can always be compared.
    pub fn tax_to_net_income_ratio(&self) -> Decimal {
        if self.net_income.is_zero() {
            Decimal::ZERO
        } else {
            self.taxes / self.net_income
        }
    }

    /// The `(dividends, salary)` pair identifying this allocation.
    pub fn allocation(&self) -> (Decimal, Decimal) {
        (self.dividends, self.salary)
    }
}
