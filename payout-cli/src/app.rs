//! Glue between user input and the scenario engine.

use payout_core::{
    BracketTable, Configuration, ConfigurationError, Scenario, ScenarioComparison,
    ScenarioGenerator, compare_with_next_cheaper, pick_cheapest, pick_ideal, pick_most_expensive,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::share;

/// Errors that prevent a report from being produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("no scenarios could be generated")]
    NoScenarios,
}

/// Values given directly on the command line. Each one replaces the stored
/// or shared value when present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigurationOverrides {
    pub living_expenses: Option<Decimal>,
    pub company_net_worth: Option<Decimal>,
    pub company_profit_estimate: Option<Decimal>,
}

/// Builds the configuration to compute with.
///
/// The stored configuration is the base, a share string replaces it as a
/// whole, and individual overrides replace single values on top of that.
/// Anything left unspecified is zero.
pub fn resolve_configuration(
    stored: Option<Configuration>,
    shared: Option<Configuration>,
    overrides: ConfigurationOverrides,
) -> Configuration {
    let base = shared.or(stored).unwrap_or_default();

    Configuration {
        living_expenses: overrides.living_expenses.unwrap_or(base.living_expenses),
        company_net_worth: overrides.company_net_worth.unwrap_or(base.company_net_worth),
        company_profit_estimate: overrides
            .company_profit_estimate
            .unwrap_or(base.company_profit_estimate),
    }
}

/// Everything the shell shows for one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub configuration: Configuration,

    /// True when nothing was configured and the demo company was used.
    pub demo: bool,

    pub share: String,
    pub scenario_count: usize,
    pub ideal: Scenario,
    pub cheapest: Scenario,
    pub most_expensive: Scenario,
    pub comparison: Option<ScenarioComparison>,

    /// Every scenario, cheapest first. Only filled in on request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenarios: Option<Vec<Scenario>>,
}

/// Generates scenarios for `config` and picks the ones worth showing.
///
/// An unset configuration is replaced by [`Configuration::demo`] for scenario
/// generation; anything else has to pass [`Configuration::validate`].
pub fn compute_report(
    config: &Configuration,
    brackets: &BracketTable,
    include_scenarios: bool,
) -> Result<Report, ReportError> {
    let demo = config.is_unset();
    let inputs = if demo {
        info!("nothing configured, showing the demo company");
        Configuration::demo()
    } else {
        config.validate()?;
        *config
    };

    let scenarios = ScenarioGenerator::new(brackets)
        .generate(inputs.company_profit_estimate, inputs.company_net_worth);

    let ideal = pick_ideal(&scenarios, config.living_expenses)
        .ok_or(ReportError::NoScenarios)?
        .clone();
    let cheapest = pick_cheapest(&scenarios)
        .ok_or(ReportError::NoScenarios)?
        .clone();
    let most_expensive = pick_most_expensive(&scenarios)
        .ok_or(ReportError::NoScenarios)?
        .clone();
    let comparison = compare_with_next_cheaper(&scenarios, &ideal);

    debug!(
        scenarios = scenarios.len(),
        ideal_dividends = %ideal.dividends,
        ideal_salary = %ideal.salary,
        "selected scenarios"
    );

    Ok(Report {
        configuration: *config,
        demo,
        share: share::encode(config),
        scenario_count: scenarios.len(),
        ideal,
        cheapest,
        most_expensive,
        comparison,
        scenarios: include_scenarios.then_some(scenarios),
    })
}
