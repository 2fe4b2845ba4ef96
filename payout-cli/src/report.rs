//! Rendering a [`Report`] for the terminal or as JSON.

use clap::ValueEnum;
use payout_core::{Scenario, ScenarioComparison};
use rust_decimal::Decimal;
use tabled::Table;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::app::Report;
use crate::utils::{format_euros, format_percent};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Renders the report in the requested format.
pub fn render(
    report: &Report,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}

pub fn render_table(report: &Report) -> String {
    let mut out = String::new();

    if report.demo {
        out.push_str("Nothing configured yet, showing an example company.\n\n");
    }

    out.push_str(&summary_table(report).to_string());
    out.push('\n');

    if let Some(comparison) = &report.comparison {
        out.push('\n');
        out.push_str(&describe_comparison(comparison));
        out.push('\n');
    }

    if report.ideal.net_income < report.configuration.living_expenses {
        out.push_str(&format!(
            "\nNo option reaches {} of net income; the ideal option pays out the most.\n",
            format_euros(report.configuration.living_expenses)
        ));
    }

    if let Some(scenarios) = &report.scenarios {
        out.push('\n');
        out.push_str(&scenario_table(scenarios, &report.ideal, &report.cheapest).to_string());
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{} options compared. Share: ?{}\n",
        report.scenario_count, report.share
    ));
    out
}

fn summary_table(report: &Report) -> Table {
    let mut columns = vec![("Ideal", &report.ideal)];
    if report.cheapest != report.ideal {
        columns.push(("Cheapest", &report.cheapest));
    }

    let mut builder = Builder::default();
    let mut header = vec![String::new()];
    header.extend(columns.iter().map(|(label, _)| label.to_string()));
    builder.push_record(header);

    let rows: [(&str, fn(&Scenario) -> String); 8] = [
        ("Dividends", |s| format_euros(s.dividends)),
        ("Salary", |s| format_euros(s.salary)),
        ("Net income", |s| format_euros(s.net_income)),
        ("Income tax rate", |s| format_percent(s.income_tax_percentage)),
        ("Personal taxes", |s| format_euros(s.personal_taxes)),
        ("Company tax from dividends", |s| {
            format_euros(s.company_taxes_from_dividends)
        }),
        ("Total taxes", |s| format_euros(s.taxes)),
        ("Company tax on retained profit", |s| {
            format_euros(s.company_taxes)
        }),
    ];
    for (label, value) in rows {
        let mut record = vec![label.to_string()];
        record.extend(columns.iter().map(|(_, scenario)| value(*scenario)));
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table
}

fn scenario_table(
    scenarios: &[Scenario],
    ideal: &Scenario,
    cheapest: &Scenario,
) -> Table {
    let mut builder = Builder::default();
    builder.push_record([
        "",
        "Dividends",
        "Salary",
        "Net income",
        "Rate",
        "Personal taxes",
        "Company tax (dividends)",
        "Total taxes",
    ]);

    for scenario in scenarios {
        let marker = if scenario == ideal {
            "ideal"
        } else if scenario == cheapest {
            "cheapest"
        } else {
            ""
        };
        builder.push_record([
            marker.to_string(),
            format_euros(scenario.dividends),
            format_euros(scenario.salary),
            format_euros(scenario.net_income),
            format_percent(scenario.income_tax_percentage),
            format_euros(scenario.personal_taxes),
            format_euros(scenario.company_taxes_from_dividends),
            format_euros(scenario.taxes),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::psql());
    table
}

/// One sentence on what the next cheaper option would change.
pub fn describe_comparison(comparison: &ScenarioComparison) -> String {
    let personal = change_phrase(comparison.personal_tax_difference, "personal taxes");
    let company = change_phrase(
        comparison.company_tax_difference,
        "company tax on dividends",
    );
    let conjunction = if comparison.personal_tax_difference > Decimal::ZERO
        && comparison.company_tax_difference > Decimal::ZERO
    {
        "and"
    } else {
        "but"
    };

    format!(
        "The next cheaper option ({} net income) {personal}, {conjunction} {company}. \
         In total you would save {}.",
        format_euros(comparison.next_cheaper.net_income),
        format_euros(comparison.total_tax_difference),
    )
}

fn change_phrase(
    difference: Decimal,
    what: &str,
) -> String {
    if difference > Decimal::ZERO {
        format!("would save {} in {what}", format_euros(difference))
    } else {
        format!("would increase {what} by {}", format_euros(difference.abs()))
    }
}
