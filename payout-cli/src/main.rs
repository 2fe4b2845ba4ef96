use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};

use payout_cli::app::{self, ConfigurationOverrides};
use payout_cli::report::{self, OutputFormat};
use payout_cli::utils::parse_amount;
use payout_cli::{config_store, logging, share};
use payout_core::BracketTable;
use payout_data::BracketTableLoader;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Finds the salary and dividend split that leaves the most money for the
/// least tax.
///
/// Amounts accept `100 000`, `100,000` and `100_000`; blank means 0.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Estimated company profit for the year.
    #[arg(long, value_parser = parse_amount)]
    profit: Option<Decimal>,

    /// Company net worth (net assets) from the last balance sheet.
    #[arg(long, value_parser = parse_amount)]
    net_worth: Option<Decimal>,

    /// Yearly net income you need to live on.
    #[arg(long, value_parser = parse_amount)]
    living_expenses: Option<Decimal>,

    /// A share string such as `l=20000&n=100000&p=150000`.
    #[arg(long)]
    share: Option<String>,

    /// TOML file holding the last used configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the resolved configuration back to `--config`.
    #[arg(long, requires = "config")]
    save: bool,

    /// CSV file with income tax brackets. Defaults to the built-in table.
    #[arg(long)]
    brackets: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Also list every generated scenario.
    #[arg(long)]
    all: bool,

    /// Log filter, e.g. `debug` or `warn,payout_core=trace`. Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let stored = match &cli.config {
        Some(path) => config_store::load(path)?,
        None => None,
    };
    let shared = cli
        .share
        .as_deref()
        .map(share::decode)
        .transpose()
        .context("cannot use share string")?;

    let config = app::resolve_configuration(
        stored,
        shared,
        ConfigurationOverrides {
            living_expenses: cli.living_expenses,
            company_net_worth: cli.net_worth,
            company_profit_estimate: cli.profit,
        },
    );
    debug!(?config, "resolved configuration");

    let brackets = match &cli.brackets {
        Some(path) => BracketTableLoader::load_from_path(path)?,
        None => BracketTable::finnish(),
    };

    let report = app::compute_report(&config, &brackets, cli.all)?;

    if cli.save {
        let Some(path) = &cli.config else {
            bail!("--save needs --config");
        };
        config_store::save(path, &config)?;
        info!(path = %path.display(), "configuration saved");
    }

    let output = report::render(&report, cli.format).context("cannot render report")?;
    print!("{output}");
    if cli.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
