use std::fs::File;
use std::io::Read;
use std::path::Path;

use payout_core::{BracketTable, BracketTableError, TaxBracket};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a bracket table.
#[derive(Debug, Error)]
pub enum BracketLoaderError {
    #[error("cannot read bracket file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid bracket table: {0}")]
    InvalidTable(#[from] BracketTableError),
}

impl From<csv::Error> for BracketLoaderError {
    fn from(err: csv::Error) -> Self {
        BracketLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a bracket CSV file.
///
/// - `income_threshold`: income at which the rate starts to apply
/// - `marginal_rate_percent`: the rate in percent (e.g. `23.5`)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBracketRecord {
    pub income_threshold: Decimal,
    pub marginal_rate_percent: Decimal,
}

impl From<&TaxBracketRecord> for TaxBracket {
    fn from(record: &TaxBracketRecord) -> Self {
        TaxBracket::new(record.income_threshold, record.marginal_rate_percent)
    }
}

/// Loader for income tax bracket tables stored as CSV.
///
/// Rows must be in ascending threshold order; the resulting table is
/// validated with [`BracketTable::new`].
pub struct BracketTableLoader;

impl BracketTableLoader {
    /// Parse bracket records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a byte slice. Whitespace around values is ignored.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBracketRecord>, BracketLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Build a validated table from parsed records.
    pub fn into_table(records: &[TaxBracketRecord]) -> Result<BracketTable, BracketLoaderError> {
        let brackets = records.iter().map(TaxBracket::from).collect();
        Ok(BracketTable::new(brackets)?)
    }

    /// Read, parse and validate a bracket table from a CSV file.
    pub fn load_from_path(path: &Path) -> Result<BracketTable, BracketLoaderError> {
        let file = File::open(path).map_err(|source| BracketLoaderError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let records = Self::parse(file)?;
        let table = Self::into_table(&records)?;

        debug!(path = %path.display(), brackets = records.len(), "loaded bracket table");
        Ok(table)
    }
}
