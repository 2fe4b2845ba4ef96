//! Persistence of the last used [`Configuration`] as a TOML file.
//!
//! ```toml
//! living_expenses = 20000
//! company_net_worth = 100000
//! company_profit_estimate = 150000
//! ```

use std::fs;
use std::io;
use std::path::Path;

use payout_core::Configuration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while reading or writing a stored configuration.
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("cannot access configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Parses a configuration from TOML text.
pub fn from_toml_str(
    contents: &str,
    origin: &str,
) -> Result<Configuration, ConfigStoreError> {
    toml::from_str(contents).map_err(|source| ConfigStoreError::Parse {
        path: origin.to_string(),
        source,
    })
}

/// Reads the configuration stored at `path`.
///
/// Returns `Ok(None)` when the file does not exist yet.
pub fn load(path: &Path) -> Result<Option<Configuration>, ConfigStoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no stored configuration");
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigStoreError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let config = from_toml_str(&contents, &path.display().to_string())?;
    debug!(path = %path.display(), ?config, "loaded stored configuration");
    Ok(Some(config))
}

/// Writes `config` to `path`, replacing any previous contents.
pub fn save(
    path: &Path,
    config: &Configuration,
) -> Result<(), ConfigStoreError> {
    let contents = toml::to_string(config)?;
    fs::write(path, contents).map_err(|source| ConfigStoreError::Io {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), "stored configuration");
    Ok(())
}
