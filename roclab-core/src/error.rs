//! Error type for calculator construction and configuration loading.
//!
//! Stepping a calculator never fails: warm-up is reported as `None` and
//! non-finite results are returned as values. Errors only arise before the
//! first observation is fed.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RocError {
    #[error("invalid configuration: period must be >= 1 (got {period})")]
    InvalidConfiguration { period: usize },

    #[error("read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("serialize config TOML: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
