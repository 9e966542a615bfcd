//! Calculator configuration.
//!
//! Stored as TOML:
//!
//! ```toml
//! period = 5
//! ```
//!
//! A missing `period` falls back to `DEFAULT_PERIOD`. Validation happens in
//! `build()`, so a zero period parses but fails to produce a calculator.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RocError;
use crate::indicators::{RocCalculator, DEFAULT_PERIOD};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RocConfig {
    #[serde(default = "default_period")]
    pub period: usize,
}

fn default_period() -> usize {
    DEFAULT_PERIOD
}

impl Default for RocConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
        }
    }
}

impl RocConfig {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, RocError> {
        let content = std::fs::read_to_string(path).map_err(|source| RocError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, RocError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the config to TOML.
    pub fn to_toml(&self) -> Result<String, RocError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Build a calculator, rejecting a zero period.
    pub fn build(&self) -> Result<RocCalculator, RocError> {
        RocCalculator::new(self.period)
    }
}
