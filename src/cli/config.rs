//! Configuration file
//!
//! A JSON object; every key is optional:
//!
//! ```json
//! {
//!   "timezone": "America/Sao_Paulo",
//!   "default_date_format": "%Y-%m-%d",
//!   "alias_prefix": "tbl",
//!   "partition_key": "data_particao",
//!   "log_level": "INFO"
//! }
//! ```

use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::dates::{parse_timezone, DateFormat, DEFAULT_TIMEZONE};
use crate::dialect::DEFAULT_ALIAS_PREFIX;
use crate::observability::Severity;
use crate::partitions::DEFAULT_PARTITION_KEY;

use super::errors::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// IANA timezone in which "today" is evaluated
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Date format applied when a request does not carry one
    #[serde(default = "default_date_format")]
    pub default_date_format: String,

    /// Prefix of generated CTE aliases
    #[serde(default = "default_alias_prefix")]
    pub alias_prefix: String,

    /// Partition key holding the date in storage listings
    #[serde(default = "default_partition_key")]
    pub partition_key: String,

    /// Minimum log severity written to stderr
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}
fn default_date_format() -> String {
    DateFormat::ISO_DATE.to_string()
}
fn default_alias_prefix() -> String {
    DEFAULT_ALIAS_PREFIX.to_string()
}
fn default_partition_key() -> String {
    DEFAULT_PARTITION_KEY.to_string()
}
fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            default_date_format: default_date_format(),
            alias_prefix: default_alias_prefix(),
            partition_key: default_partition_key(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        self.tz()?;
        self.log_severity()?;

        DateFormat::new(self.default_date_format.as_str())
            .map_err(|e| CliError::config_error(e.to_string()))?;

        let mut prefix = self.alias_prefix.chars();
        let valid_prefix = prefix.next().is_some_and(|c| c.is_ascii_alphabetic())
            && prefix.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_prefix {
            return Err(CliError::config_error(format!(
                "Invalid alias_prefix: '{}'. Must start with a letter and contain only letters, digits and '_'.",
                self.alias_prefix
            )));
        }

        if self.partition_key.is_empty() || self.partition_key.contains(['/', '=']) {
            return Err(CliError::config_error(format!(
                "Invalid partition_key: '{}'",
                self.partition_key
            )));
        }

        Ok(())
    }

    /// Configured timezone
    pub fn tz(&self) -> CliResult<Tz> {
        parse_timezone(&self.timezone).map_err(|e| CliError::config_error(e.to_string()))
    }

    /// Configured minimum log severity
    pub fn log_severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(CliError::config_error)
    }
}
