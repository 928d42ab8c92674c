//! CLI-specific error types
//!
//! Every CLI error is fatal for the invocation and exits non-zero.

use std::fmt;
use std::io;

use crate::errors::PartitionError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Malformed request payload
    InvalidInput,
    /// Planning rejected the request
    PlanningFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "QC_CLI_CONFIG_ERROR",
            Self::IoError => "QC_CLI_IO_ERROR",
            Self::InvalidInput => "QC_CLI_INVALID_INPUT",
            Self::PlanningFailed => "QC_CLI_PLANNING_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Wraps a planning error, keeping its code in the message
    pub fn planning_failed(err: &PartitionError) -> Self {
        Self::new(
            CliErrorCode::PlanningFailed,
            format!("{}: {}", err.code(), err),
        )
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::invalid_input(format!("JSON error: {}", e))
    }
}

impl From<PartitionError> for CliError {
    fn from(e: PartitionError) -> Self {
        Self::planning_failed(&e)
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planning_error_keeps_code() {
        let err: CliError = PartitionError::missing_lower_bound("lower_bound_date").into();
        assert_eq!(err.code_str(), "QC_CLI_PLANNING_FAILED");
        assert!(err.message().contains("PART_MISSING_LOWER_BOUND"));
    }

    #[test]
    fn test_display() {
        let err = CliError::config_error("bad timezone");
        assert_eq!(err.to_string(), "QC_CLI_CONFIG_ERROR: bad timezone");
    }
}
