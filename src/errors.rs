//! Error taxonomy for querychunk
//!
//! Every error is a local validation or logic error. Nothing here is
//! transient: planning performs no I/O, so a failure always aborts the
//! whole planning call.
//!
//! Error codes:
//! - PART_MISSING_LOWER_BOUND
//! - PART_UNSUPPORTED_FREQUENCY
//! - PART_UNSUPPORTED_DIALECT
//! - PART_INVALID_DATE_FORMAT
//! - PART_INVALID_TIMEZONE

use thiserror::Error;

/// Result type for partitioning operations
pub type PartitionResult<T> = Result<T, PartitionError>;

/// Partitioning errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// Neither a date token nor a last partition date was available
    #[error("No lower bound could be resolved for '{field}': no date token and no last partition date")]
    MissingLowerBound { field: String },

    /// Chunk frequency outside the supported set
    #[error("Unsupported chunk frequency '{value}'. Supported: {supported}")]
    UnsupportedFrequency { value: String, supported: String },

    /// Database dialect outside the supported set
    #[error("Unsupported database dialect '{value}'. Supported: {supported}")]
    UnsupportedDialect { value: String, supported: String },

    /// A date string could not be parsed with the supplied format
    #[error("Date '{value}' does not match format '{format}'")]
    InvalidDate { value: String, format: String },

    /// The format pattern itself is not a valid strftime pattern
    #[error("Invalid date format pattern '{format}'")]
    InvalidFormatPattern { format: String },

    /// Unknown IANA timezone name
    #[error("Invalid timezone '{value}'")]
    InvalidTimezone { value: String },
}

impl PartitionError {
    /// Missing lower bound for the named request field
    pub fn missing_lower_bound(field: impl Into<String>) -> Self {
        Self::MissingLowerBound {
            field: field.into(),
        }
    }

    /// Invalid date value under a format
    pub fn invalid_date(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self::InvalidDate {
            value: value.into(),
            format: format.into(),
        }
    }

    /// Returns the stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingLowerBound { .. } => "PART_MISSING_LOWER_BOUND",
            Self::UnsupportedFrequency { .. } => "PART_UNSUPPORTED_FREQUENCY",
            Self::UnsupportedDialect { .. } => "PART_UNSUPPORTED_DIALECT",
            Self::InvalidDate { .. } | Self::InvalidFormatPattern { .. } => {
                "PART_INVALID_DATE_FORMAT"
            }
            Self::InvalidTimezone { .. } => "PART_INVALID_TIMEZONE",
        }
    }
}
