//! Validated strftime-style date formats

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

use crate::errors::{PartitionError, PartitionResult};

/// A strftime pattern known to render a calendar date.
///
/// Construction rejects unknown specifiers and patterns that need more than
/// a date to render (offsets, for example), so [`DateFormat::format`] never
/// fails afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    /// ISO calendar date, the default everywhere
    pub const ISO_DATE: &'static str = "%Y-%m-%d";

    /// Validates and wraps a pattern
    pub fn new(pattern: impl Into<String>) -> PartitionResult<Self> {
        let pattern = pattern.into();
        let invalid = || PartitionError::InvalidFormatPattern {
            format: pattern.clone(),
        };

        if pattern.is_empty()
            || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error))
        {
            return Err(invalid());
        }

        // Patterns with time or offset items cannot render a bare date
        let mut probe = String::new();
        write!(probe, "{}", NaiveDate::MIN.format(&pattern)).map_err(|_| invalid())?;

        Ok(Self { pattern })
    }

    /// The `%Y-%m-%d` format
    pub fn iso() -> Self {
        Self {
            pattern: Self::ISO_DATE.to_string(),
        }
    }

    /// Returns the raw pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns true for `%Y-%m-%d`
    pub fn is_iso(&self) -> bool {
        self.pattern == Self::ISO_DATE
    }

    /// Parses a date string under this format
    pub fn parse(&self, value: &str) -> PartitionResult<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), &self.pattern)
            .map_err(|_| PartitionError::invalid_date(value, &self.pattern))
    }

    /// Renders a date under this format
    pub fn format(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        // Pattern validated at construction
        let _ = write!(out, "{}", date.format(&self.pattern));
        out
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::iso()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
