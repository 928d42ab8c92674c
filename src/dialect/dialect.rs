//! Database dialects and their SQL rendering strategies
//!
//! | Dialect              | Literal                          | Predicate                      |
//! |----------------------|----------------------------------|--------------------------------|
//! | Oracle               | `TO_DATE('<v>', '<oracle fmt>')` | `<col> <op> <literal>`         |
//! | MySQL/Postgres/MSSQL | `'<v>'`                          | `CONVERT(DATE, <col>) <op> <literal>` |

use std::fmt;
use std::str::FromStr;

use crate::dates::DateFormat;
use crate::errors::PartitionError;

/// Escape a value for use inside a single-quoted SQL string literal
pub fn escape_string_literal(value: &str) -> String {
    if !value.contains('\'') {
        return value.to_string();
    }
    value.replace('\'', "''")
}

/// Oracle `TO_DATE` format for a strftime pattern.
///
/// Only `%Y-%m-%d` is translated. Other patterns pass through unchanged,
/// which Oracle will generally not accept.
pub fn oracle_date_format(format: &DateFormat) -> String {
    if format.is_iso() {
        "YYYY-MM-DD".to_string()
    } else {
        format.pattern().to_string()
    }
}

/// Comparison operators used in range predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `>=`
    Gte,
    /// `<=`
    Lte,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
        }
    }
}

/// Per-dialect SQL rendering
pub trait DialectStrategy: Send + Sync {
    /// Strategy name for diagnostics
    fn name(&self) -> &'static str;

    /// Render a date value (already formatted per `format`) as a SQL literal
    fn render_date_literal(&self, value: &str, format: &DateFormat) -> String;

    /// Render `<column> <op> <literal>`
    fn render_predicate(&self, column: &str, op: CompareOp, literal: &str) -> String;
}

/// Oracle: explicit `TO_DATE` conversion of the literal
#[derive(Debug, Clone, Copy, Default)]
pub struct OracleStrategy;

impl DialectStrategy for OracleStrategy {
    fn name(&self) -> &'static str {
        "oracle_to_date"
    }

    fn render_date_literal(&self, value: &str, format: &DateFormat) -> String {
        format!(
            "TO_DATE('{}', '{}')",
            escape_string_literal(value),
            escape_string_literal(&oracle_date_format(format))
        )
    }

    fn render_predicate(&self, column: &str, op: CompareOp, literal: &str) -> String {
        format!("{} {} {}", column, op.as_str(), literal)
    }
}

/// MySQL, Postgres and SQL Server: cast the column, compare to a string
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertDateStrategy;

impl DialectStrategy for ConvertDateStrategy {
    fn name(&self) -> &'static str {
        "convert_date"
    }

    fn render_date_literal(&self, value: &str, _format: &DateFormat) -> String {
        format!("'{}'", escape_string_literal(value))
    }

    fn render_predicate(&self, column: &str, op: CompareOp, literal: &str) -> String {
        format!("CONVERT(DATE, {}) {} {}", column, op.as_str(), literal)
    }
}

static ORACLE: &dyn DialectStrategy = &OracleStrategy;
static CONVERT_DATE: &dyn DialectStrategy = &ConvertDateStrategy;

/// Supported source database dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Oracle,
    MySql,
    Postgres,
    SqlServer,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::Oracle,
        Dialect::MySql,
        Dialect::Postgres,
        Dialect::SqlServer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Oracle => "oracle",
            Dialect::MySql => "mysql",
            Dialect::Postgres => "postgres",
            Dialect::SqlServer => "sql_server",
        }
    }

    /// Comma-separated list of accepted names
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(|d| d.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The rendering strategy for this dialect
    pub fn strategy(&self) -> &'static dyn DialectStrategy {
        match self {
            Dialect::Oracle => ORACLE,
            Dialect::MySql | Dialect::Postgres | Dialect::SqlServer => CONVERT_DATE,
        }
    }
}

impl FromStr for Dialect {
    type Err = PartitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| PartitionError::UnsupportedDialect {
                value: s.to_string(),
                supported: Self::supported(),
            })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dialects() {
        assert_eq!("oracle".parse::<Dialect>().unwrap(), Dialect::Oracle);
        assert_eq!("MySQL".parse::<Dialect>().unwrap(), Dialect::MySql);
        assert_eq!("postgres".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("SQL_SERVER".parse::<Dialect>().unwrap(), Dialect::SqlServer);
    }

    #[test]
    fn test_unsupported_dialect() {
        let err = "db2".parse::<Dialect>().unwrap_err();
        assert_eq!(err.code(), "PART_UNSUPPORTED_DIALECT");
        assert!(err.to_string().contains("db2"));
        assert!(err.to_string().contains("sql_server"));
    }

    #[test]
    fn test_oracle_literal() {
        let literal = Dialect::Oracle
            .strategy()
            .render_date_literal("2024-01-01", &DateFormat::iso());
        assert_eq!(literal, "TO_DATE('2024-01-01', 'YYYY-MM-DD')");
    }

    #[test]
    fn test_convert_predicate() {
        let strategy = Dialect::SqlServer.strategy();
        let literal = strategy.render_date_literal("2024-01-01", &DateFormat::iso());
        assert_eq!(
            strategy.render_predicate("dt", CompareOp::Gte, &literal),
            "CONVERT(DATE, dt) >= '2024-01-01'"
        );
    }

    #[test]
    fn test_shared_strategy() {
        assert_eq!(Dialect::MySql.strategy().name(), "convert_date");
        assert_eq!(Dialect::Postgres.strategy().name(), "convert_date");
        assert_eq!(Dialect::Oracle.strategy().name(), "oracle_to_date");
    }

    #[test]
    fn test_non_iso_oracle_format_passes_through() {
        let format = DateFormat::new("%d/%m/%Y").unwrap();
        assert_eq!(oracle_date_format(&format), "%d/%m/%Y");
    }

    #[test]
    fn test_escape_string_literal() {
        assert_eq!(escape_string_literal("plain"), "plain");
        assert_eq!(escape_string_literal("it's"), "it''s");
    }
}
