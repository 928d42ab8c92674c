//! Planning inputs and outputs
//!
//! Defines the request a pipeline submits and the chunk records it gets back.

use serde::{Deserialize, Serialize};

use crate::dates::DateFormat;

fn default_date_format() -> String {
    DateFormat::ISO_DATE.to_string()
}

/// Which planning path a request takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanMode {
    /// No partition column: the query runs unmodified
    Passthrough,
    /// Single query from the resolved lower bound onwards
    Incremental,
    /// Full chunked backfill between two bounds
    Backfill,
}

impl PlanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanMode::Passthrough => "passthrough",
            PlanMode::Incremental => "incremental",
            PlanMode::Backfill => "backfill",
        }
    }
}

/// A request to partition one extraction query
///
/// Dialect and frequency are kept as raw strings and validated at planning
/// time so errors can name the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionRequest {
    /// Base SELECT, opaque to the planner
    pub query: String,
    /// `oracle`, `mysql`, `postgres` or `sql_server`
    pub database_dialect: String,
    /// Date column to filter on; absent or blank disables partitioning
    #[serde(default)]
    pub partition_column: Option<String>,
    /// strftime pattern for every date in and out
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Lower bound token for incremental loads
    #[serde(default)]
    pub lower_bound_date: Option<String>,
    /// Backfill start token
    #[serde(default)]
    pub chunk_start: Option<String>,
    /// Backfill end token
    #[serde(default)]
    pub chunk_end: Option<String>,
    /// Backfill chunk width; setting it selects backfill mode
    #[serde(default)]
    pub chunk_frequency: Option<String>,
}

impl PartitionRequest {
    /// Creates a passthrough request
    pub fn new(query: impl Into<String>, database_dialect: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            database_dialect: database_dialect.into(),
            partition_column: None,
            date_format: default_date_format(),
            lower_bound_date: None,
            chunk_start: None,
            chunk_end: None,
            chunk_frequency: None,
        }
    }

    /// Sets the partition column
    pub fn with_partition_column(mut self, column: impl Into<String>) -> Self {
        self.partition_column = Some(column.into());
        self
    }

    /// Sets the date format
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets the incremental lower bound token
    pub fn with_lower_bound(mut self, token: impl Into<String>) -> Self {
        self.lower_bound_date = Some(token.into());
        self
    }

    /// Switches to backfill mode
    pub fn with_chunking(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        self.chunk_start = Some(start.into());
        self.chunk_end = Some(end.into());
        self.chunk_frequency = Some(frequency.into());
        self
    }

    /// The partition column, treating a blank name as absent
    pub fn partition_column(&self) -> Option<&str> {
        self.partition_column
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// The planning path this request selects
    pub fn mode(&self) -> PlanMode {
        match (self.partition_column(), &self.chunk_frequency) {
            (None, _) => PlanMode::Passthrough,
            (Some(_), None) => PlanMode::Incremental,
            (Some(_), Some(_)) => PlanMode::Backfill,
        }
    }
}

/// One unit of extraction work
///
/// Dates are `None` only for passthrough plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkSpec {
    pub query: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ChunkSpec {
    /// Unbounded chunk carrying the original query
    pub fn passthrough(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            start_date: None,
            end_date: None,
        }
    }

    /// Date-bounded chunk
    pub fn bounded(query: impl Into<String>, start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            start_date: Some(start_date.into()),
            end_date: Some(end_date.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder_modes() {
        let request = PartitionRequest::new("SELECT 1", "oracle");
        assert_eq!(request.mode(), PlanMode::Passthrough);

        let request = request.with_partition_column("dt");
        assert_eq!(request.mode(), PlanMode::Incremental);

        let request = request.with_chunking("2024-01-01", "current_month", "month");
        assert_eq!(request.mode(), PlanMode::Backfill);
    }

    #[test]
    fn test_blank_partition_column_is_absent() {
        let request = PartitionRequest::new("SELECT 1", "mysql").with_partition_column("  ");
        assert_eq!(request.partition_column(), None);
        assert_eq!(request.mode(), PlanMode::Passthrough);
    }

    #[test]
    fn test_request_from_json_defaults() {
        let request: PartitionRequest = serde_json::from_value(json!({
            "query": "SELECT * FROM t",
            "database_dialect": "postgres",
            "partition_column": "dt"
        }))
        .unwrap();
        assert_eq!(request.date_format, "%Y-%m-%d");
        assert_eq!(request.lower_bound_date, None);
        assert_eq!(request.mode(), PlanMode::Incremental);
    }

    #[test]
    fn test_chunk_spec_serializes_nulls() {
        let value = serde_json::to_value(ChunkSpec::passthrough("SELECT 1")).unwrap();
        assert_eq!(
            value,
            json!({"query": "SELECT 1", "start_date": null, "end_date": null})
        );
    }
}
