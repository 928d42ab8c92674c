//! CLI command implementations
//!
//! Commands read one JSON request, plan it, and write one JSON response.
//! Planning failures are reported in the error envelope on stdout and also
//! returned so the process exits non-zero.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chunks::compute_chunk_strings;
use crate::dates::{Clock, DateFormat, SystemClock};
use crate::dialect::{AliasGenerator, RandomAliasGenerator};
use crate::observability::{Event, Logger};
use crate::partitions::last_partition_date;
use crate::planner::{ChunkSpec, PartitionPlanner, PartitionRequest};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Body of a `plan` request
#[derive(Debug, Clone, Deserialize)]
pub struct PlanInput {
    #[serde(flatten)]
    pub request: PartitionRequest,

    /// Most recent partition already in the warehouse
    #[serde(default)]
    pub last_partition_date: Option<String>,

    /// Storage listing to derive the last partition date from
    #[serde(default)]
    pub partition_paths: Option<Vec<String>>,
}

/// One boundary pair in `chunks` output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChunkRange {
    pub start_date: String,
    pub end_date: String,
}

/// Parse CLI args and dispatch
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Plan { config } => plan(config.as_deref()),
        Command::Chunks {
            start,
            end,
            frequency,
            date_format,
            config,
        } => chunks(config.as_deref(), &start, &end, &frequency, &date_format),
    }
}

/// `plan`: read a request from stdin, write the chunk list to stdout
pub fn plan(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    let logger = Logger::new(config.log_severity()?);
    logger.info(Event::ConfigLoaded, &[("timezone", config.timezone.as_str())]);

    let request = read_request()?;
    let aliases = RandomAliasGenerator::new(config.alias_prefix.as_str());

    match plan_request(request, &config, &SystemClock, &aliases, &logger) {
        Ok(chunks) => write_response(&chunks),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Plan a parsed request body.
///
/// Fills in the configured date format when the request has none and
/// derives the last partition date from `partition_paths` when no explicit
/// date was given.
pub fn plan_request<C: Clock, G: AliasGenerator>(
    mut body: Value,
    config: &Config,
    clock: &C,
    aliases: &G,
    logger: &Logger,
) -> CliResult<Vec<ChunkSpec>> {
    if let Some(obj) = body.as_object_mut() {
        if !obj.contains_key("date_format") {
            obj.insert(
                "date_format".to_string(),
                Value::String(config.default_date_format.clone()),
            );
        }
    }

    let input: PlanInput = serde_json::from_value(body)?;
    let request = &input.request;
    let mode = request.mode();
    logger.info(
        Event::PlanStart,
        &[
            ("mode", mode.as_str()),
            ("dialect", request.database_dialect.as_str()),
        ],
    );

    let last_partition = match (&input.last_partition_date, &input.partition_paths) {
        (Some(date), _) => Some(date.clone()),
        (None, Some(paths)) => latest_from_listing(paths, request, config, logger)?,
        (None, None) => None,
    };

    let planner = PartitionPlanner::new(clock, aliases, config.tz()?);
    let chunks = match planner.plan(request, last_partition.as_deref()) {
        Ok(chunks) => chunks,
        Err(e) => {
            logger.error(
                Event::PlanFailed,
                &[("code", e.code()), ("reason", e.to_string().as_str())],
            );
            return Err(e.into());
        }
    };

    for chunk in &chunks {
        logger.trace(
            Event::ChunkPlanned,
            &[
                ("start_date", chunk.start_date.as_deref().unwrap_or("")),
                ("end_date", chunk.end_date.as_deref().unwrap_or("")),
            ],
        );
    }
    logger.info(
        Event::PlanComplete,
        &[("mode", mode.as_str()), ("chunks", chunks.len().to_string().as_str())],
    );

    Ok(chunks)
}

fn latest_from_listing(
    paths: &[String],
    request: &PartitionRequest,
    config: &Config,
    logger: &Logger,
) -> CliResult<Option<String>> {
    let format = DateFormat::new(request.date_format.as_str())?;
    let latest = last_partition_date(paths.iter().map(String::as_str), &config.partition_key, &format);

    for value in &latest.skipped {
        logger.warn(
            Event::PartitionValueSkipped,
            &[("key", config.partition_key.as_str()), ("value", value.as_str())],
        );
    }

    let formatted = latest.formatted(&format);
    logger.info(
        Event::LastPartitionFound,
        &[
            ("paths", paths.len().to_string().as_str()),
            ("last_partition_date", formatted.as_deref().unwrap_or("none")),
        ],
    );
    Ok(formatted)
}

/// `chunks`: print the boundary pairs of a range
pub fn chunks(
    config_path: Option<&Path>,
    start: &str,
    end: &str,
    frequency: &str,
    date_format: &str,
) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    let logger = Logger::new(config.log_severity()?);

    match chunk_ranges(start, end, frequency, date_format) {
        Ok(ranges) => {
            logger.info(
                Event::ChunksComputed,
                &[("frequency", frequency), ("chunks", ranges.len().to_string().as_str())],
            );
            write_response(&ranges)
        }
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Boundary pairs of `[start, end]` as serializable ranges
pub fn chunk_ranges(start: &str, end: &str, frequency: &str, date_format: &str) -> CliResult<Vec<ChunkRange>> {
    let format = DateFormat::new(date_format)?;
    Ok(compute_chunk_strings(start, end, frequency, &format)?
        .into_iter()
        .map(|(start_date, end_date)| ChunkRange {
            start_date,
            end_date,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::FixedClock;
    use crate::dialect::SequentialAliasGenerator;
    use crate::observability::Severity;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn run_plan(body: Value, config: &Config) -> CliResult<Vec<ChunkSpec>> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
        let aliases = SequentialAliasGenerator::new(config.alias_prefix.as_str());
        let logger = Logger::new(Severity::Error);
        plan_request(body, config, &clock, &aliases, &logger)
    }

    #[test]
    fn test_plan_with_explicit_last_partition() {
        let chunks = run_plan(
            json!({
                "query": "SELECT * FROM vendas",
                "database_dialect": "sql_server",
                "partition_column": "data_venda",
                "last_partition_date": "2024-03-10"
            }),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start_date.as_deref(), Some("2024-03-10"));
    }

    #[test]
    fn test_plan_derives_last_partition_from_listing() {
        let chunks = run_plan(
            json!({
                "query": "SELECT * FROM vendas",
                "database_dialect": "oracle",
                "partition_column": "data_venda",
                "partition_paths": [
                    "vendas/ano_particao=2024/mes_particao=02/data_particao=2024-02-28/a.parquet",
                    "vendas/ano_particao=2024/mes_particao=03/data_particao=2024-03-02/b.parquet",
                    "vendas/ano_particao=2024/mes_particao=03/data_particao=garbage/c.parquet"
                ]
            }),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(chunks[0].start_date.as_deref(), Some("2024-03-02"));
        assert!(chunks[0].query.contains("TO_DATE('2024-03-02', 'YYYY-MM-DD')"));
    }

    #[test]
    fn test_explicit_last_partition_beats_listing() {
        let chunks = run_plan(
            json!({
                "query": "SELECT 1",
                "database_dialect": "mysql",
                "partition_column": "dt",
                "last_partition_date": "2024-01-01",
                "partition_paths": ["t/data_particao=2024-03-02/x"]
            }),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(chunks[0].start_date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_config_date_format_applies() {
        let config = Config {
            default_date_format: "%d/%m/%Y".to_string(),
            alias_prefix: "cte".to_string(),
            ..Config::default()
        };
        let chunks = run_plan(
            json!({
                "query": "SELECT 1",
                "database_dialect": "postgres",
                "partition_column": "dt",
                "lower_bound_date": "current_month"
            }),
            &config,
        )
        .unwrap();
        assert_eq!(chunks[0].start_date.as_deref(), Some("01/03/2024"));
        assert!(chunks[0].query.starts_with("WITH cte_1 AS"));
    }

    #[test]
    fn test_plan_failure_maps_to_cli_error() {
        let err = run_plan(
            json!({
                "query": "SELECT 1",
                "database_dialect": "postgres",
                "partition_column": "dt"
            }),
            &Config::default(),
        )
        .unwrap_err();
        assert_eq!(err.code_str(), "QC_CLI_PLANNING_FAILED");
        assert!(err.message().contains("PART_MISSING_LOWER_BOUND"));
    }

    #[test]
    fn test_malformed_body() {
        let err = run_plan(json!({"database_dialect": "postgres"}), &Config::default()).unwrap_err();
        assert_eq!(err.code_str(), "QC_CLI_INVALID_INPUT");
    }

    #[test]
    fn test_chunk_ranges() {
        let ranges = chunk_ranges("2024-11-10", "2025-02-15", "bimester", "%Y-%m-%d").unwrap();
        assert_eq!(
            ranges,
            vec![
                ChunkRange {
                    start_date: "2024-11-10".into(),
                    end_date: "2025-01-31".into()
                },
                ChunkRange {
                    start_date: "2025-02-01".into(),
                    end_date: "2025-02-15".into()
                },
            ]
        );
    }
}
