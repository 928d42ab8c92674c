//! CLI argument definitions using clap
//!
//! Commands:
//! - querychunk plan [--config <path>]
//! - querychunk chunks --start <date> --end <date> --frequency <freq>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// querychunk - incremental, dialect-aware SQL query partitioner
#[derive(Parser, Debug)]
#[command(name = "querychunk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan chunked queries for a request read from stdin
    Plan {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print chunk boundaries for a date range
    Chunks {
        /// First date of the range
        #[arg(long)]
        start: String,

        /// Last date of the range (inclusive)
        #[arg(long)]
        end: String,

        /// day, week, month, bimester, trimester, quadrimester, semester or year
        #[arg(long)]
        frequency: String,

        /// strftime pattern of the dates
        #[arg(long, default_value = "%Y-%m-%d")]
        date_format: String,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan() {
        let cli = Cli::try_parse_from(["querychunk", "plan", "--config", "qc.json"]).unwrap();
        match cli.command {
            Command::Plan { config } => assert_eq!(config, Some(PathBuf::from("qc.json"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_chunks_default_format() {
        let cli = Cli::try_parse_from([
            "querychunk",
            "chunks",
            "--start",
            "2024-01-01",
            "--end",
            "2024-03-31",
            "--frequency",
            "month",
        ])
        .unwrap();
        match cli.command {
            Command::Chunks {
                date_format,
                config,
                ..
            } => {
                assert_eq!(date_format, "%Y-%m-%d");
                assert_eq!(config, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
