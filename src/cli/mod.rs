//! CLI module for querychunk
//!
//! Provides command-line interface for:
//! - plan: Plan chunked extraction queries for a JSON request on stdin
//! - chunks: Print chunk boundaries for a date range

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{chunk_ranges, chunks, plan, plan_request, run, run_command, ChunkRange, PlanInput};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{parse_request, read_request, write_error, write_response};
