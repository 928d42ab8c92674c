//! querychunk - incremental, dialect-aware SQL query partitioner
//!
//! Turns a base SELECT, a partition date column and chunking preferences
//! into an ordered list of date-filtered sub-queries that cover only data
//! not yet extracted to the warehouse.

pub mod chunks;
pub mod cli;
pub mod dates;
pub mod dialect;
pub mod errors;
pub mod observability;
pub mod partitions;
pub mod planner;

pub use errors::{PartitionError, PartitionResult};
