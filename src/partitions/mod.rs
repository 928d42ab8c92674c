//! Partition listing interpretation
//!
//! Warehouse storage is laid out Hive-style:
//!
//! ```text
//! ano_particao=2024/mes_particao=03/data_particao=2024-03-01/part-0.parquet
//! ```
//!
//! Listing the storage is somebody else's job. This module only derives the
//! single fact the planner needs from such a listing: the most recent
//! partition date already materialized.

mod listing;

pub use listing::{last_partition_date, LatestPartition, PartitionPath, DEFAULT_PARTITION_KEY};
