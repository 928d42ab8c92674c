//! Partition Planner
//!
//! Entry point that ties date resolution, chunking and query rewriting
//! together.
//!
//! # Design Principles
//!
//! - Pure: same request, last partition date, clock and aliases → same plan
//! - Ordered: chunks come back in ascending date order
//! - Non-overlapping: chunk ranges tile the requested range exactly
//! - All-or-nothing: any error aborts planning, never a partial list

mod planner;
mod request;

pub use planner::PartitionPlanner;
pub use request::{ChunkSpec, PartitionRequest, PlanMode};
