//! Chunk Boundary Calculator
//!
//! Splits an inclusive date range into ordered, non-overlapping chunks.
//!
//! Chunk boundaries are anchored to the calendar, not to the requested end
//! date: extending the end of a range never moves an earlier boundary, so
//! repeated runs re-plan identical chunks.

mod calculator;
mod frequency;

pub use calculator::{compute_chunk_strings, compute_chunks, ChunkBounds};
pub use frequency::ChunkFrequency;
