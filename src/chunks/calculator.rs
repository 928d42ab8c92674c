//! Boundary computation

use chrono::NaiveDate;

use super::frequency::ChunkFrequency;
use crate::dates::DateFormat;
use crate::errors::PartitionResult;

/// Inclusive `(chunk_start, chunk_end)` pair
pub type ChunkBounds = (NaiveDate, NaiveDate);

/// Splits `[start, end]` into ordered, gap-free, non-overlapping chunks.
///
/// Each chunk ends at the frequency's calendar boundary, clamped to `end`.
/// The next chunk starts the day after the *un-clamped* boundary. An
/// inverted range yields no chunks.
pub fn compute_chunks(start: NaiveDate, end: NaiveDate, frequency: ChunkFrequency) -> Vec<ChunkBounds> {
    let mut chunks = Vec::new();
    let mut current = start;

    while current <= end {
        let boundary = frequency.tentative_end(current);
        chunks.push((current, boundary.min(end)));

        match boundary.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    chunks
}

/// String-level variant of [`compute_chunks`].
///
/// Parses both ends and the frequency, then renders each pair back in
/// `format`.
pub fn compute_chunk_strings(
    start: &str,
    end: &str,
    frequency: &str,
    format: &DateFormat,
) -> PartitionResult<Vec<(String, String)>> {
    let frequency: ChunkFrequency = frequency.parse()?;
    let start = format.parse(start)?;
    let end = format.parse(end)?;

    Ok(compute_chunks(start, end, frequency)
        .into_iter()
        .map(|(lo, hi)| (format.format(lo), format.format(hi)))
        .collect())
}
