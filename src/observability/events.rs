//! Observable events
//!
//! Events are explicit and typed; the log line carries the SCREAMING_CASE
//! name.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Planning request accepted
    PlanStart,
    /// One chunk planned
    ChunkPlanned,
    /// Planning finished
    PlanComplete,
    /// Planning aborted
    PlanFailed,
    /// Last partition date derived from a listing
    LastPartitionFound,
    /// Partition value in a listing did not parse
    PartitionValueSkipped,
    /// Boundary pairs computed
    ChunksComputed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::PlanStart => "PLAN_START",
            Event::ChunkPlanned => "CHUNK_PLANNED",
            Event::PlanComplete => "PLAN_COMPLETE",
            Event::PlanFailed => "PLAN_FAILED",
            Event::LastPartitionFound => "LAST_PARTITION_FOUND",
            Event::PartitionValueSkipped => "PARTITION_VALUE_SKIPPED",
            Event::ChunksComputed => "CHUNKS_COMPUTED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::PlanStart.as_str(), "PLAN_START");
        assert_eq!(Event::PartitionValueSkipped.to_string(), "PARTITION_VALUE_SKIPPED");
    }
}
