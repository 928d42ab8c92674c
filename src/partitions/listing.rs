//! Hive-style partition path parsing

use chrono::NaiveDate;

use crate::dates::DateFormat;

/// Partition key holding the full partition date
pub const DEFAULT_PARTITION_KEY: &str = "data_particao";

/// The `key=value` segments of one storage path, in path order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPath {
    segments: Vec<(String, String)>,
}

impl PartitionPath {
    /// Extracts `key=value` segments; other segments (prefixes, file
    /// names) are ignored.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter_map(|segment| {
                let (key, value) = segment.split_once('=')?;
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), value.to_string()))
            })
            .collect();
        Self { segments }
    }

    /// Value of the first segment named `key`
    pub fn value(&self, key: &str) -> Option<&str> {
        self.segments
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn segments(&self) -> &[(String, String)] {
        &self.segments
    }
}

/// Outcome of scanning a listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatestPartition {
    /// Most recent partition date found
    pub date: Option<NaiveDate>,
    /// Values of the partition key that did not parse under the format
    pub skipped: Vec<String>,
}

impl LatestPartition {
    /// The latest date rendered in `format`
    pub fn formatted(&self, format: &DateFormat) -> Option<String> {
        self.date.map(|date| format.format(date))
    }
}

/// Scans a listing for the most recent value of `partition_key`.
///
/// Paths without the key are ignored. Values that do not parse under
/// `format` are collected in [`LatestPartition::skipped`] so the caller can
/// report them.
pub fn last_partition_date<'a, I>(paths: I, partition_key: &str, format: &DateFormat) -> LatestPartition
where
    I: IntoIterator<Item = &'a str>,
{
    let mut latest = LatestPartition::default();

    for path in paths {
        let parsed = PartitionPath::parse(path);
        let Some(value) = parsed.value(partition_key) else {
            continue;
        };

        match format.parse(value) {
            Ok(date) => {
                latest.date = Some(latest.date.map_or(date, |current| current.max(date)));
            }
            Err(_) => {
                if !latest.skipped.iter().any(|s| s == value) {
                    latest.skipped.push(value.to_string());
                }
            }
        }
    }

    latest
}
