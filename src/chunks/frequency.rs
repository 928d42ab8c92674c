//! Chunk frequencies

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};

use crate::dates::{end_of_month_offset, end_of_year};
use crate::errors::PartitionError;

/// How wide each chunk is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkFrequency {
    Day,
    Week,
    Month,
    Bimester,
    Trimester,
    Quadrimester,
    Semester,
    Year,
}

impl ChunkFrequency {
    /// All frequencies, narrowest first
    pub const ALL: [ChunkFrequency; 8] = [
        ChunkFrequency::Day,
        ChunkFrequency::Week,
        ChunkFrequency::Month,
        ChunkFrequency::Bimester,
        ChunkFrequency::Trimester,
        ChunkFrequency::Quadrimester,
        ChunkFrequency::Semester,
        ChunkFrequency::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkFrequency::Day => "day",
            ChunkFrequency::Week => "week",
            ChunkFrequency::Month => "month",
            ChunkFrequency::Bimester => "bimester",
            ChunkFrequency::Trimester => "trimester",
            ChunkFrequency::Quadrimester => "quadrimester",
            ChunkFrequency::Semester => "semester",
            ChunkFrequency::Year => "year",
        }
    }

    /// Comma-separated list of accepted names
    pub fn supported() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The un-clamped last day of the chunk starting at `start`.
    ///
    /// Multi-month frequencies end on the last day of the month that lies
    /// 2/3/4/6 months after the start month.
    pub fn tentative_end(&self, start: NaiveDate) -> NaiveDate {
        match self {
            ChunkFrequency::Day => start,
            ChunkFrequency::Week => start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX),
            ChunkFrequency::Month => end_of_month_offset(start, 0),
            ChunkFrequency::Bimester => end_of_month_offset(start, 2),
            ChunkFrequency::Trimester => end_of_month_offset(start, 3),
            ChunkFrequency::Quadrimester => end_of_month_offset(start, 4),
            ChunkFrequency::Semester => end_of_month_offset(start, 6),
            ChunkFrequency::Year => end_of_year(start),
        }
    }
}

impl FromStr for ChunkFrequency {
    type Err = PartitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == normalized)
            .ok_or_else(|| PartitionError::UnsupportedFrequency {
                value: s.to_string(),
                supported: Self::supported(),
            })
    }
}

impl fmt::Display for ChunkFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("MONTH".parse::<ChunkFrequency>().unwrap(), ChunkFrequency::Month);
        assert_eq!(" Semester ".parse::<ChunkFrequency>().unwrap(), ChunkFrequency::Semester);
        for freq in ChunkFrequency::ALL {
            assert_eq!(freq.as_str().parse::<ChunkFrequency>().unwrap(), freq);
        }
    }

    #[test]
    fn test_unsupported_frequency_names_valid_set() {
        let err = "fortnight".parse::<ChunkFrequency>().unwrap_err();
        assert_eq!(err.code(), "PART_UNSUPPORTED_FREQUENCY");
        let message = err.to_string();
        assert!(message.contains("fortnight"));
        assert!(message.contains("quadrimester"));
    }

    #[test]
    fn test_tentative_ends() {
        let start = d(2024, 1, 15);
        assert_eq!(ChunkFrequency::Day.tentative_end(start), start);
        assert_eq!(ChunkFrequency::Week.tentative_end(start), d(2024, 1, 21));
        assert_eq!(ChunkFrequency::Month.tentative_end(start), d(2024, 1, 31));
        assert_eq!(ChunkFrequency::Bimester.tentative_end(start), d(2024, 3, 31));
        assert_eq!(ChunkFrequency::Trimester.tentative_end(start), d(2024, 4, 30));
        assert_eq!(ChunkFrequency::Quadrimester.tentative_end(start), d(2024, 5, 31));
        assert_eq!(ChunkFrequency::Semester.tentative_end(start), d(2024, 7, 31));
        assert_eq!(ChunkFrequency::Year.tentative_end(start), d(2024, 12, 31));
    }
}
