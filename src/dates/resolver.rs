//! Date Resolver
//!
//! Turns a [`DateToken`] (plus, for lower bounds, the last materialized
//! partition date) into a concrete calendar date.
//!
//! Lower-bound rules:
//! 1. `current_year` / `current_month` / `current_day` → first day of the
//!    period containing today
//! 2. Explicit date with a last partition date → the earlier of the two, so
//!    unextracted history is never skipped
//! 3. Explicit date alone → that date
//! 4. No token → the last partition date, or `MissingLowerBound`
//!
//! Upper bounds expand `current_month` / `current_year` to the **last** day
//! of the period instead.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::calendar::{end_of_month_offset, end_of_year, first_day_of_month, first_day_of_year};
use super::clock::Clock;
use super::format::DateFormat;
use super::token::DateToken;
use crate::errors::{PartitionError, PartitionResult};

/// Timezone used to decide what "today" is
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";

/// Parses an IANA timezone name
pub fn parse_timezone(name: &str) -> PartitionResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| PartitionError::InvalidTimezone {
            value: name.to_string(),
        })
}

/// Resolves bound tokens against an injected clock
pub struct DateResolver<'a, C: Clock> {
    clock: &'a C,
    timezone: Tz,
}

impl<'a, C: Clock> DateResolver<'a, C> {
    /// Creates a resolver evaluating "today" in `timezone`
    pub fn new(clock: &'a C, timezone: Tz) -> Self {
        Self { clock, timezone }
    }

    /// Today's date in the resolver's timezone
    pub fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.timezone).date_naive()
    }

    /// Resolves a lower bound to a date.
    pub fn resolve_date(
        &self,
        token: Option<&DateToken>,
        format: &DateFormat,
        last_partition_date: Option<&str>,
    ) -> PartitionResult<NaiveDate> {
        let last_partition = || {
            last_partition_date
                .map(|value| format.parse(value))
                .transpose()
        };

        match token {
            Some(DateToken::CurrentYear) => Ok(first_day_of_year(self.today())),
            Some(DateToken::CurrentMonth) => Ok(first_day_of_month(self.today())),
            Some(DateToken::CurrentDay) => Ok(self.today()),
            Some(DateToken::Explicit(value)) => {
                let requested = format.parse(value)?;
                Ok(match last_partition()? {
                    Some(last) => requested.min(last),
                    None => requested,
                })
            }
            None => last_partition()?
                .ok_or_else(|| PartitionError::missing_lower_bound("lower_bound_date")),
        }
    }

    /// Resolves a lower bound and renders it in `format`.
    pub fn resolve(
        &self,
        token: Option<&DateToken>,
        format: &DateFormat,
        last_partition_date: Option<&str>,
    ) -> PartitionResult<String> {
        self.resolve_date(token, format, last_partition_date)
            .map(|date| format.format(date))
    }

    /// Resolves an upper bound to a date.
    ///
    /// An absent token means "up to today".
    pub fn resolve_end_date(
        &self,
        token: Option<&DateToken>,
        format: &DateFormat,
    ) -> PartitionResult<NaiveDate> {
        match token {
            Some(DateToken::CurrentYear) => Ok(end_of_year(self.today())),
            Some(DateToken::CurrentMonth) => Ok(end_of_month_offset(self.today(), 0)),
            Some(DateToken::CurrentDay) | None => Ok(self.today()),
            Some(DateToken::Explicit(value)) => format.parse(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::FixedClock;
    use chrono::{TimeZone, Utc};

    fn sao_paulo() -> Tz {
        parse_timezone(DEFAULT_TIMEZONE).unwrap()
    }

    fn clock_at(y: i32, m: u32, d: u32, h: u32) -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap())
    }

    fn resolve(token: Option<&str>, last: Option<&str>) -> PartitionResult<String> {
        let clock = clock_at(2024, 3, 15, 12);
        let resolver = DateResolver::new(&clock, sao_paulo());
        let token = token.map(DateToken::parse);
        resolver.resolve(token.as_ref(), &DateFormat::iso(), last)
    }

    #[test]
    fn test_symbolic_lower_bounds() {
        assert_eq!(resolve(Some("current_year"), None).unwrap(), "2024-01-01");
        assert_eq!(resolve(Some("current_month"), None).unwrap(), "2024-03-01");
        assert_eq!(resolve(Some("current_day"), None).unwrap(), "2024-03-15");
    }

    #[test]
    fn test_symbolic_ignores_last_partition() {
        assert_eq!(
            resolve(Some("current_month"), Some("2023-01-01")).unwrap(),
            "2024-03-01"
        );
    }

    #[test]
    fn test_explicit_earlier_than_last_partition_wins() {
        assert_eq!(
            resolve(Some("2024-01-01"), Some("2024-03-10")).unwrap(),
            "2024-01-01"
        );
    }

    #[test]
    fn test_explicit_later_than_last_partition_loses() {
        assert_eq!(
            resolve(Some("2024-05-01"), Some("2024-03-10")).unwrap(),
            "2024-03-10"
        );
    }

    #[test]
    fn test_explicit_alone() {
        assert_eq!(resolve(Some("2024-05-01"), None).unwrap(), "2024-05-01");
    }

    #[test]
    fn test_falls_back_to_last_partition() {
        assert_eq!(resolve(None, Some("2024-03-10")).unwrap(), "2024-03-10");
    }

    #[test]
    fn test_missing_lower_bound() {
        let err = resolve(None, None).unwrap_err();
        assert_eq!(err.code(), "PART_MISSING_LOWER_BOUND");
    }

    #[test]
    fn test_invalid_last_partition_date() {
        let err = resolve(None, Some("10/03/2024")).unwrap_err();
        assert_eq!(err, PartitionError::invalid_date("10/03/2024", "%Y-%m-%d"));
    }

    #[test]
    fn test_today_uses_timezone() {
        // 02:00 UTC on the 1st is still the previous day in Sao Paulo (UTC-3)
        let clock = clock_at(2024, 3, 1, 2);
        let resolver = DateResolver::new(&clock, sao_paulo());
        assert_eq!(resolver.today(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let utc = DateResolver::new(&clock, chrono_tz::UTC);
        assert_eq!(utc.today(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_end_bounds_expand_to_period_end() {
        let clock = clock_at(2024, 2, 10, 12);
        let resolver = DateResolver::new(&clock, sao_paulo());
        let format = DateFormat::iso();

        let month = resolver
            .resolve_end_date(Some(&DateToken::CurrentMonth), &format)
            .unwrap();
        assert_eq!(format.format(month), "2024-02-29");

        let year = resolver
            .resolve_end_date(Some(&DateToken::CurrentYear), &format)
            .unwrap();
        assert_eq!(format.format(year), "2024-12-31");

        let day = resolver
            .resolve_end_date(Some(&DateToken::CurrentDay), &format)
            .unwrap();
        assert_eq!(format.format(day), "2024-02-10");
        assert_eq!(resolver.resolve_end_date(None, &format).unwrap(), day);
    }

    #[test]
    fn test_unknown_timezone() {
        let err = parse_timezone("Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err.code(), "PART_INVALID_TIMEZONE");
    }
}
