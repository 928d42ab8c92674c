//! Calendar arithmetic shared by the resolver and the chunk calculator

use chrono::{Datelike, Months, NaiveDate};

/// First day of the date's month
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the date's year
pub fn first_day_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

/// Last day of the date's year
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(NaiveDate::MAX)
}

/// Last calendar day of the month that lies `months` after the date's month.
///
/// `months = 0` is the last day of the date's own month. Year rollovers and
/// leap years fall out of the month arithmetic. Saturates at
/// `NaiveDate::MAX`.
pub fn end_of_month_offset(date: NaiveDate, months: u32) -> NaiveDate {
    first_day_of_month(date)
        .checked_add_months(Months::new(months.saturating_add(1)))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}
