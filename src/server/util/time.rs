//! Calendar arithmetic for the Ramadan tracker.
//!
//! All arithmetic is on [`NaiveDate`] so no timezone can shift a day. The user's timezone is
//! only consulted to decide what "today" is.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::model::tracker::RAMADAN_DAYS;

/// Date of `day_number` (1-based) in a calendar starting on `start`.
///
/// Returns `None` for day numbers below 1 or dates beyond chrono's range.
pub fn expected_date(start: NaiveDate, day_number: i32) -> Option<NaiveDate> {
    let offset = u64::try_from(day_number.checked_sub(1)?).ok()?;
    start.checked_add_days(Days::new(offset))
}

/// The ordered `(day_number, date)` pairs of a 30 day calendar starting on `start`.
pub fn calendar_dates(start: NaiveDate) -> Vec<(i32, NaiveDate)> {
    (1..=RAMADAN_DAYS)
        .filter_map(|day_number| expected_date(start, day_number).map(|date| (day_number, date)))
        .collect()
}

/// Ramadan day number of `date` for a calendar starting on `start`.
///
/// # Returns
/// - `Some(1..=30)` - `date` falls inside the calendar
/// - `None` - `date` is before `start` or after day 30
pub fn ramadan_day_number(start: NaiveDate, date: NaiveDate) -> Option<u32> {
    let offset = date.signed_duration_since(start).num_days();

    if (0..RAMADAN_DAYS as i64).contains(&offset) {
        Some(offset as u32 + 1)
    } else {
        None
    }
}

/// Parses an IANA timezone name.
pub fn parse_timezone(timezone: &str) -> Option<Tz> {
    timezone.parse::<Tz>().ok()
}

/// Wall-clock time at `now` in `timezone`, falling back to UTC when unset or unknown.
pub fn local_now(timezone: Option<&str>, now: DateTime<Utc>) -> NaiveDateTime {
    match timezone.and_then(parse_timezone) {
        Some(tz) => now.with_timezone(&tz).naive_local(),
        None => now.naive_utc(),
    }
}
