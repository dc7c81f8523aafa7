//! Static Ramadan start dates used when the calendar service cannot be reached.

use chrono::NaiveDate;
use tracing::warn;

/// Observed first days of Ramadan as `(year, month, day)`.
static KNOWN_STARTS: [(i32, u32, u32); 6] = [
    (2023, 3, 23),
    (2024, 3, 11),
    (2025, 3, 1),
    (2026, 2, 18),
    (2027, 2, 8),
    (2028, 1, 28),
];

/// Known start date for `year`, if the table has one.
pub fn known_start(year: i32) -> Option<NaiveDate> {
    KNOWN_STARTS
        .iter()
        .find(|(known_year, _, _)| *known_year == year)
        .and_then(|&(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
}

/// Start date from the table, or `{year}-03-01` when the year is not listed.
///
/// The placeholder can be weeks away from the real date for years outside the table.
pub fn fallback_start(year: i32) -> NaiveDate {
    if let Some(start) = known_start(year) {
        return start;
    }

    warn!(year, "No known Ramadan start for year, using March 1st placeholder");

    NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or_default()
}
