use chrono::{Datelike, NaiveDate};

/// A manual start date only applies to the calendar year it falls in.
pub fn applicable_override(override_start: Option<NaiveDate>, year: i32) -> Option<NaiveDate> {
    override_start.filter(|start| start.year() == year)
}
