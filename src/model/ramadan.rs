use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Resolved Ramadan calendar for a user and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RamadanStatusDto {
    pub year: i32,
    pub start: NaiveDate,
    /// Date of day 30
    pub end: NaiveDate,
    /// Today in the user's timezone
    pub today: NaiveDate,
    /// Ramadan day number of `today`, absent outside the calendar
    pub day_number: Option<u32>,
}
