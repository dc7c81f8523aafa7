mod hijri_cache;
mod tracker_day;
mod user_settings;

use chrono::NaiveDate;
use ramadan_test_utils::prelude::*;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
