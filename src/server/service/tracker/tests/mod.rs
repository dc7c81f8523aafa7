
use chrono::NaiveDate;
use ramadan_test_utils::prelude::*;
use uuid::Uuid;

use crate::server::{
    error::{tracker::TrackerError, Error},
    service::{ramadan::cache::RamadanStartCache, tracker::TrackerService},
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
