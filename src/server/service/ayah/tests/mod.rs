
use chrono::NaiveDate;
use ramadan_test_utils::prelude::*;
use uuid::Uuid;

use crate::server::service::ayah::{cache::AyahCache, AyahService};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
