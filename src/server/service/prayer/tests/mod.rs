
use chrono::{DateTime, TimeZone, Utc};
use ramadan_test_utils::prelude::*;
use uuid::Uuid;

use crate::server::service::prayer::PrayerService;

/// 20:00 in Karachi (UTC+5).
fn karachi_evening() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 15, 0, 0).unwrap()
}
