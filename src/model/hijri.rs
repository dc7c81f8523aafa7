use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hijri month number of Ramadan.
pub const RAMADAN_MONTH: u32 = 9;

/// English names of the Hijri months, index 0 is Muharram.
pub static HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Name of a Hijri month given its 1-based number.
pub fn hijri_month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| HIJRI_MONTH_NAMES.get(index as usize))
        .copied()
}

/// A Gregorian date expressed in the Hijri calendar.
///
/// This is also the JSON payload stored in the Hijri calendar cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HijriDate {
    pub day: u32,
    /// 1-12
    pub month: u32,
    pub year: i32,
    pub month_name: String,
    pub gregorian_date: NaiveDate,
}

impl HijriDate {
    pub fn is_ramadan(&self) -> bool {
        self.month == RAMADAN_MONTH
    }

    /// Display form, e.g. `"1 Ramadan 1446 AH"`.
    pub fn formatted(&self) -> String {
        format!("{} {} {} AH", self.day, self.month_name, self.year)
    }
}

/// Response for today's Hijri date.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HijriTodayDto {
    pub date: HijriDate,
    pub formatted: String,
    pub is_ramadan: bool,
}

impl From<HijriDate> for HijriTodayDto {
    fn from(date: HijriDate) -> Self {
        Self {
            formatted: date.formatted(),
            is_ramadan: date.is_ramadan(),
            date,
        }
    }
}
