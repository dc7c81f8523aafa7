use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The five farz prayers in daily order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

/// A day's prayer times as 24 hour `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PrayerTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

impl PrayerTimings {
    pub fn get(&self, prayer: Prayer) -> &str {
        match prayer {
            Prayer::Fajr => &self.fajr,
            Prayer::Dhuhr => &self.dhuhr,
            Prayer::Asr => &self.asr,
            Prayer::Maghrib => &self.maghrib,
            Prayer::Isha => &self.isha,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NextPrayer {
    pub name: Prayer,
    /// 12 hour display time, e.g. `"5:21 AM"`
    pub formatted_time: String,
    pub seconds_until: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NextPrayerDto {
    pub name: String,
    pub formatted_time: String,
    pub seconds_until: i64,
    /// Countdown display, e.g. `"2h 15m"`
    pub countdown: String,
}

/// Prayer times for the dashboard.
///
/// `available` is false when the user has no stored location or the timings could not be
/// fetched; the other fields are then absent.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PrayerTimesDto {
    pub available: bool,
    pub timings: Option<PrayerTimings>,
    pub next_prayer: Option<NextPrayerDto>,
}

impl PrayerTimesDto {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            timings: None,
            next_prayer: None,
        }
    }
}
