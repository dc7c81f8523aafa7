use serde::{Deserialize, Serialize};

/// Payload of `GET /timings/{timestamp}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingsData {
    #[serde(default)]
    pub timings: Option<Timings>,
    #[serde(default)]
    pub meta: Option<TimingsMeta>,
}

/// Calculation details Aladhan reports alongside the timings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingsMeta {
    /// IANA zone of the requested coordinates, e.g. `"Asia/Karachi"`.
    #[serde(default)]
    pub timezone: Option<String>,
}

/// Named prayer times in 24 hour `HH:MM` form.
///
/// Aladhan may append a zone abbreviation (`"05:01 (PKT)"`) depending on request options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timings {
    #[serde(rename = "Fajr", default)]
    pub fajr: Option<String>,
    #[serde(rename = "Sunrise", default)]
    pub sunrise: Option<String>,
    #[serde(rename = "Dhuhr", default)]
    pub dhuhr: Option<String>,
    #[serde(rename = "Asr", default)]
    pub asr: Option<String>,
    #[serde(rename = "Sunset", default)]
    pub sunset: Option<String>,
    #[serde(rename = "Maghrib", default)]
    pub maghrib: Option<String>,
    #[serde(rename = "Isha", default)]
    pub isha: Option<String>,
    #[serde(rename = "Imsak", default)]
    pub imsak: Option<String>,
    #[serde(rename = "Midnight", default)]
    pub midnight: Option<String>,
}
