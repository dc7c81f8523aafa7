use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by Aladhan for both request paths and response bodies.
pub static ALADHAN_DATE_FORMAT: &str = "%d-%m-%Y";

/// Payload of `GET /gToH`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GregorianToHijri {
    #[serde(default)]
    pub hijri: Option<HijriDetails>,
    #[serde(default)]
    pub gregorian: Option<GregorianDetails>,
}

/// One entry of `GET /hToGCalendar/{month}/{year}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    #[serde(default)]
    pub hijri: Option<HijriDetails>,
    #[serde(default)]
    pub gregorian: Option<GregorianDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HijriDetails {
    /// `DD-MM-YYYY` in the Hijri calendar.
    #[serde(default)]
    pub date: Option<String>,
    /// Zero-padded day of month, e.g. `"01"`.
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub month: Option<HijriMonth>,
    #[serde(default)]
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HijriMonth {
    #[serde(default)]
    pub number: Option<i64>,
    #[serde(default)]
    pub en: Option<String>,
    #[serde(default)]
    pub ar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GregorianDetails {
    /// `DD-MM-YYYY` in the Gregorian calendar.
    #[serde(default)]
    pub date: Option<String>,
}

impl GregorianDetails {
    /// Parses [`GregorianDetails::date`], returning `None` when absent or malformed.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(|date| NaiveDate::parse_from_str(date, ALADHAN_DATE_FORMAT).ok())
    }
}

/// Formats a date the way Aladhan expects it in requests.
pub fn format_aladhan_date(date: NaiveDate) -> String {
    date.format(ALADHAN_DATE_FORMAT).to_string()
}
