//! Aladhan payload factories.

use aladhan::model::{
    date::format_aladhan_date, CalendarDay, GregorianDetails, GregorianToHijri, HijriDetails,
    HijriMonth, Timings, TimingsData, TimingsMeta,
};
use chrono::{Days, NaiveDate};

/// Aladhan's English transliteration for each Hijri month, 1-indexed by position.
static ALADHAN_MONTH_NAMES: [&str; 12] = [
    "Muḥarram",
    "Ṣafar",
    "Rabīʿ al-awwal",
    "Rabīʿ al-thānī",
    "Jumādá al-ūlá",
    "Jumādá al-ākhirah",
    "Rajab",
    "Shaʿbān",
    "Ramaḍān",
    "Shawwāl",
    "Dhū al-Qaʿdah",
    "Dhū al-Ḥijjah",
];

/// `gToH` payload for the given Hijri day, month and year.
pub fn mock_gregorian_to_hijri(day: u32, month: u32, year: i32) -> GregorianToHijri {
    GregorianToHijri {
        hijri: Some(HijriDetails {
            date: Some(format!("{:02}-{:02}-{}", day, month, year)),
            day: Some(format!("{:02}", day)),
            month: Some(HijriMonth {
                number: Some(month as i64),
                en: ALADHAN_MONTH_NAMES
                    .get((month as usize).wrapping_sub(1))
                    .map(|name| name.to_string()),
                ar: None,
            }),
            year: Some(year.to_string()),
        }),
        gregorian: None,
    }
}

/// Calendar entry pointing at a single Gregorian date.
pub fn mock_calendar_day(date: NaiveDate) -> CalendarDay {
    CalendarDay {
        hijri: None,
        gregorian: Some(GregorianDetails {
            date: Some(format_aladhan_date(date)),
        }),
    }
}

/// `hToGCalendar` payload of `length` consecutive days starting at `start`.
pub fn mock_ramadan_calendar(start: NaiveDate, length: u64) -> Vec<CalendarDay> {
    (0..length)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(mock_calendar_day)
        .collect()
}

/// Timings payload for Karachi on a March day.
pub fn mock_timings() -> Timings {
    Timings {
        fajr: Some("05:21".to_string()),
        sunrise: Some("06:37".to_string()),
        dhuhr: Some("12:38".to_string()),
        asr: Some("16:01".to_string()),
        sunset: Some("18:22".to_string()),
        maghrib: Some("18:26".to_string()),
        isha: Some("19:42".to_string()),
        imsak: Some("05:11".to_string()),
        midnight: Some("00:30".to_string()),
    }
}

/// [`mock_timings`] with the zone Aladhan reports for the requested coordinates.
pub fn mock_timings_data(timezone: &str) -> TimingsData {
    TimingsData {
        timings: Some(mock_timings()),
        meta: Some(TimingsMeta {
            timezone: Some(timezone.to_string()),
        }),
    }
}
