//! Next prayer and countdown derivation from a day's timings.

use chrono::{NaiveTime, Timelike};

use crate::model::prayer::{NextPrayer, Prayer, PrayerTimings};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parses an Aladhan time such as `"05:21"` or `"05:21 (PKT)"`.
pub fn parse_prayer_time(time: &str) -> Option<NaiveTime> {
    let hhmm = time.split_whitespace().next()?;
    NaiveTime::parse_from_str(hhmm, "%H:%M").ok()
}

/// Determine the next prayer after `now` (wall-clock time in the user's timezone).
///
/// Prayers are checked in daily order; the first whose minute of day is later than the
/// current minute wins. After Isha the next prayer is tomorrow's Fajr.
///
/// # Returns
/// - `Some(NextPrayer)` - with the seconds remaining until it starts
/// - `None` - Fajr could not be parsed, so not even the wrap-around is known
pub fn next_prayer(timings: &PrayerTimings, now: NaiveTime) -> Option<NextPrayer> {
    let now_minutes = (now.hour() * 60 + now.minute()) as i64;
    let now_seconds = now.second() as i64;

    let upcoming = Prayer::ALL.iter().find_map(|&prayer| {
        let time = parse_prayer_time(timings.get(prayer))?;
        let minutes = (time.hour() * 60 + time.minute()) as i64;

        (minutes > now_minutes).then_some((prayer, minutes))
    });

    let (prayer, minutes) = match upcoming {
        Some(next) => next,
        None => {
            let fajr = parse_prayer_time(timings.get(Prayer::Fajr))?;
            let minutes = (fajr.hour() * 60 + fajr.minute()) as i64;

            (Prayer::Fajr, minutes + MINUTES_PER_DAY)
        }
    };

    Some(NextPrayer {
        name: prayer,
        formatted_time: format_prayer_time(timings.get(prayer)),
        seconds_until: (minutes - now_minutes) * 60 - now_seconds,
    })
}

/// Formats a countdown in seconds, e.g. `"1h 2m"`, `"2m 5s"` or `"45s"`.
pub fn format_countdown(seconds: i64) -> String {
    if seconds <= 0 {
        return "0s".to_string();
    }

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if seconds >= 3600 {
        format!("{}h {}m", hours, minutes)
    } else if seconds >= 60 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Formats a 24 hour `"HH:MM"` time as `"h:mm AM/PM"`; midnight and noon render as 12.
///
/// Input that is not a time is returned unchanged.
pub fn format_prayer_time(time: &str) -> String {
    match parse_prayer_time(time) {
        Some(time) => {
            let (is_pm, hour) = time.hour12();
            let period = if is_pm { "PM" } else { "AM" };

            format!("{}:{:02} {}", hour, time.minute(), period)
        }
        None => time.to_string(),
    }
}
