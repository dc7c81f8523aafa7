//! Aggregate statistics over a tracker calendar.

use crate::model::{
    prayer::Prayer,
    stats::{PrayerCompletionDto, StatsDto},
    tracker::{is_farz_completed, TrackerDayDto},
};

/// Summarise `days`, which must be ordered by day number.
///
/// Streaks count consecutive Quran days. The current streak is the run ending on the last
/// day when that day was logged, otherwise the most recent earlier run.
pub fn compute_stats(days: &[TrackerDayDto]) -> StatsDto {
    let total_days = days.len() as u32;
    let count = |predicate: fn(&TrackerDayDto) -> bool| {
        days.iter().filter(|day| predicate(day)).count() as u32
    };

    let prayer_completion: Vec<PrayerCompletionDto> = Prayer::ALL
        .iter()
        .map(|&prayer| PrayerCompletionDto {
            prayer,
            completed: days
                .iter()
                .filter(|day| is_farz_completed(day.farz(prayer)))
                .count() as u32,
            total: total_days,
        })
        .collect();

    let completed_slots: u32 = prayer_completion.iter().map(|p| p.completed).sum();
    let total_slots = total_days * Prayer::ALL.len() as u32;
    let salah_completion_percent = if total_slots > 0 {
        (completed_slots as f64 / total_slots as f64 * 100.0).round() as u32
    } else {
        0
    };

    let (current_streak, longest_streak) = quran_streaks(days);

    let taraweeh: Vec<i32> = days.iter().filter_map(|day| day.taraweeh).collect();

    StatsDto {
        total_days,
        total_quran_days: count(|day| day.quran),
        total_charity_days: count(|day| day.charity),
        total_fasting_days: count(|day| day.fasting),
        salah_completion_percent,
        current_streak,
        longest_streak,
        taraweeh_nights: taraweeh.len() as u32,
        taraweeh_total_rakat: taraweeh.iter().map(|&rakat| rakat.max(0) as u32).sum(),
        prayer_completion,
    }
}

/// `(current, longest)` runs of consecutive Quran days.
fn quran_streaks(days: &[TrackerDayDto]) -> (u32, u32) {
    let mut current = None;
    let mut longest = 0;
    let mut run = 0;

    for day in days.iter().rev() {
        if day.quran {
            run += 1;
            longest = longest.max(run);
        } else {
            if run > 0 && current.is_none() {
                current = Some(run);
            }
            run = 0;
        }
    }

    if current.is_none() && run > 0 {
        current = Some(run);
    }

    (current.unwrap_or(0), longest)
}
