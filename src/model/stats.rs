use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::prayer::Prayer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PrayerCompletionDto {
    pub prayer: Prayer,
    pub completed: u32,
    pub total: u32,
}

/// Aggregate statistics over a user's tracker calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatsDto {
    pub total_days: u32,
    pub total_quran_days: u32,
    pub total_charity_days: u32,
    pub total_fasting_days: u32,
    /// Completed farz slots over all farz slots, rounded to a whole percent
    pub salah_completion_percent: u32,
    /// Length of the most recent run of consecutive Quran days
    pub current_streak: u32,
    pub longest_streak: u32,
    pub taraweeh_nights: u32,
    pub taraweeh_total_rakat: u32,
    pub prayer_completion: Vec<PrayerCompletionDto>,
}
