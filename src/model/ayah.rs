use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A verse reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct VerseKey {
    pub surah: u32,
    pub ayah: u32,
}

impl VerseKey {
    pub const fn new(surah: u32, ayah: u32) -> Self {
        Self { surah, ayah }
    }
}

/// Verse of the day with its Arabic text and English translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AyahDto {
    /// Local date the verse was picked for
    pub date: NaiveDate,
    pub arabic: String,
    pub english: String,
    pub surah_name: String,
    pub surah_number: u32,
    pub ayah_number: u32,
}
