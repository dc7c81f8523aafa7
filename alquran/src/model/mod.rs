//! Response models for the Al-Quran Cloud API.

pub mod ayah;

use serde::{Deserialize, Serialize};

pub use ayah::{AyahEdition, Edition, SurahInfo};

/// Envelope wrapping every Al-Quran Cloud response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    #[serde(default)]
    pub status: Option<String>,
    pub data: Option<T>,
}
