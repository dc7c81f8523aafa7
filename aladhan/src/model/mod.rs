//! Response models for the Aladhan API.
//!
//! Fields are optional wherever the upstream service has been observed to omit them; callers
//! validate what they need rather than failing deserialization on a partially filled payload.

pub mod date;
pub mod timings;

use serde::{Deserialize, Serialize};

pub use date::{CalendarDay, GregorianDetails, GregorianToHijri, HijriDetails, HijriMonth};
pub use timings::{Timings, TimingsData, TimingsMeta};

/// Envelope wrapping every Aladhan response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    #[serde(default)]
    pub status: Option<String>,
    pub data: Option<T>,
}
