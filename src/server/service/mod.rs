//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories with the Aladhan and Al-Quran Cloud clients: Hijri
//! conversion, Ramadan start resolution, tracker calendar maintenance, prayer times, the
//! verse of the day, settings and statistics.

pub mod ayah;
pub mod hijri;
pub mod prayer;
pub mod ramadan;
pub mod settings;
pub mod stats;
pub mod tracker;
