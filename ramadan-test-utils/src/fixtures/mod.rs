//! Fixtures for database records and mock HTTP endpoints.
//!
//! - `aladhan` - Aladhan API payloads and mockito endpoints
//! - `quran` - Al-Quran Cloud verse payloads and mockito endpoints
//! - `settings` - user settings rows
//! - `tracker` - tracker day rows

pub mod aladhan;
pub mod quran;
pub mod settings;
pub mod tracker;
