//! Data transfer objects and domain values shared across the API.

pub mod api;
pub mod ayah;
pub mod hijri;
pub mod prayer;
pub mod ramadan;
pub mod settings;
pub mod stats;
pub mod tracker;
