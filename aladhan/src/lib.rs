//! Async client for the Aladhan API.
//!
//! Covers the three endpoints the tracker relies on: single-date Gregorian to Hijri
//! conversion, the Gregorian calendar for a Hijri month, and daily prayer timings. Every
//! response is wrapped in the Aladhan envelope (`code`, `status`, `data`); the client unwraps
//! it and reports a non-200 `code` or missing `data` as an [`Error`].
//!
//! ```ignore
//! let client = aladhan::Client::builder()
//!     .user_agent("ramadan-tracker/0.1")
//!     .build()?;
//!
//! let days = client.calendar().hijri_to_gregorian_calendar(9, 1446).await?;
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::Error;
