//! Async client for the Al-Quran Cloud API.
//!
//! Only verse lookup across several editions is covered. Responses share the
//! `code`/`status`/`data` envelope used by Aladhan, unwrapped here into an [`Error`] on a
//! non-200 `code` or missing `data`.
//!
//! ```ignore
//! let client = alquran::Client::builder().build()?;
//!
//! let editions = client
//!     .ayah()
//!     .editions(94, 5, &["ar.quran-uthmani", "en.sahih"])
//!     .await?;
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::Error;
