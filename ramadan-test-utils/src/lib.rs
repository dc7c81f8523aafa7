//! Shared test setup for the Ramadan tracker workspace.
//!
//! Tests configure an environment with [`TestBuilder`] (tables, fixtures, mock Aladhan and
//! Al-Quran Cloud endpoints) and then work against the returned [`TestContext`].

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::aladhan::data::{
            mock_calendar_day, mock_gregorian_to_hijri, mock_ramadan_calendar, mock_timings,
            mock_timings_data,
        },
        fixtures::quran::data::{mock_arabic_only_editions, mock_ayah_editions},
        TestBuilder, TestContext, TestError,
    };
}
