//! Endpoint groups exposed by [`crate::Client`].

pub mod calendar;
pub mod hijri;
pub mod timings;
