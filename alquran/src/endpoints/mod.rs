//! Endpoint groups exposed by [`crate::Client`].

pub mod ayah;
