//! Utility functions for calendar arithmetic and prayer time display.

pub mod prayer;
pub mod time;
