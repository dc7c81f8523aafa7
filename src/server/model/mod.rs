//! Server application state and database model aliases.

pub mod app;
pub mod db;
