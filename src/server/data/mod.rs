//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for the settings, tracker day and Hijri cache tables.
//! They take any [`ConnectionTrait`](sea_orm::ConnectionTrait) so callers may pass a
//! transaction.

pub mod hijri_cache;
pub mod tracker_day;
pub mod user_settings;

#[cfg(test)]
mod tests;
