//! Server application core modules.
//!
//! Contains the Ramadan calendar resolution subsystem (Hijri conversion, Ramadan start
//! resolution, tracker calendar reconciliation), prayer time resolution, settings management
//! and the HTTP surface exposing them.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
