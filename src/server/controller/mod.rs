//! HTTP controller endpoints for the Ramadan tracker API.
//!
//! Axum handlers that extract path and body inputs, call into the service layer and return
//! JSON responses. Every handler is annotated for utoipa so the router can assemble the
//! OpenAPI document. Users are identified by the `user_id` path segment; authentication
//! happens in front of this service.

pub mod ayah;
pub mod hijri;
pub mod prayer;
pub mod ramadan;
pub mod settings;
pub mod stats;
pub mod tracker;
