//! Error types for the Ramadan tracker server.
//!
//! Each domain has its own error enum with an `IntoResponse` mapping; [`Error`] aggregates
//! them together with library errors so handlers and services can use `?` throughout.

pub mod ayah;
pub mod config;
pub mod hijri;
pub mod settings;
pub mod tracker;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        ayah::AyahError, config::ConfigError, hijri::HijriError, settings::SettingsError,
        tracker::TrackerError,
    },
};

/// Main error type for the server.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Hijri conversion returned an unusable date.
    #[error(transparent)]
    HijriError(#[from] HijriError),
    /// Tracker calendar and day update errors.
    #[error(transparent)]
    TrackerError(#[from] TrackerError),
    /// Settings lookup and validation errors.
    #[error(transparent)]
    SettingsError(#[from] SettingsError),
    /// Verse of the day could not be assembled.
    #[error(transparent)]
    AyahError(#[from] AyahError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0}")]
    InternalError(String),
    /// Aladhan API error (transport, HTTP status, envelope code).
    #[error(transparent)]
    AladhanError(#[from] aladhan::Error),
    /// Al-Quran Cloud API error (transport, HTTP status, envelope code).
    #[error(transparent)]
    QuranError(#[from] alquran::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error while binding or serving.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Maps domain errors to their own responses, upstream failures to 502 and everything else
/// to a logged 500.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::HijriError(err) => err.into_response(),
            Self::TrackerError(err) => err.into_response(),
            Self::SettingsError(err) => err.into_response(),
            Self::AyahError(err) => err.into_response(),
            Self::AladhanError(err) => {
                tracing::warn!("Aladhan API request failed: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Calendar service is currently unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::QuranError(err) => {
                tracing::warn!("Al-Quran Cloud API request failed: {}", err);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Verse service is currently unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged; the client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
