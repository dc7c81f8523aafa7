use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum HijriError {
    /// The conversion service answered but the Hijri date was missing or invalid.
    #[error("Malformed Hijri date from conversion service: {0}")]
    Malformed(String),
}

impl IntoResponse for HijriError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Hijri date is currently unavailable".to_string(),
            }),
        )
            .into_response()
    }
}
