use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// Loading the tracker calendar did not finish in time. Safe to retry.
    #[error("Tracker calendar did not load within {0:?}")]
    Timeout(Duration),
    #[error("Year {0} is outside the supported range")]
    InvalidYear(i32),
    #[error("Day number {0} is outside 1..=30")]
    InvalidDayNumber(i32),
    #[error("No tracker day {0} exists for this user and year")]
    DayNotFound(i32),
    #[error("Invalid {field} rakat count {value}: must be even and at most {max}")]
    InvalidRakat {
        field: &'static str,
        value: i32,
        max: i32,
    },
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Timeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::DayNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidYear(_) | Self::InvalidDayNumber(_) | Self::InvalidRakat { .. } => {
                StatusCode::BAD_REQUEST
            }
        };

        if status == StatusCode::SERVICE_UNAVAILABLE {
            tracing::warn!("{}", self);
        }

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
