use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("No settings found for user {0}")]
    NotFound(Uuid),
    #[error("Latitude {0} must be between -90 and 90")]
    InvalidLatitude(f64),
    #[error("Longitude {0} must be between -180 and 180")]
    InvalidLongitude(f64),
    #[error("Calculation method {0} must be between 1 and 4")]
    InvalidCalculationMethod(i32),
    #[error("Unknown timezone {0:?}")]
    InvalidTimezone(String),
}

impl IntoResponse for SettingsError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
