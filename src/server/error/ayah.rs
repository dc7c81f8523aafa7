use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, ayah::VerseKey};

#[derive(Error, Debug)]
pub enum AyahError {
    /// The verse service answered without the English translation or surah details.
    #[error("Incomplete verse {}:{} from verse service: {reason}", .key.surah, .key.ayah)]
    Incomplete { key: VerseKey, reason: &'static str },
}

impl IntoResponse for AyahError {
    fn into_response(self) -> Response {
        tracing::warn!("{}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Verse of the day is currently unavailable".to_string(),
            }),
        )
            .into_response()
    }
}
