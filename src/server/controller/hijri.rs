use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, hijri::HijriTodayDto},
    server::{error::Error, model::app::AppState, service::hijri::HijriService},
};

pub static HIJRI_TAG: &str = "hijri";

/// Get today's Hijri date in the user's timezone
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/hijri/today",
    tag = HIJRI_TAG,
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Today's Hijri date", body = HijriTodayDto),
        (status = 502, description = "Conversion service failed or returned a malformed date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hijri_today(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let hijri_service = HijriService::new(&state.db, &state.aladhan_client);

    let hijri = hijri_service.resolve_today(user_id, Utc::now()).await?;

    Ok((StatusCode::OK, Json(HijriTodayDto::from(hijri))))
}
