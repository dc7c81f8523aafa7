use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, ayah::AyahDto},
    server::{error::Error, model::app::AppState, service::ayah::AyahService},
};

pub static AYAH_TAG: &str = "ayah";

/// Get the verse of the day for the user's local date
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/ayah/today",
    tag = AYAH_TAG,
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Verse of the day", body = AyahDto),
        (status = 502, description = "Verse service failed or returned an incomplete verse", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ayah_today(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let ayah_service = AyahService::new(
        &state.db,
        &state.aladhan_client,
        &state.quran_client,
        &state.ayah_cache,
    );

    let ayah = ayah_service.today(user_id, Utc::now()).await?;

    Ok((StatusCode::OK, Json(ayah)))
}
