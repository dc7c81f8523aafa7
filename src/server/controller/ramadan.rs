use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, ramadan::RamadanStatusDto},
    server::{error::Error, model::app::AppState, service::ramadan::RamadanService},
};

pub static RAMADAN_TAG: &str = "ramadan";

/// Get the user's Ramadan start and end dates and today's day number
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/ramadan/{year}",
    tag = RAMADAN_TAG,
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("year" = i32, Path, description = "Gregorian year"),
    ),
    responses(
        (status = 200, description = "Resolved Ramadan calendar", body = RamadanStatusDto),
        (status = 400, description = "Year outside the supported range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ramadan_status(
    State(state): State<AppState>,
    Path((user_id, year)): Path<(Uuid, i32)>,
) -> Result<impl IntoResponse, Error> {
    let ramadan_service =
        RamadanService::new(&state.db, &state.aladhan_client, &state.ramadan_start_cache);

    let status = ramadan_service.status(user_id, year, Utc::now()).await?;

    Ok((StatusCode::OK, Json(status)))
}
