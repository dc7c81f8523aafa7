use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, stats::StatsDto},
    server::{
        error::Error,
        model::app::AppState,
        service::{stats::compute_stats, tracker::TrackerService},
    },
};

pub static STATS_TAG: &str = "stats";

/// Get statistics over the user's tracker calendar for a year
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/stats/{year}",
    tag = STATS_TAG,
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("year" = i32, Path, description = "Gregorian year"),
    ),
    responses(
        (status = 200, description = "Statistics for the year", body = StatsDto),
        (status = 400, description = "Year outside the supported range", body = ErrorDto),
        (status = 503, description = "Calendar did not load in time, safe to retry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    Path((user_id, year)): Path<(Uuid, i32)>,
) -> Result<impl IntoResponse, Error> {
    let tracker_service =
        TrackerService::new(&state.db, &state.aladhan_client, &state.ramadan_start_cache);

    let days = tracker_service
        .ensure_calendar_with_timeout(user_id, year, state.tracker_fetch_timeout)
        .await?;

    Ok((StatusCode::OK, Json(compute_stats(&days))))
}
