use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        tracker::{TrackerDayDto, TrackerFieldUpdate},
    },
    server::{error::Error, model::app::AppState, service::tracker::TrackerService},
};

pub static TRACKER_TAG: &str = "tracker";

/// Get the user's 30 day tracker calendar for a year
///
/// Creates the calendar on first access and repairs dates when the resolved Ramadan start
/// has moved since the rows were written.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/tracker/{year}",
    tag = TRACKER_TAG,
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("year" = i32, Path, description = "Gregorian year"),
    ),
    responses(
        (status = 200, description = "Tracker calendar ordered by day number", body = Vec<TrackerDayDto>),
        (status = 400, description = "Year outside the supported range", body = ErrorDto),
        (status = 503, description = "Calendar did not load in time, safe to retry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tracker(
    State(state): State<AppState>,
    Path((user_id, year)): Path<(Uuid, i32)>,
) -> Result<impl IntoResponse, Error> {
    let tracker_service =
        TrackerService::new(&state.db, &state.aladhan_client, &state.ramadan_start_cache);

    let days = tracker_service
        .ensure_calendar_with_timeout(user_id, year, state.tracker_fetch_timeout)
        .await?;

    Ok((StatusCode::OK, Json(days)))
}

/// Log one field of a tracker day
///
/// Legacy boolean values are accepted for farz prayers (`true` is on time) and taraweeh
/// (`true` is 8 rakat).
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}/tracker/{year}/days/{day_number}",
    tag = TRACKER_TAG,
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("year" = i32, Path, description = "Gregorian year"),
        ("day_number" = i32, Path, description = "Ramadan day, 1 to 30"),
    ),
    request_body = TrackerFieldUpdate,
    responses(
        (status = 200, description = "Tracker day after the update", body = TrackerDayDto),
        (status = 400, description = "Invalid year, day number or rakat count", body = ErrorDto),
        (status = 404, description = "Tracker day not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tracker_day(
    State(state): State<AppState>,
    Path((user_id, year, day_number)): Path<(Uuid, i32, i32)>,
    Json(update): Json<TrackerFieldUpdate>,
) -> Result<impl IntoResponse, Error> {
    let tracker_service =
        TrackerService::new(&state.db, &state.aladhan_client, &state.ramadan_start_cache);

    let day = tracker_service
        .update_day(user_id, year, day_number, update.into())
        .await?;

    Ok((StatusCode::OK, Json(day)))
}
