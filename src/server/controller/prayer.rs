use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, prayer::PrayerTimesDto},
    server::{error::Error, model::app::AppState, service::prayer::PrayerService},
};

pub static PRAYER_TAG: &str = "prayer";

/// Get today's prayer times and the countdown to the next prayer
///
/// Reports `available: false` instead of an error when the user has no stored location or
/// the prayer time service is unreachable.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/prayer-times",
    tag = PRAYER_TAG,
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "Prayer times, possibly unavailable", body = PrayerTimesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_prayer_times(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let prayer_service = PrayerService::new(&state.db, &state.aladhan_client);

    let prayer_times = prayer_service.dashboard(user_id, Utc::now()).await?;

    Ok((StatusCode::OK, Json(prayer_times)))
}
