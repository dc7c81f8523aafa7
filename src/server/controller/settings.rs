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
        settings::{UserSettingsDto, UserSettingsPatch},
    },
    server::{error::Error, model::app::AppState, service::settings::SettingsService},
};

pub static SETTINGS_TAG: &str = "settings";

/// Get the user's settings
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/settings",
    tag = SETTINGS_TAG,
    params(("user_id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User settings", body = UserSettingsDto),
        (status = 404, description = "User has no settings", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db);

    let settings = settings_service.get_settings(user_id).await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Update the user's settings
///
/// Only keys present in the body are changed; an explicit `null` clears a value. The
/// settings row is created on first update.
#[utoipa::path(
    patch,
    path = "/api/users/{user_id}/settings",
    tag = SETTINGS_TAG,
    params(("user_id" = Uuid, Path, description = "User ID")),
    request_body = UserSettingsPatch,
    responses(
        (status = 200, description = "Settings after the update", body = UserSettingsDto),
        (status = 400, description = "A supplied value is invalid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(patch): Json<UserSettingsPatch>,
) -> Result<impl IntoResponse, Error> {
    let settings_service = SettingsService::new(&state.db);

    let settings = settings_service.update_settings(user_id, patch).await?;

    Ok((StatusCode::OK, Json(settings)))
}
