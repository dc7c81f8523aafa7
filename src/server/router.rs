//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/users/{user_id}/tracker/{year}` - Tracker calendar, created or repaired on read
/// - `PATCH /api/users/{user_id}/tracker/{year}/days/{day_number}` - Log one tracker field
/// - `GET /api/users/{user_id}/stats/{year}` - Statistics for the year
/// - `GET /api/users/{user_id}/ramadan/{year}` - Ramadan start, end and today's day number
/// - `GET /api/users/{user_id}/settings` - Read settings
/// - `PATCH /api/users/{user_id}/settings` - Partially update settings
/// - `GET /api/users/{user_id}/prayer-times` - Today's prayer times and next prayer
/// - `GET /api/users/{user_id}/hijri/today` - Today's Hijri date
/// - `GET /api/users/{user_id}/ayah/today` - Verse of the day
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Ramadan Tracker", description = "Ramadan Tracker API"), tags(
        (name = controller::tracker::TRACKER_TAG, description = "Tracker calendar routes"),
        (name = controller::stats::STATS_TAG, description = "Tracker statistics routes"),
        (name = controller::ramadan::RAMADAN_TAG, description = "Ramadan calendar routes"),
        (name = controller::settings::SETTINGS_TAG, description = "User settings routes"),
        (name = controller::prayer::PRAYER_TAG, description = "Prayer time routes"),
        (name = controller::hijri::HIJRI_TAG, description = "Hijri date routes"),
        (name = controller::ayah::AYAH_TAG, description = "Verse of the day routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::tracker::get_tracker))
        .routes(routes!(controller::tracker::update_tracker_day))
        .routes(routes!(controller::stats::get_stats))
        .routes(routes!(controller::ramadan::get_ramadan_status))
        .routes(routes!(
            controller::settings::get_settings,
            controller::settings::update_settings
        ))
        .routes(routes!(controller::prayer::get_prayer_times))
        .routes(routes!(controller::hijri::get_hijri_today))
        .routes(routes!(controller::ayah::get_ayah_today))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
