//! Tests for the get_stats endpoint.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use ramadan_tracker::{
    model::tracker::TrackerUpdate,
    server::{controller::stats::get_stats, data::tracker_day::TrackerDayRepository},
};

use super::*;

/// Tests statistics over a calendar with some Quran days logged.
///
/// Expected: 200 OK with counts and streaks over 30 days
#[tokio::test]
async fn returns_stats() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.settings()
        .insert_mock_settings_with_override(user_id, date(2026, 2, 18))
        .await?;
    let days = test
        .tracker()
        .insert_mock_calendar(user_id, 2026, date(2026, 2, 18))
        .await?;
    let repo = TrackerDayRepository::new(&test.db);
    for day in &days[0..3] {
        repo.update_field(day.id, TrackerUpdate::Quran(true)).await?;
    }

    let result = get_stats(State(test.to_app_state()), Path((user_id, 2026))).await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["total_days"], 30);
    assert_eq!(body["total_quran_days"], 3);
    assert_eq!(body["longest_streak"], 3);
    assert_eq!(body["current_streak"], 3);
    assert_eq!(body["salah_completion_percent"], 0);

    Ok(())
}
