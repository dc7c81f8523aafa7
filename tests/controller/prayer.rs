//! Tests for the get_prayer_times endpoint.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use ramadan_tracker::server::controller::prayer::get_prayer_times;

use super::*;

/// Tests prayer times for a user with a stored location.
///
/// Expected: 200 OK, available with five timings and a next prayer
#[tokio::test]
async fn returns_prayer_times() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_settings(user_id)
        .with_timings_endpoint(mock_timings(), 1)
        .build()
        .await?;

    let result = get_prayer_times(State(test.to_app_state()), Path(user_id)).await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["available"], true);
    assert_eq!(body["timings"]["Fajr"], "05:21");
    assert!(body["next_prayer"]["countdown"].is_string());
    test.assert_mocks();

    Ok(())
}

/// Tests a user without a stored location.
///
/// Expected: 200 OK reporting prayer times unavailable
#[tokio::test]
async fn unavailable_without_location() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.settings()
        .insert_mock_settings_without_location(user_id)
        .await?;

    let result = get_prayer_times(State(test.to_app_state()), Path(user_id)).await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["available"], false);
    assert!(body["timings"].is_null());

    Ok(())
}
