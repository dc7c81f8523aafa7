//! Tests for the get_ramadan_status endpoint.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use ramadan_tracker::server::controller::ramadan::get_ramadan_status;

use super::*;

/// Tests the status of a user with an override for the year.
///
/// Expected: 200 OK with start and end 29 days apart
#[tokio::test]
async fn returns_start_and_end() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.settings()
        .insert_mock_settings_with_override(user_id, date(2026, 2, 18))
        .await?;

    let result = get_ramadan_status(State(test.to_app_state()), Path((user_id, 2026))).await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["year"], 2026);
    assert_eq!(body["start"], "2026-02-18");
    assert_eq!(body["end"], "2026-03-19");

    Ok(())
}

/// Tests a year outside the supported range.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn bad_request_for_unsupported_year() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let result =
        get_ramadan_status(State(test.to_app_state()), Path((Uuid::new_v4(), 1066))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
