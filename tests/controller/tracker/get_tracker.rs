//! Tests for the get_tracker endpoint.

use std::time::Duration;

use super::*;

/// Tests loading a calendar for a user with a Ramadan override.
///
/// Expected: 200 OK with 30 days starting on the override
#[tokio::test]
async fn returns_calendar() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.settings()
        .insert_mock_settings_with_override(user_id, date(2026, 2, 18))
        .await?;

    let result = get_tracker(State(test.to_app_state()), Path((user_id, 2026))).await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    let days = body.as_array().unwrap();
    assert_eq!(days.len(), 30);
    assert_eq!(days[0]["date"], "2026-02-18");
    assert_eq!(days[29]["day_number"], 30);

    Ok(())
}

/// Tests a start date resolved through the calendar service.
///
/// Expected: 200 OK with the first day from the calendar
#[tokio::test]
async fn resolves_start_from_calendar_service() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_ramadan_calendar_endpoint(1446, mock_ramadan_calendar(date(2025, 3, 1), 30), 1)
        .build()
        .await?;

    let result = get_tracker(State(test.to_app_state()), Path((Uuid::new_v4(), 2025))).await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body[0]["date"], "2025-03-01");
    test.assert_mocks();

    Ok(())
}

/// Tests a year outside the supported range.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn bad_request_for_unsupported_year() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let result = get_tracker(State(test.to_app_state()), Path((Uuid::new_v4(), 3000))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests the fetch timeout elapsing.
///
/// Expected: 503 Service Unavailable
#[tokio::test]
async fn service_unavailable_on_timeout() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let mut state: AppState = test.to_app_state();
    state.tracker_fetch_timeout = Duration::ZERO;

    let result = get_tracker(State(state), Path((Uuid::new_v4(), 2026))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    Ok(())
}

/// Tests loading when the tables do not exist.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_tracker(State(test.to_app_state()), Path((Uuid::new_v4(), 2026))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
