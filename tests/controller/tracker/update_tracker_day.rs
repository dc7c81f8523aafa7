//! Tests for the update_tracker_day endpoint.

use ramadan_tracker::model::tracker::TrackerFieldUpdate;

use super::*;

fn update(body: &str) -> Json<TrackerFieldUpdate> {
    Json(serde_json::from_str(body).unwrap())
}

/// Tests logging a legacy boolean farz value.
///
/// Expected: 200 OK with the prayer stored as on time
#[tokio::test]
async fn normalizes_legacy_farz_value() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.tracker()
        .insert_mock_calendar(user_id, 2026, date(2026, 2, 18))
        .await?;

    let result = update_tracker_day(
        State(test.to_app_state()),
        Path((user_id, 2026, 4)),
        update(r#"{"field":"fajr","value":true}"#),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["day_number"], 4);
    assert_eq!(body["fajr"], "on_time");

    Ok(())
}

/// Tests logging a legacy boolean taraweeh value.
///
/// Expected: 200 OK with 8 rakat
#[tokio::test]
async fn normalizes_legacy_taraweeh_value() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.tracker()
        .insert_mock_calendar(user_id, 2026, date(2026, 2, 18))
        .await?;

    let result = update_tracker_day(
        State(test.to_app_state()),
        Path((user_id, 2026, 1)),
        update(r#"{"field":"taraweeh","value":true}"#),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let body = json_body(result.unwrap().into_response()).await;
    assert_eq!(body["taraweeh"], 8);

    Ok(())
}

/// Tests an odd rakat count.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn bad_request_for_odd_rakat() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.tracker()
        .insert_mock_calendar(user_id, 2026, date(2026, 2, 18))
        .await?;

    let result = update_tracker_day(
        State(test.to_app_state()),
        Path((user_id, 2026, 1)),
        update(r#"{"field":"tahajud","value":3}"#),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests a negative rakat count.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn bad_request_for_negative_rakat() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    test.tracker()
        .insert_mock_calendar(user_id, 2026, date(2026, 2, 18))
        .await?;

    let result = update_tracker_day(
        State(test.to_app_state()),
        Path((user_id, 2026, 1)),
        update(r#"{"field":"taraweeh","value":-4}"#),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests updating a day of a calendar that does not exist.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn not_found_without_calendar() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let result = update_tracker_day(
        State(test.to_app_state()),
        Path((Uuid::new_v4(), 2026, 1)),
        update(r#"{"field":"quran","value":true}"#),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
