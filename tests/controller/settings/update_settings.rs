//! Tests for the update_settings endpoint.

use ramadan_tracker::model::settings::UserSettingsPatch;

use super::*;

fn patch(body: &str) -> Json<UserSettingsPatch> {
    Json(serde_json::from_str(body).unwrap())
}

/// Tests a body containing only the Ramadan override.
///
/// Expected: 200 OK, override stored, country and method unchanged
#[tokio::test]
async fn merges_partial_update() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_settings(user_id)
        .build()
        .await?;

    let result = update_settings(
        State(test.to_app_state()),
        Path(user_id),
        patch(r#"{"ramadan_override_start":"2026-02-19"}"#),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["ramadan_override_start"], "2026-02-19");
    assert_eq!(body["country"], "PK");
    assert_eq!(body["calculation_method"], 1);

    Ok(())
}

/// Tests an explicit null clearing a stored value.
///
/// Expected: 200 OK with the timezone cleared
#[tokio::test]
async fn explicit_null_clears_value() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_settings(user_id)
        .build()
        .await?;

    let result = update_settings(
        State(test.to_app_state()),
        Path(user_id),
        patch(r#"{"timezone":null}"#),
    )
    .await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let body = json_body(result.unwrap().into_response()).await;
    assert!(body["timezone"].is_null());
    assert_eq!(body["country"], "PK");

    Ok(())
}

/// Tests an out of range latitude.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn bad_request_for_invalid_latitude() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let result = update_settings(
        State(test.to_app_state()),
        Path(Uuid::new_v4()),
        patch(r#"{"latitude":123.4}"#),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
