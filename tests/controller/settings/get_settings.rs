//! Tests for the get_settings endpoint.

use super::*;

/// Tests reading stored settings.
///
/// Expected: 200 OK with the stored country, method and method label
#[tokio::test]
async fn returns_settings() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_settings(user_id)
        .build()
        .await?;

    let result = get_settings(State(test.to_app_state()), Path(user_id)).await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["country"], "PK");
    assert_eq!(body["calculation_method"], 1);
    assert_eq!(
        body["calculation_method_label"],
        "University of Islamic Sciences, Karachi"
    );

    Ok(())
}

/// Tests reading settings for a user without a row.
///
/// Expected: 404 Not Found
#[tokio::test]
async fn not_found_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let result = get_settings(State(test.to_app_state()), Path(Uuid::new_v4())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
