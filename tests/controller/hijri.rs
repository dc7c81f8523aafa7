//! Tests for the get_hijri_today endpoint.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use ramadan_tracker::server::controller::hijri::get_hijri_today;

use super::*;

/// Tests a failing conversion request.
///
/// Expected: 502 Bad Gateway
#[tokio::test]
async fn bad_gateway_when_conversion_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let mock = test.aladhan().create_failing_endpoint("/gToH", 500, 1);

    let result = get_hijri_today(State(test.to_app_state()), Path(Uuid::new_v4())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    mock.assert();

    Ok(())
}

/// Tests a conversion response without a Hijri date.
///
/// Expected: 502 Bad Gateway
#[tokio::test]
async fn bad_gateway_for_malformed_response() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/gToH")
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"code":200,"status":"OK","data":{"gregorian":{}}}"#)
                .create()
        })
        .build()
        .await?;

    let result = get_hijri_today(State(test.to_app_state()), Path(Uuid::new_v4())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}

/// Tests a successful conversion for today.
///
/// Expected: 200 OK with the formatted Hijri date
#[tokio::test]
async fn returns_hijri_today() -> Result<(), TestError> {
    let body = serde_json::json!({
        "code": 200,
        "status": "OK",
        "data": mock_gregorian_to_hijri(12, 9, 1447),
    })
    .to_string();
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_endpoint(move |server| {
            server
                .mock("GET", "/gToH")
                .match_query(mockito::Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let result = get_hijri_today(State(test.to_app_state()), Path(Uuid::new_v4())).await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["formatted"], "12 Ramaḍān 1447 AH");
    assert_eq!(body["is_ramadan"], true);
    test.assert_mocks();

    Ok(())
}
