//! Tests for the get_ayah_today endpoint.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use ramadan_tracker::server::{controller::ayah::get_ayah_today, service::ayah::verse_for_date};

use super::*;

/// Tests the verse of the day for a user without settings.
///
/// Expected: 200 OK with the Arabic text and English translation of today's verse
#[tokio::test]
async fn returns_verse_of_the_day() -> Result<(), TestError> {
    let key = verse_for_date(Utc::now().date_naive());
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_ayah_endpoint(key.surah, key.ayah, mock_ayah_editions(key.surah, key.ayah), 1)
        .build()
        .await?;

    let result = get_ayah_today(State(test.to_app_state()), Path(Uuid::new_v4())).await;

    assert!(result.is_ok(), "Error: {:?}", result.as_ref().err());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["english"], format!("Verse {}:{}", key.surah, key.ayah));
    assert_eq!(body["surah_number"], key.surah);
    assert_eq!(body["ayah_number"], key.ayah);
    test.assert_mocks();

    Ok(())
}

/// Tests a verse response without the English translation.
///
/// Expected: 502 Bad Gateway
#[tokio::test]
async fn bad_gateway_without_english_text() -> Result<(), TestError> {
    let key = verse_for_date(Utc::now().date_naive());
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_ayah_endpoint(
            key.surah,
            key.ayah,
            mock_arabic_only_editions(key.surah, key.ayah),
            1,
        )
        .build()
        .await?;

    let result = get_ayah_today(State(test.to_app_state()), Path(Uuid::new_v4())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}

/// Tests a failing verse request.
///
/// Expected: 502 Bad Gateway
#[tokio::test]
async fn bad_gateway_when_request_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", mockito::Matcher::Regex(r"^/ayah/".to_string()))
                .with_status(500)
                .create()
        })
        .build()
        .await?;

    let result = get_ayah_today(State(test.to_app_state()), Path(Uuid::new_v4())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}
