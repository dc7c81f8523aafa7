//! Tests for UserSettingsRepository::get_by_user_id.

use super::*;

/// Tests fetching existing settings.
///
/// Expected: Ok(Some) with the stored row
#[tokio::test]
async fn finds_settings_for_user() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_settings(user_id)
        .build()
        .await?;

    let repo = UserSettingsRepository::new(&test.db);
    let result = repo.get_by_user_id(user_id).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let settings = result.unwrap().expect("settings should exist");
    assert_eq!(settings.user_id, user_id);
    assert_eq!(settings.calculation_method, 1);

    Ok(())
}

/// Tests fetching settings for a user who never saved any.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_settings() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracker_tables()
        .with_mock_settings(Uuid::new_v4())
        .build()
        .await?;

    let repo = UserSettingsRepository::new(&test.db);
    let result = repo.get_by_user_id(Uuid::new_v4()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    Ok(())
}
