//! Tests for UserSettingsRepository::upsert.

use super::*;

/// Tests creating a settings row.
///
/// Expected: Ok with every column written
#[tokio::test]
async fn inserts_new_settings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = Uuid::new_v4();

    let repo = UserSettingsRepository::new(&test.db);
    let result = repo.upsert(user_id, record()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let settings = result.unwrap();
    assert_eq!(settings.user_id, user_id);
    assert_eq!(settings.country.as_deref(), Some("GB"));
    assert_eq!(settings.calculation_method, 3);
    assert_eq!(settings.gender.as_deref(), Some("female"));

    Ok(())
}

/// Tests overwriting an existing row.
///
/// Expected: Ok with new values, a single row per user and the original created_at
#[tokio::test]
async fn overwrites_existing_settings() -> Result<(), TestError> {
    let user_id = Uuid::new_v4();
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let original = test.settings().insert_mock_settings(user_id).await?;

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let repo = UserSettingsRepository::new(&test.db);
    let mut update = record();
    update.ramadan_override_start = Some(date(2026, 2, 19));
    let result = repo.upsert(user_id, update).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let settings = result.unwrap();
    assert_eq!(settings.id, original.id);
    assert_eq!(settings.created_at, original.created_at);
    assert!(settings.updated_at > original.updated_at);
    assert_eq!(settings.ramadan_override_start, Some(date(2026, 2, 19)));
    assert_eq!(settings.timezone.as_deref(), Some("Europe/London"));

    Ok(())
}
