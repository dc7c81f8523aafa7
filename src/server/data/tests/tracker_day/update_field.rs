//! Tests for TrackerDayRepository::update_field.

use super::*;

/// Tests setting a farz state.
///
/// Expected: Ok(Some) with only the targeted column changed
#[tokio::test]
async fn writes_only_targeted_column() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = Uuid::new_v4();
    let day = test
        .tracker()
        .insert_mock_day(user_id, 2025, 1, date(2025, 3, 1))
        .await?;

    let repo = TrackerDayRepository::new(&test.db);
    let result = repo
        .update_field(day.id, TrackerUpdate::Farz(Prayer::Asr, Some(FarzState::Qaza)))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let updated = result.unwrap().expect("row should exist");
    assert_eq!(updated.asr.as_deref(), Some("qaza"));
    assert_eq!(updated.fajr, None);
    assert!(!updated.quran);
    assert_eq!(updated.date, day.date);
    assert!(updated.updated_at >= day.updated_at);

    Ok(())
}

/// Tests clearing rakat counts.
///
/// Expected: Ok(Some) with the column set back to null
#[tokio::test]
async fn clears_rakat_count() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = Uuid::new_v4();
    let day = test
        .tracker()
        .insert_mock_day(user_id, 2025, 1, date(2025, 3, 1))
        .await?;

    let repo = TrackerDayRepository::new(&test.db);
    repo.update_field(day.id, TrackerUpdate::Taraweeh(Some(20)))
        .await?;
    let result = repo.update_field(day.id, TrackerUpdate::Taraweeh(None)).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().and_then(|d| d.taraweeh), None);

    Ok(())
}

/// Tests updating a row that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let repo = TrackerDayRepository::new(&test.db);
    let result = repo.update_field(42, TrackerUpdate::Charity(true)).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    Ok(())
}
