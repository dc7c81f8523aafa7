//! Tests for TrackerDayRepository::update_date.

use super::*;

/// Tests moving a row to a new date.
///
/// Expected: Ok(true), new date stored, logged fields preserved
#[tokio::test]
async fn updates_date_and_preserves_logged_fields() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = Uuid::new_v4();
    let day = test
        .tracker()
        .insert_mock_day(user_id, 2026, 5, date(2026, 2, 22))
        .await?;

    let repo = TrackerDayRepository::new(&test.db);
    repo.update_field(day.id, TrackerUpdate::Quran(true))
        .await?;
    repo.update_field(day.id, TrackerUpdate::Farz(Prayer::Fajr, Some(FarzState::Mosque)))
        .await?;

    let result = repo.update_date(day.id, date(2026, 2, 23)).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap());
    let updated = repo.find_day(user_id, 2026, 5).await?.unwrap();
    assert_eq!(updated.date, date(2026, 2, 23));
    assert!(updated.quran);
    assert_eq!(updated.fajr.as_deref(), Some("mosque"));

    Ok(())
}

/// Tests updating a row that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let repo = TrackerDayRepository::new(&test.db);
    let result = repo.update_date(999, date(2026, 2, 23)).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(!result.unwrap());

    Ok(())
}
