//! Tests for TrackerDayRepository::insert_missing.

use super::*;

/// Tests inserting a full calendar into an empty table.
///
/// Expected: Ok(30) and every row blank
#[tokio::test]
async fn inserts_all_days() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = Uuid::new_v4();
    let start = date(2025, 3, 1);
    let days: Vec<(i32, NaiveDate)> = (1..=30)
        .map(|n| (n, start + chrono::Days::new((n - 1) as u64)))
        .collect();

    let repo = TrackerDayRepository::new(&test.db);
    let result = repo.insert_missing(user_id, 2025, days).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), 30);
    let stored = repo.get_by_user_and_year(user_id, 2025).await?;
    assert_eq!(stored.len(), 30);
    assert_eq!(stored[29].date, date(2025, 3, 30));
    assert!(stored.iter().all(|d| !d.quran && d.fajr.is_none()));

    Ok(())
}

/// Tests inserting over rows that already exist.
///
/// Existing rows keep their date and logged values.
///
/// Expected: Ok with only the missing days inserted
#[tokio::test]
async fn ignores_existing_days() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = Uuid::new_v4();
    let existing = test
        .tracker()
        .insert_mock_day(user_id, 2025, 5, date(2025, 3, 5))
        .await?;

    let repo = TrackerDayRepository::new(&test.db);
    repo.update_field(existing.id, TrackerUpdate::Quran(true))
        .await?;

    let result = repo
        .insert_missing(
            user_id,
            2025,
            vec![(4, date(2025, 3, 10)), (5, date(2025, 3, 11))],
        )
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), 1);
    let day_5 = repo.find_day(user_id, 2025, 5).await?.unwrap();
    assert_eq!(day_5.date, date(2025, 3, 5));
    assert!(day_5.quran);

    Ok(())
}

/// Tests inserting nothing.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn returns_zero_for_empty_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let repo = TrackerDayRepository::new(&test.db);
    let result = repo.insert_missing(Uuid::new_v4(), 2025, Vec::new()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), 0);

    Ok(())
}
