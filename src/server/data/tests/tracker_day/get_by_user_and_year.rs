//! Tests for TrackerDayRepository::get_by_user_and_year.

use super::*;

/// Tests that only the requested user's rows for the requested year are returned, in order.
///
/// Expected: Ok with 30 rows sorted by day number
#[tokio::test]
async fn returns_rows_for_user_and_year_in_order() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tracker_tables().build().await?;
    let user_id = Uuid::new_v4();
    let other_user = Uuid::new_v4();

    test.tracker()
        .insert_mock_calendar(user_id, 2025, date(2025, 3, 1))
        .await?;
    test.tracker()
        .insert_mock_calendar(user_id, 2026, date(2026, 2, 18))
        .await?;
    test.tracker()
        .insert_mock_calendar(other_user, 2025, date(2025, 3, 1))
        .await?;

    let repo = TrackerDayRepository::new(&test.db);
    let result = repo.get_by_user_and_year(user_id, 2025).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let days = result.unwrap();
    assert_eq!(days.len(), 30);
    assert!(days.iter().all(|d| d.user_id == user_id && d.year == 2025));
    let numbers: Vec<i32> = days.iter().map(|d| d.day_number).collect();
    assert_eq!(numbers, (1..=30).collect::<Vec<_>>());

    Ok(())
}

/// Tests a user without any rows.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;

    let repo = TrackerDayRepository::new(&test.db);
    let result = repo.get_by_user_and_year(Uuid::new_v4(), 2025).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_empty());

    Ok(())
}
