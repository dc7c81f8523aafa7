//! Tests for HijriCacheRepository::find.

use super::*;

/// Tests looking up a key that was never written.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_on_miss() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let repo = HijriCacheRepository::new(&test.db);

    let result = repo
        .find(&HijriCacheKey::new(date(2025, 3, 1), 0.0, 0.0, 2))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Tests that location and method are part of the key.
///
/// Expected: a different method or latitude for the same date misses
#[tokio::test]
async fn matches_on_every_key_component() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let repo = HijriCacheRepository::new(&test.db);
    let day = date(2025, 3, 1);

    repo.insert(&HijriCacheKey::new(day, 24.8607, 67.0011, 1), json!({}))
        .await?;

    assert!(repo
        .find(&HijriCacheKey::new(day, 24.8607, 67.0011, 1))
        .await?
        .is_some());
    assert!(repo
        .find(&HijriCacheKey::new(day, 24.8607, 67.0011, 2))
        .await?
        .is_none());
    assert!(repo
        .find(&HijriCacheKey::new(day, 21.4225, 67.0011, 1))
        .await?
        .is_none());
    assert!(repo
        .find(&HijriCacheKey::new(date(2025, 3, 2), 24.8607, 67.0011, 1))
        .await?
        .is_none());

    Ok(())
}
