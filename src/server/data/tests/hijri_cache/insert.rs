//! Tests for HijriCacheRepository::insert.

use super::*;

/// Tests inserting a new cache entry.
///
/// Expected: Ok(1) and the entry is found afterwards
#[tokio::test]
async fn inserts_new_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let repo = HijriCacheRepository::new(&test.db);
    let key = HijriCacheKey::new(date(2025, 3, 1), 24.8607, 67.0011, 1);

    let result = repo.insert(&key, json!({ "day": 1 })).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), 1);
    let entry = repo.find(&key).await?;
    assert_eq!(entry.map(|e| e.data), Some(json!({ "day": 1 })));

    Ok(())
}

/// Tests inserting a second entry for an existing key.
///
/// Cache entries are never mutated once written.
///
/// Expected: Ok(0) and the original payload is kept
#[tokio::test]
async fn ignores_duplicate_key() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracker_tables().build().await?;
    let repo = HijriCacheRepository::new(&test.db);
    let key = HijriCacheKey::new(date(2025, 3, 1), 24.8607, 67.0011, 1);

    repo.insert(&key, json!({ "day": 1 })).await?;
    let result = repo.insert(&key, json!({ "day": 2 })).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), 0);
    let entry = repo.find(&key).await?;
    assert_eq!(entry.map(|e| e.data), Some(json!({ "day": 1 })));

    Ok(())
}
