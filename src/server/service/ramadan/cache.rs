//! Process-local cache of resolved Ramadan start dates.

use chrono::NaiveDate;
use moka::future::Cache;

/// Capacity used when none is configured.
pub const DEFAULT_RAMADAN_CACHE_CAPACITY: u64 = 64;

/// Gregorian year to Ramadan day 1, shared across requests through `AppState`.
///
/// Clones share the same underlying cache. Racing inserts for a year are last-write-wins.
#[derive(Clone, Debug)]
pub struct RamadanStartCache(Cache<i32, NaiveDate>);

impl RamadanStartCache {
    pub fn new(capacity: u64) -> Self {
        Self(Cache::new(capacity))
    }

    pub async fn get(&self, year: i32) -> Option<NaiveDate> {
        self.0.get(&year).await
    }

    pub async fn insert(&self, year: i32, start: NaiveDate) {
        self.0.insert(year, start).await;
    }
}

impl Default for RamadanStartCache {
    fn default() -> Self {
        Self::new(DEFAULT_RAMADAN_CACHE_CAPACITY)
    }
}
