//! Process-local cache of the verse picked for each date.

use chrono::NaiveDate;
use moka::future::Cache;

use crate::model::ayah::AyahDto;

pub const DEFAULT_AYAH_CACHE_CAPACITY: u64 = 32;

/// Local date to verse of the day, shared across requests through `AppState`.
#[derive(Clone, Debug)]
pub struct AyahCache(Cache<NaiveDate, AyahDto>);

impl AyahCache {
    pub fn new(capacity: u64) -> Self {
        Self(Cache::new(capacity))
    }

    pub async fn get(&self, date: NaiveDate) -> Option<AyahDto> {
        self.0.get(&date).await
    }

    pub async fn insert(&self, ayah: AyahDto) {
        self.0.insert(ayah.date, ayah).await;
    }
}

impl Default for AyahCache {
    fn default() -> Self {
        Self::new(DEFAULT_AYAH_CACHE_CAPACITY)
    }
}
