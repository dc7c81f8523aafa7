use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::service::{ayah::cache::AyahCache, ramadan::cache::RamadanStartCache};

/// Default end-to-end timeout for loading a tracker calendar.
pub const DEFAULT_TRACKER_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub aladhan_client: aladhan::Client,
    pub quran_client: alquran::Client,
    pub ramadan_start_cache: RamadanStartCache,
    pub ayah_cache: AyahCache,
    pub tracker_fetch_timeout: Duration,
}

/// Builds state with fresh caches and the default fetch timeout.
impl From<(DatabaseConnection, aladhan::Client, alquran::Client)> for AppState {
    fn from(
        (db, aladhan_client, quran_client): (DatabaseConnection, aladhan::Client, alquran::Client),
    ) -> Self {
        Self {
            db,
            aladhan_client,
            quran_client,
            ramadan_start_cache: RamadanStartCache::default(),
            ayah_cache: AyahCache::default(),
            tracker_fetch_timeout: DEFAULT_TRACKER_FETCH_TIMEOUT,
        }
    }
}
