use chrono::{Datelike, NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::db::HijriCacheModel;

/// Composite key of a cached Hijri conversion.
///
/// The date components are those of the Gregorian query date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HijriCacheKey {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub method: i32,
}

impl HijriCacheKey {
    pub fn new(date: NaiveDate, latitude: f64, longitude: f64, method: i32) -> Self {
        Self {
            year: date.year(),
            month: date.month() as i32,
            day: date.day() as i32,
            latitude,
            longitude,
            method,
        }
    }
}

pub struct HijriCacheRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HijriCacheRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Find the cache entry matching every component of `key`
    pub async fn find(&self, key: &HijriCacheKey) -> Result<Option<HijriCacheModel>, DbErr> {
        entity::prelude::HijriCalendarCache::find()
            .filter(entity::hijri_calendar_cache::Column::Year.eq(key.year))
            .filter(entity::hijri_calendar_cache::Column::Month.eq(key.month))
            .filter(entity::hijri_calendar_cache::Column::Day.eq(key.day))
            .filter(entity::hijri_calendar_cache::Column::Latitude.eq(key.latitude))
            .filter(entity::hijri_calendar_cache::Column::Longitude.eq(key.longitude))
            .filter(entity::hijri_calendar_cache::Column::Method.eq(key.method))
            .one(self.db)
            .await
    }

    /// Insert a cache entry, leaving any existing entry for the same key untouched
    ///
    /// # Returns
    /// - `Ok(1)` - Entry inserted
    /// - `Ok(0)` - An entry for the key already existed
    pub async fn insert(&self, key: &HijriCacheKey, data: serde_json::Value) -> Result<u64, DbErr> {
        let entry = entity::hijri_calendar_cache::ActiveModel {
            year: ActiveValue::Set(key.year),
            month: ActiveValue::Set(key.month),
            day: ActiveValue::Set(key.day),
            latitude: ActiveValue::Set(key.latitude),
            longitude: ActiveValue::Set(key.longitude),
            method: ActiveValue::Set(key.method),
            data: ActiveValue::Set(data),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::HijriCalendarCache::insert(entry)
            .on_conflict(
                OnConflict::columns([
                    entity::hijri_calendar_cache::Column::Year,
                    entity::hijri_calendar_cache::Column::Month,
                    entity::hijri_calendar_cache::Column::Day,
                    entity::hijri_calendar_cache::Column::Latitude,
                    entity::hijri_calendar_cache::Column::Longitude,
                    entity::hijri_calendar_cache::Column::Method,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }
}
