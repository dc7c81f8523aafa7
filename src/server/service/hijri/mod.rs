//! Gregorian to Hijri conversion backed by the persistent Hijri calendar cache.

#[cfg(test)]
mod tests;

use aladhan::model::GregorianToHijri;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    model::{
        hijri::{hijri_month_name, HijriDate},
        settings::CalculationMethod,
    },
    server::{
        data::{
            hijri_cache::{HijriCacheKey, HijriCacheRepository},
            user_settings::UserSettingsRepository,
        },
        error::{hijri::HijriError, Error},
        service::prayer::PrayerService,
        util::time::local_now,
    },
};

pub struct HijriService<'a> {
    db: &'a DatabaseConnection,
    aladhan_client: &'a aladhan::Client,
}

impl<'a> HijriService<'a> {
    pub fn new(db: &'a DatabaseConnection, aladhan_client: &'a aladhan::Client) -> Self {
        Self { db, aladhan_client }
    }

    /// Convert `date` to the Hijri calendar, reading the cache before the network.
    ///
    /// Location and method only form part of the cache key; the conversion service is
    /// queried with the date alone. A cache entry that cannot be read or decoded is treated
    /// as a miss, and a failed cache write is logged without failing the conversion.
    ///
    /// # Returns
    /// - `Ok(HijriDate)` - From the cache or the conversion service
    /// - `Err(Error::AladhanError)` - Conversion request failed
    /// - `Err(Error::HijriError)` - Conversion response lacked a valid day, month or year
    pub async fn resolve(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        method: i32,
    ) -> Result<HijriDate, Error> {
        let key = HijriCacheKey::new(date, latitude, longitude, method);
        let cache_repo = HijriCacheRepository::new(self.db);

        match cache_repo.find(&key).await {
            Ok(Some(entry)) => match serde_json::from_value::<HijriDate>(entry.data) {
                Ok(hijri) => {
                    debug!(%date, "Hijri cache hit");

                    return Ok(hijri);
                }
                Err(err) => warn!(%date, error = %err, "Ignoring undecodable Hijri cache entry"),
            },
            Ok(None) => debug!(%date, "Hijri cache miss"),
            Err(err) => warn!(%date, error = %err, "Failed to read Hijri cache"),
        }

        let response = self
            .aladhan_client
            .hijri()
            .gregorian_to_hijri(date)
            .await?;
        let hijri = parse_hijri_date(date, response)?;

        match serde_json::to_value(&hijri) {
            Ok(data) => {
                if let Err(err) = cache_repo.insert(&key, data).await {
                    warn!(%date, error = %err, "Failed to write Hijri cache");
                }
            }
            Err(err) => warn!(%date, error = %err, "Failed to serialize Hijri date for cache"),
        }

        Ok(hijri)
    }

    /// Today's Hijri date for a user, with "today" taken in the user's timezone.
    ///
    /// A user with a location but no stored timezone uses the zone reported for that
    /// location. Users without settings resolve at latitude and longitude 0 with the default
    /// method in UTC.
    pub async fn resolve_today(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<HijriDate, Error> {
        let settings = UserSettingsRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        let (latitude, longitude, method, timezone) = match settings {
            Some(settings) => {
                let timezone = PrayerService::new(self.db, self.aladhan_client)
                    .resolve_timezone(&settings, now)
                    .await;

                (
                    settings.latitude.unwrap_or(0.0),
                    settings.longitude.unwrap_or(0.0),
                    settings.calculation_method,
                    timezone,
                )
            }
            None => (0.0, 0.0, CalculationMethod::default().id(), None),
        };

        let today = local_now(timezone.as_deref(), now).date();

        self.resolve(today, latitude, longitude, method).await
    }
}

/// Builds a [`HijriDate`] from a `gToH` response for `gregorian_date`.
fn parse_hijri_date(
    gregorian_date: NaiveDate,
    response: GregorianToHijri,
) -> Result<HijriDate, HijriError> {
    let hijri = response
        .hijri
        .ok_or_else(|| HijriError::Malformed("missing hijri object".to_string()))?;

    let day = hijri
        .day
        .as_deref()
        .and_then(|day| day.trim().parse::<u32>().ok())
        .filter(|day| *day > 0)
        .ok_or_else(|| HijriError::Malformed(format!("invalid day {:?}", hijri.day)))?;

    let year = hijri
        .year
        .as_deref()
        .and_then(|year| year.trim().parse::<i32>().ok())
        .filter(|year| *year > 0)
        .ok_or_else(|| HijriError::Malformed(format!("invalid year {:?}", hijri.year)))?;

    let month = hijri
        .month
        .ok_or_else(|| HijriError::Malformed("missing month".to_string()))?;

    let month_number = month
        .number
        .and_then(|number| u32::try_from(number).ok())
        .filter(|number| (1..=12).contains(number))
        .ok_or_else(|| HijriError::Malformed(format!("invalid month {:?}", month.number)))?;

    let month_name = match month.en.filter(|name| !name.is_empty()) {
        Some(name) => name,
        None => hijri_month_name(month_number)
            .unwrap_or_default()
            .to_string(),
    };

    Ok(HijriDate {
        day,
        month: month_number,
        year,
        month_name,
        gregorian_date,
    })
}
