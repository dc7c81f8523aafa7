//! Prayer times for the dashboard.
//!
//! Failures here never surface as errors: the dashboard hides the prayer card instead.

#[cfg(test)]
mod tests;

use aladhan::model::{Timings, TimingsData};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    model::prayer::{NextPrayerDto, PrayerTimesDto, PrayerTimings},
    server::{
        data::user_settings::UserSettingsRepository,
        error::Error,
        model::db::UserSettingsModel,
        util::{
            prayer::{format_countdown, next_prayer, parse_prayer_time},
            time::local_now,
        },
    },
};

pub struct PrayerService<'a> {
    db: &'a DatabaseConnection,
    aladhan_client: &'a aladhan::Client,
}

impl<'a> PrayerService<'a> {
    pub fn new(db: &'a DatabaseConnection, aladhan_client: &'a aladhan::Client) -> Self {
        Self { db, aladhan_client }
    }

    /// The day's five prayer times at `now` for a location and calculation method.
    ///
    /// # Returns
    /// - `Some(PrayerTimings)` - All five prayers present with a parseable time
    /// - `None` - Request failed or the response was incomplete
    pub async fn get_timings(
        &self,
        latitude: f64,
        longitude: f64,
        method: i32,
        now: DateTime<Utc>,
    ) -> Option<PrayerTimings> {
        self.fetch(latitude, longitude, method, now)
            .await
            .and_then(|data| usable_timings(data.timings))
    }

    /// IANA timezone used for the user's local clock.
    ///
    /// The stored timezone wins. Without one, the zone Aladhan reports for the stored
    /// location is used; `None` means the caller falls back to UTC.
    pub async fn resolve_timezone(
        &self,
        settings: &UserSettingsModel,
        now: DateTime<Utc>,
    ) -> Option<String> {
        if let Some(timezone) = &settings.timezone {
            return Some(timezone.clone());
        }

        let (latitude, longitude) = (settings.latitude?, settings.longitude?);

        let timezone = self
            .fetch(latitude, longitude, settings.calculation_method, now)
            .await
            .and_then(|data| reported_timezone(&data));

        debug!(user_id = %settings.user_id, ?timezone, "Timezone from stored location");

        timezone
    }

    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        method: i32,
        now: DateTime<Utc>,
    ) -> Option<TimingsData> {
        match self
            .aladhan_client
            .timings()
            .timings(now.timestamp(), latitude, longitude, method)
            .await
        {
            Ok(data) => Some(data),
            Err(err) => {
                warn!(error = %err, "Failed to fetch prayer timings");

                None
            }
        }
    }

    /// Prayer times and the next prayer countdown for a user.
    ///
    /// The next prayer is computed against the wall clock in the user's timezone, or in the
    /// zone Aladhan reports for the location when none is stored.
    ///
    /// # Returns
    /// - `Ok(PrayerTimesDto)` - Unavailable when the user has no stored location or the
    ///   timings could not be fetched
    /// - `Err(Error::DbErr)` - Settings lookup failed
    pub async fn dashboard(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<PrayerTimesDto, Error> {
        let settings = UserSettingsRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        let Some(settings) = settings else {
            debug!(%user_id, "No settings, prayer times unavailable");

            return Ok(PrayerTimesDto::unavailable());
        };

        let (Some(latitude), Some(longitude)) = (settings.latitude, settings.longitude) else {
            debug!(%user_id, "No stored location, prayer times unavailable");

            return Ok(PrayerTimesDto::unavailable());
        };

        let Some(data) = self
            .fetch(latitude, longitude, settings.calculation_method, now)
            .await
        else {
            return Ok(PrayerTimesDto::unavailable());
        };

        let timezone = settings
            .timezone
            .clone()
            .or_else(|| reported_timezone(&data));

        let Some(timings) = usable_timings(data.timings) else {
            return Ok(PrayerTimesDto::unavailable());
        };

        let local_time = local_now(timezone.as_deref(), now).time();

        let next_prayer = next_prayer(&timings, local_time).map(|next| NextPrayerDto {
            name: next.name.name().to_string(),
            formatted_time: next.formatted_time,
            countdown: format_countdown(next.seconds_until),
            seconds_until: next.seconds_until,
        });

        Ok(PrayerTimesDto {
            available: true,
            timings: Some(timings),
            next_prayer,
        })
    }
}

fn reported_timezone(data: &TimingsData) -> Option<String> {
    data.meta.as_ref().and_then(|meta| meta.timezone.clone())
}

fn usable_timings(timings: Option<Timings>) -> Option<PrayerTimings> {
    let timings = timings.and_then(complete_timings);

    if timings.is_none() {
        warn!("Prayer timings response was incomplete");
    }

    timings
}

/// Keeps the five prayers when each is present and starts with a valid `HH:MM`.
fn complete_timings(timings: Timings) -> Option<PrayerTimings> {
    let valid = |time: Option<String>| time.filter(|time| parse_prayer_time(time).is_some());

    Some(PrayerTimings {
        fajr: valid(timings.fajr)?,
        dhuhr: valid(timings.dhuhr)?,
        asr: valid(timings.asr)?,
        maghrib: valid(timings.maghrib)?,
        isha: valid(timings.isha)?,
    })
}
