//! Ramadan start date resolution.
//!
//! The first day of Ramadan for a Gregorian year comes from, in order of preference: the
//! user's manual override for that year, the in-process [`RamadanStartCache`], the Aladhan
//! Hijri to Gregorian calendar and finally a static table of known dates.

pub mod cache;
pub mod fallback;
pub mod user_override;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    model::{hijri::RAMADAN_MONTH, ramadan::RamadanStatusDto, tracker::RAMADAN_DAYS},
    server::{
        data::user_settings::UserSettingsRepository,
        error::{hijri::HijriError, tracker::TrackerError, Error},
        model::db::UserSettingsModel,
        service::{
            prayer::PrayerService,
            ramadan::{
                cache::RamadanStartCache, fallback::fallback_start,
                user_override::applicable_override,
            },
        },
        util::time::{expected_date, local_now, ramadan_day_number},
    },
};

/// Gregorian year whose Ramadan falls in [`ANCHOR_HIJRI_YEAR`].
pub const ANCHOR_GREGORIAN_YEAR: i32 = 2024;
pub const ANCHOR_HIJRI_YEAR: i32 = 1445;

/// Years accepted by the tracker.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Reject years the Hijri year estimate and the calendar service are not meant for.
pub fn validate_year(year: i32) -> Result<(), TrackerError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TrackerError::InvalidYear(year))
    }
}

/// Hijri year whose Ramadan is expected to fall in the Gregorian `year`.
///
/// The Hijri year is about 11 days shorter than the Gregorian year, so this estimate drifts
/// and is corrected by [`RamadanService::fetch_start`].
pub fn estimate_hijri_year(year: i32) -> i32 {
    ANCHOR_HIJRI_YEAR + (year - ANCHOR_GREGORIAN_YEAR)
}

pub struct RamadanService<'a> {
    db: &'a DatabaseConnection,
    aladhan_client: &'a aladhan::Client,
    cache: &'a RamadanStartCache,
}

impl<'a> RamadanService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        aladhan_client: &'a aladhan::Client,
        cache: &'a RamadanStartCache,
    ) -> Self {
        Self {
            db,
            aladhan_client,
            cache,
        }
    }

    /// Ramadan day 1 for `year`, honouring the user's override for that year.
    ///
    /// # Returns
    /// - `Ok(NaiveDate)` - The override when it falls in `year`, otherwise [`Self::resolve_start`]
    /// - `Err(Error::DbErr)` - Settings lookup failed
    pub async fn resolve_start_for_user(&self, user_id: Uuid, year: i32) -> Result<NaiveDate, Error> {
        let settings = UserSettingsRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(self.start_for_settings(settings.as_ref(), year).await)
    }

    /// The user's Ramadan calendar for `year` and where today falls in it.
    ///
    /// "Today" is taken at `now` in the user's timezone, the zone reported for their stored
    /// location, or UTC.
    pub async fn status(
        &self,
        user_id: Uuid,
        year: i32,
        now: DateTime<Utc>,
    ) -> Result<RamadanStatusDto, Error> {
        validate_year(year)?;

        let settings = UserSettingsRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        let start = self.start_for_settings(settings.as_ref(), year).await;
        let end = expected_date(start, RAMADAN_DAYS).ok_or_else(|| {
            Error::InternalError(format!("Ramadan starting {} has no day 30", start))
        })?;

        let timezone = match &settings {
            Some(settings) => {
                PrayerService::new(self.db, self.aladhan_client)
                    .resolve_timezone(settings, now)
                    .await
            }
            None => None,
        };
        let today = local_now(timezone.as_deref(), now).date();

        Ok(RamadanStatusDto {
            year,
            start,
            end,
            today,
            day_number: ramadan_day_number(start, today),
        })
    }

    async fn start_for_settings(&self, settings: Option<&UserSettingsModel>, year: i32) -> NaiveDate {
        let override_start = settings.and_then(|settings| settings.ramadan_override_start);

        if let Some(start) = applicable_override(override_start, year) {
            debug!(year, %start, "Using manual Ramadan start");

            return start;
        }

        self.resolve_start(year).await
    }

    /// Ramadan day 1 for `year`. Never fails; see [`fallback_start`] for the last resort.
    ///
    /// Only dates obtained from the calendar service are cached, so a fallback is retried on
    /// the next call.
    pub async fn resolve_start(&self, year: i32) -> NaiveDate {
        if let Some(start) = self.cache.get(year).await {
            debug!(year, %start, "Ramadan start cache hit");

            return start;
        }

        match self.fetch_start(year).await {
            Ok(start) => {
                self.cache.insert(year, start).await;

                start
            }
            Err(err) => {
                warn!(year, error = %err, "Failed to resolve Ramadan start, using fallback");

                fallback_start(year)
            }
        }
    }

    /// Query the calendar service for Ramadan of the estimated Hijri year.
    ///
    /// When the first day lands outside `year` the query is repeated once with the adjacent
    /// Hijri year. The second answer is returned even if it also lands outside `year`.
    pub async fn fetch_start(&self, year: i32) -> Result<NaiveDate, Error> {
        let hijri_year = estimate_hijri_year(year);
        let start = self.first_day_of_ramadan(hijri_year).await?;

        if start.year() == year {
            return Ok(start);
        }

        let retry_hijri_year = if start.year() < year {
            hijri_year + 1
        } else {
            hijri_year - 1
        };

        debug!(
            year,
            hijri_year,
            retry_hijri_year,
            %start,
            "Ramadan start landed outside requested year, retrying"
        );

        self.first_day_of_ramadan(retry_hijri_year).await
    }

    async fn first_day_of_ramadan(&self, hijri_year: i32) -> Result<NaiveDate, Error> {
        let days = self
            .aladhan_client
            .calendar()
            .hijri_to_gregorian_calendar(RAMADAN_MONTH, hijri_year)
            .await?;

        let start = days
            .first()
            .and_then(|day| day.gregorian.as_ref())
            .and_then(|gregorian| gregorian.naive_date())
            .ok_or_else(|| {
                HijriError::Malformed(format!(
                    "calendar for Ramadan {} has no Gregorian first day",
                    hijri_year
                ))
            })?;

        Ok(start)
    }
}
