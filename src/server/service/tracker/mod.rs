//! Tracker calendar maintenance and day updates.

#[cfg(test)]
mod tests;

mod calendar;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::tracker::{TrackerDayDto, TrackerUpdate, RAMADAN_DAYS},
    server::{
        data::tracker_day::TrackerDayRepository,
        error::{tracker::TrackerError, Error},
        service::ramadan::{cache::RamadanStartCache, validate_year},
    },
};

pub const MAX_TARAWEEH_RAKAT: i32 = 20;
pub const MAX_TAHAJUD_RAKAT: i32 = 12;

pub struct TrackerService<'a> {
    db: &'a DatabaseConnection,
    aladhan_client: &'a aladhan::Client,
    ramadan_start_cache: &'a RamadanStartCache,
}

impl<'a> TrackerService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        aladhan_client: &'a aladhan::Client,
        ramadan_start_cache: &'a RamadanStartCache,
    ) -> Self {
        Self {
            db,
            aladhan_client,
            ramadan_start_cache,
        }
    }

    /// Write a single logged field of one tracker day.
    ///
    /// Only the targeted column and `updated_at` change. The calendar is not created here;
    /// the day must already exist.
    ///
    /// # Returns
    /// - `Ok(TrackerDayDto)` - The day after the update
    /// - `Err(Error::TrackerError)` - Invalid year, day number or rakat count, or no such day
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_day(
        &self,
        user_id: Uuid,
        year: i32,
        day_number: i32,
        update: TrackerUpdate,
    ) -> Result<TrackerDayDto, Error> {
        validate_year(year)?;

        if !(1..=RAMADAN_DAYS).contains(&day_number) {
            return Err(TrackerError::InvalidDayNumber(day_number).into());
        }

        validate_rakat(&update)?;

        let tracker_repo = TrackerDayRepository::new(self.db);

        let day = tracker_repo
            .find_day(user_id, year, day_number)
            .await?
            .ok_or(TrackerError::DayNotFound(day_number))?;

        let updated = tracker_repo
            .update_field(day.id, update)
            .await?
            .ok_or(TrackerError::DayNotFound(day_number))?;

        Ok(updated.into())
    }
}

/// Rakat counts are prayed in pairs and capped per prayer.
fn validate_rakat(update: &TrackerUpdate) -> Result<(), TrackerError> {
    let (field, value, max) = match *update {
        TrackerUpdate::Taraweeh(Some(value)) => ("taraweeh", value, MAX_TARAWEEH_RAKAT),
        TrackerUpdate::Tahajud(Some(value)) => ("tahajud", value, MAX_TAHAJUD_RAKAT),
        _ => return Ok(()),
    };

    if value % 2 != 0 || !(0..=max).contains(&value) {
        return Err(TrackerError::InvalidRakat { field, value, max });
    }

    Ok(())
}
