//! User settings reads and partial updates.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;
use tracing::debug;
use uuid::Uuid;

use crate::{
    model::settings::{CalculationMethod, UserSettingsDto, UserSettingsPatch},
    server::{
        data::user_settings::{UserSettingsRecord, UserSettingsRepository},
        error::{settings::SettingsError, Error},
        model::db::UserSettingsModel,
        util::time::parse_timezone,
    },
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(UserSettingsDto)` - The user's settings
    /// - `Err(Error::SettingsError)` - The user has no settings row
    pub async fn get_settings(&self, user_id: Uuid) -> Result<UserSettingsDto, Error> {
        let settings = UserSettingsRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
            .ok_or(SettingsError::NotFound(user_id))?;

        Ok(settings.into())
    }

    /// Apply a partial update, creating the settings row if the user has none.
    ///
    /// Keys absent from `patch` are written back from the stored row unchanged.
    ///
    /// # Returns
    /// - `Ok(UserSettingsDto)` - Settings after the update
    /// - `Err(Error::SettingsError)` - A supplied value failed validation
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_settings(
        &self,
        user_id: Uuid,
        patch: UserSettingsPatch,
    ) -> Result<UserSettingsDto, Error> {
        validate_patch(&patch)?;

        let settings_repo = UserSettingsRepository::new(self.db);
        let existing = settings_repo.get_by_user_id(user_id).await?;

        debug!(%user_id, new = existing.is_none(), "Updating user settings");

        let record = merge_settings(existing.as_ref(), patch);
        let settings = settings_repo.upsert(user_id, record).await?;

        Ok(settings.into())
    }
}

/// Check every value the patch supplies. Explicit nulls are always accepted.
pub fn validate_patch(patch: &UserSettingsPatch) -> Result<(), SettingsError> {
    if let Some(Some(latitude)) = patch.latitude {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SettingsError::InvalidLatitude(latitude));
        }
    }

    if let Some(Some(longitude)) = patch.longitude {
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SettingsError::InvalidLongitude(longitude));
        }
    }

    if let Some(Some(method)) = patch.calculation_method {
        if CalculationMethod::from_id(method).is_none() {
            return Err(SettingsError::InvalidCalculationMethod(method));
        }
    }

    if let Some(Some(timezone)) = &patch.timezone {
        if parse_timezone(timezone).is_none() {
            return Err(SettingsError::InvalidTimezone(timezone.clone()));
        }
    }

    Ok(())
}

/// Overlay `patch` on the stored row.
///
/// A supplied key wins, including an explicit null. An explicit null method resets to the
/// default. A new row given a country but no method gets the method suggested for that
/// country; an existing row keeps its stored method.
pub fn merge_settings(
    existing: Option<&UserSettingsModel>,
    patch: UserSettingsPatch,
) -> UserSettingsRecord {
    fn pick<T>(patched: Option<Option<T>>, stored: Option<T>) -> Option<T> {
        match patched {
            Some(value) => value,
            None => stored,
        }
    }

    let country = pick(
        patch.country,
        existing.and_then(|settings| settings.country.clone()),
    );

    let calculation_method = match (patch.calculation_method, existing) {
        (Some(Some(method)), _) => method,
        (Some(None), _) => CalculationMethod::default().id(),
        (None, Some(settings)) => settings.calculation_method,
        (None, None) => country
            .as_deref()
            .map(CalculationMethod::suggest_for_country)
            .unwrap_or_default()
            .id(),
    };

    UserSettingsRecord {
        latitude: pick(patch.latitude, existing.and_then(|settings| settings.latitude)),
        longitude: pick(
            patch.longitude,
            existing.and_then(|settings| settings.longitude),
        ),
        country,
        calculation_method,
        timezone: pick(
            patch.timezone,
            existing.and_then(|settings| settings.timezone.clone()),
        ),
        ramadan_override_start: pick(
            patch.ramadan_override_start,
            existing.and_then(|settings| settings.ramadan_override_start),
        ),
        gender: pick(
            patch
                .gender
                .map(|gender| gender.map(|gender| gender.as_str().to_string())),
            existing.and_then(|settings| settings.gender.clone()),
        ),
    }
}
