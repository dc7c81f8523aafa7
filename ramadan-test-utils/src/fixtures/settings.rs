//! User settings fixtures.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

/// Karachi, used as the default location of mock settings.
pub static MOCK_LATITUDE: f64 = 24.8607;
pub static MOCK_LONGITUDE: f64 = 67.0011;
pub static MOCK_TIMEZONE: &str = "Asia/Karachi";

impl TestContext {
    pub fn settings<'a>(&'a mut self) -> SettingsFixtures<'a> {
        SettingsFixtures { setup: self }
    }
}

pub struct SettingsFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> SettingsFixtures<'a> {
    /// Insert settings for a user in Karachi using the Karachi calculation method.
    pub async fn insert_mock_settings(
        &mut self,
        user_id: Uuid,
    ) -> Result<entity::user_settings::Model, TestError> {
        self.insert(mock_settings(user_id)).await
    }

    /// Insert mock settings carrying a Ramadan start override.
    pub async fn insert_mock_settings_with_override(
        &mut self,
        user_id: Uuid,
        ramadan_start: NaiveDate,
    ) -> Result<entity::user_settings::Model, TestError> {
        let mut settings = mock_settings(user_id);
        settings.ramadan_override_start = ActiveValue::Set(Some(ramadan_start));

        self.insert(settings).await
    }

    /// Insert settings with no location, country or timezone.
    pub async fn insert_mock_settings_without_location(
        &mut self,
        user_id: Uuid,
    ) -> Result<entity::user_settings::Model, TestError> {
        let mut settings = mock_settings(user_id);
        settings.latitude = ActiveValue::Set(None);
        settings.longitude = ActiveValue::Set(None);
        settings.country = ActiveValue::Set(None);
        settings.timezone = ActiveValue::Set(None);

        self.insert(settings).await
    }

    /// Insert mock settings with a location but no stored timezone.
    pub async fn insert_mock_settings_without_timezone(
        &mut self,
        user_id: Uuid,
    ) -> Result<entity::user_settings::Model, TestError> {
        let mut settings = mock_settings(user_id);
        settings.timezone = ActiveValue::Set(None);

        self.insert(settings).await
    }

    async fn insert(
        &mut self,
        settings: entity::user_settings::ActiveModel,
    ) -> Result<entity::user_settings::Model, TestError> {
        Ok(settings.insert(&self.setup.db).await?)
    }
}

fn mock_settings(user_id: Uuid) -> entity::user_settings::ActiveModel {
    entity::user_settings::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        latitude: ActiveValue::Set(Some(MOCK_LATITUDE)),
        longitude: ActiveValue::Set(Some(MOCK_LONGITUDE)),
        country: ActiveValue::Set(Some("PK".to_string())),
        calculation_method: ActiveValue::Set(1),
        timezone: ActiveValue::Set(Some(MOCK_TIMEZONE.to_string())),
        ramadan_override_start: ActiveValue::Set(None),
        gender: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}
