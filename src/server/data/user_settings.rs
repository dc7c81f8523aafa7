use chrono::{NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::model::db::UserSettingsModel;

/// Every settings column the tracker owns, written together on upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSettingsRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub calculation_method: i32,
    pub timezone: Option<String>,
    pub ramadan_override_start: Option<NaiveDate>,
    pub gender: Option<String>,
}

pub struct UserSettingsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserSettingsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<UserSettingsModel>, DbErr> {
        entity::prelude::UserSettings::find()
            .filter(entity::user_settings::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Insert or overwrite a user's settings row with `record`
    ///
    /// `created_at` is only set on insert.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        record: UserSettingsRecord,
    ) -> Result<UserSettingsModel, DbErr> {
        let now = Utc::now().naive_utc();
        let settings = entity::user_settings::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            latitude: ActiveValue::Set(record.latitude),
            longitude: ActiveValue::Set(record.longitude),
            country: ActiveValue::Set(record.country),
            calculation_method: ActiveValue::Set(record.calculation_method),
            timezone: ActiveValue::Set(record.timezone),
            ramadan_override_start: ActiveValue::Set(record.ramadan_override_start),
            gender: ActiveValue::Set(record.gender),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::UserSettings::insert(settings)
            .on_conflict(
                OnConflict::column(entity::user_settings::Column::UserId)
                    .update_columns([
                        entity::user_settings::Column::Latitude,
                        entity::user_settings::Column::Longitude,
                        entity::user_settings::Column::Country,
                        entity::user_settings::Column::CalculationMethod,
                        entity::user_settings::Column::Timezone,
                        entity::user_settings::Column::RamadanOverrideStart,
                        entity::user_settings::Column::Gender,
                        entity::user_settings::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }
}
