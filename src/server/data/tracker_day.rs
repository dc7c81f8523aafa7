use chrono::{NaiveDate, Utc};
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::{prayer::Prayer, tracker::TrackerUpdate},
    server::model::db::TrackerDayModel,
};

pub struct TrackerDayRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackerDayRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// All tracker days of a user for a year, ordered by day number
    pub async fn get_by_user_and_year(
        &self,
        user_id: Uuid,
        year: i32,
    ) -> Result<Vec<TrackerDayModel>, DbErr> {
        entity::prelude::TrackerDay::find()
            .filter(entity::tracker_day::Column::UserId.eq(user_id))
            .filter(entity::tracker_day::Column::Year.eq(year))
            .order_by_asc(entity::tracker_day::Column::DayNumber)
            .all(self.db)
            .await
    }

    pub async fn find_day(
        &self,
        user_id: Uuid,
        year: i32,
        day_number: i32,
    ) -> Result<Option<TrackerDayModel>, DbErr> {
        entity::prelude::TrackerDay::find()
            .filter(entity::tracker_day::Column::UserId.eq(user_id))
            .filter(entity::tracker_day::Column::Year.eq(year))
            .filter(entity::tracker_day::Column::DayNumber.eq(day_number))
            .one(self.db)
            .await
    }

    /// Insert blank days, ignoring any `(user_id, year, day_number)` that already exists
    ///
    /// # Arguments
    /// - `days` - `(day_number, date)` pairs to insert
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows actually inserted
    pub async fn insert_missing(
        &self,
        user_id: Uuid,
        year: i32,
        days: Vec<(i32, NaiveDate)>,
    ) -> Result<u64, DbErr> {
        if days.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().naive_utc();
        let days = days
            .into_iter()
            .map(|(day_number, date)| entity::tracker_day::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                year: ActiveValue::Set(year),
                day_number: ActiveValue::Set(day_number),
                date: ActiveValue::Set(date),
                quran: ActiveValue::Set(false),
                charity: ActiveValue::Set(false),
                fasting: ActiveValue::Set(false),
                fajr: ActiveValue::Set(None),
                dhuhr: ActiveValue::Set(None),
                asr: ActiveValue::Set(None),
                maghrib: ActiveValue::Set(None),
                isha: ActiveValue::Set(None),
                taraweeh: ActiveValue::Set(None),
                tahajud: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::TrackerDay::insert_many(days)
            .on_conflict(
                OnConflict::columns([
                    entity::tracker_day::Column::UserId,
                    entity::tracker_day::Column::Year,
                    entity::tracker_day::Column::DayNumber,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Set the date of a single row, leaving every logged field untouched
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No row with that ID exists
    pub async fn update_date(&self, id: i32, date: NaiveDate) -> Result<bool, DbErr> {
        let result = entity::prelude::TrackerDay::update_many()
            .col_expr(entity::tracker_day::Column::Date, Expr::value(date))
            .col_expr(
                entity::tracker_day::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::tracker_day::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Write one logged field of a row along with `updated_at`
    ///
    /// # Returns
    /// - `Ok(Some(TrackerDayModel))` - The row after the update
    /// - `Ok(None)` - No row with that ID exists
    pub async fn update_field(
        &self,
        id: i32,
        update: TrackerUpdate,
    ) -> Result<Option<TrackerDayModel>, DbErr> {
        let (column, value) = match update {
            TrackerUpdate::Quran(value) => (entity::tracker_day::Column::Quran, Expr::value(value)),
            TrackerUpdate::Charity(value) => {
                (entity::tracker_day::Column::Charity, Expr::value(value))
            }
            TrackerUpdate::Fasting(value) => {
                (entity::tracker_day::Column::Fasting, Expr::value(value))
            }
            TrackerUpdate::Farz(prayer, state) => (
                farz_column(prayer),
                Expr::value(state.map(|state| state.as_str().to_string())),
            ),
            TrackerUpdate::Taraweeh(rakat) => {
                (entity::tracker_day::Column::Taraweeh, Expr::value(rakat))
            }
            TrackerUpdate::Tahajud(rakat) => {
                (entity::tracker_day::Column::Tahajud, Expr::value(rakat))
            }
        };

        let result = entity::prelude::TrackerDay::update_many()
            .col_expr(column, value)
            .col_expr(
                entity::tracker_day::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::tracker_day::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        entity::prelude::TrackerDay::find_by_id(id).one(self.db).await
    }
}

fn farz_column(prayer: Prayer) -> entity::tracker_day::Column {
    match prayer {
        Prayer::Fajr => entity::tracker_day::Column::Fajr,
        Prayer::Dhuhr => entity::tracker_day::Column::Dhuhr,
        Prayer::Asr => entity::tracker_day::Column::Asr,
        Prayer::Maghrib => entity::tracker_day::Column::Maghrib,
        Prayer::Isha => entity::tracker_day::Column::Isha,
    }
}
