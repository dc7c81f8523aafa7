//! Tracker day fixtures.

use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn tracker<'a>(&'a mut self) -> TrackerFixtures<'a> {
        TrackerFixtures { setup: self }
    }
}

pub struct TrackerFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> TrackerFixtures<'a> {
    /// Insert a blank tracker day.
    pub async fn insert_mock_day(
        &mut self,
        user_id: Uuid,
        year: i32,
        day_number: i32,
        date: NaiveDate,
    ) -> Result<entity::tracker_day::Model, TestError> {
        let day = mock_day(user_id, year, day_number, date);

        Ok(day.insert(&self.setup.db).await?)
    }

    /// Insert a tracker day with raw values in the farz and taraweeh columns.
    ///
    /// Used to seed rows written before farz states and rakat counts existed.
    pub async fn insert_mock_legacy_day(
        &mut self,
        user_id: Uuid,
        year: i32,
        day_number: i32,
        date: NaiveDate,
        fajr: &str,
        taraweeh: Option<i32>,
    ) -> Result<entity::tracker_day::Model, TestError> {
        let mut day = mock_day(user_id, year, day_number, date);
        day.fajr = ActiveValue::Set(Some(fajr.to_string()));
        day.taraweeh = ActiveValue::Set(taraweeh);

        Ok(day.insert(&self.setup.db).await?)
    }

    /// Insert a full 30 day calendar with day 1 on `start`.
    pub async fn insert_mock_calendar(
        &mut self,
        user_id: Uuid,
        year: i32,
        start: NaiveDate,
    ) -> Result<Vec<entity::tracker_day::Model>, TestError> {
        let mut days = Vec::with_capacity(30);

        for day_number in 1..=30 {
            let date = start
                .checked_add_days(Days::new((day_number - 1) as u64))
                .unwrap_or(start);

            days.push(
                self.insert_mock_day(user_id, year, day_number, date)
                    .await?,
            );
        }

        Ok(days)
    }
}

fn mock_day(
    user_id: Uuid,
    year: i32,
    day_number: i32,
    date: NaiveDate,
) -> entity::tracker_day::ActiveModel {
    entity::tracker_day::ActiveModel {
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
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
}
