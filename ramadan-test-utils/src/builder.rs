//! Declarative test builder.
//!
//! Configuration methods queue work which `build()` executes in order: tables, database
//! fixtures, then mock endpoints.

use aladhan::model::{CalendarDay, GregorianToHijri, Timings, TimingsData};
use alquran::model::AyahEdition;
use chrono::NaiveDate;
use mockito::Mock;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    DbBackend, EntityTrait, Schema,
};
use uuid::Uuid;

use crate::{error::TestError, TestContext};

static IDX_TRACKER_DAY_USER_YEAR_DAY: &str = "idx-tracker_day-user_id-year-day_number";
static IDX_HIJRI_CACHE_KEY: &str = "idx-hijri_calendar_cache-key";

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,

    settings: Vec<Uuid>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    gregorian_to_hijri_endpoints: Vec<(NaiveDate, GregorianToHijri, usize)>,
    ramadan_calendar_endpoints: Vec<(i32, Vec<CalendarDay>, usize)>,
    timings_endpoints: Vec<(TimingsData, usize)>,
    ayah_endpoints: Vec<(u32, u32, Vec<AyahEdition>, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            settings: Vec::new(),
            mock_builders: Vec::new(),
            gregorian_to_hijri_endpoints: Vec::new(),
            ramadan_calendar_endpoints: Vec::new(),
            timings_endpoints: Vec::new(),
            ayah_endpoints: Vec::new(),
        }
    }

    /// Add the settings, tracker day and Hijri cache tables along with their unique indexes.
    pub fn with_tracker_tables(self) -> Self {
        let mut builder = self
            .with_table(entity::prelude::UserSettings)
            .with_table(entity::prelude::TrackerDay)
            .with_table(entity::prelude::HijriCalendarCache);

        builder.indexes.push(
            Index::create()
                .name(IDX_TRACKER_DAY_USER_YEAR_DAY)
                .table(entity::prelude::TrackerDay)
                .col(entity::tracker_day::Column::UserId)
                .col(entity::tracker_day::Column::Year)
                .col(entity::tracker_day::Column::DayNumber)
                .unique()
                .to_owned(),
        );
        builder.indexes.push(
            Index::create()
                .name(IDX_HIJRI_CACHE_KEY)
                .table(entity::prelude::HijriCalendarCache)
                .col(entity::hijri_calendar_cache::Column::Year)
                .col(entity::hijri_calendar_cache::Column::Month)
                .col(entity::hijri_calendar_cache::Column::Day)
                .col(entity::hijri_calendar_cache::Column::Latitude)
                .col(entity::hijri_calendar_cache::Column::Longitude)
                .col(entity::hijri_calendar_cache::Column::Method)
                .unique()
                .to_owned(),
        );

        builder
    }

    /// Add a single entity table, without any composite indexes.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock settings (Karachi, method 1) for `user_id` during `build()`.
    pub fn with_mock_settings(mut self, user_id: Uuid) -> Self {
        self.settings.push(user_id);
        self
    }

    /// Mock `GET /gToH` for `date`, expected to be called `expected_requests` times.
    pub fn with_gregorian_to_hijri_endpoint(
        mut self,
        date: NaiveDate,
        hijri: GregorianToHijri,
        expected_requests: usize,
    ) -> Self {
        self.gregorian_to_hijri_endpoints
            .push((date, hijri, expected_requests));
        self
    }

    /// Mock `GET /hToGCalendar/9/{hijri_year}`, expected to be called `expected_requests` times.
    pub fn with_ramadan_calendar_endpoint(
        mut self,
        hijri_year: i32,
        days: Vec<CalendarDay>,
        expected_requests: usize,
    ) -> Self {
        self.ramadan_calendar_endpoints
            .push((hijri_year, days, expected_requests));
        self
    }

    /// Mock `GET /timings/{timestamp}`, expected to be called `expected_requests` times.
    pub fn with_timings_endpoint(self, timings: Timings, expected_requests: usize) -> Self {
        let data = TimingsData {
            timings: Some(timings),
            meta: None,
        };

        self.with_timings_data_endpoint(data, expected_requests)
    }

    /// Mock `GET /timings/{timestamp}` with a full payload, including `meta`.
    pub fn with_timings_data_endpoint(mut self, data: TimingsData, expected_requests: usize) -> Self {
        self.timings_endpoints.push((data, expected_requests));
        self
    }

    /// Mock the Al-Quran Cloud verse endpoint for `surah:ayah` in the Arabic and English
    /// editions, expected to be called `expected_requests` times.
    pub fn with_ayah_endpoint(
        mut self,
        surah: u32,
        ayah: u32,
        editions: Vec<AyahEdition>,
        expected_requests: usize,
    ) -> Self {
        self.ayah_endpoints
            .push((surah, ayah, editions, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full access to the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Create the configured tables, fixtures and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::AladhanError)` - Mock Aladhan client could not be built
    /// - `Err(TestError::QuranError)` - Mock Al-Quran Cloud client could not be built
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        setup.with_tables(self.tables, self.indexes).await?;

        for user_id in self.settings {
            setup.settings().insert_mock_settings(user_id).await?;
        }

        // Custom endpoints first so tests can queue an error response ahead of a success
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (date, hijri, expected) in self.gregorian_to_hijri_endpoints {
            mocks.push(
                setup
                    .aladhan()
                    .create_gregorian_to_hijri_endpoint(date, hijri, expected),
            );
        }

        for (hijri_year, days, expected) in self.ramadan_calendar_endpoints {
            mocks.push(
                setup
                    .aladhan()
                    .create_ramadan_calendar_endpoint(hijri_year, days, expected),
            );
        }

        for (data, expected) in self.timings_endpoints {
            mocks.push(setup.aladhan().create_timings_endpoint(data, expected));
        }

        for (surah, ayah, editions, expected) in self.ayah_endpoints {
            mocks.push(
                setup
                    .quran()
                    .create_ayah_endpoint(surah, ayah, editions, expected),
            );
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
