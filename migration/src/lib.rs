pub use sea_orm_migration::prelude::*;

mod m20260201_000001_user_settings;
mod m20260201_000002_tracker_day;
mod m20260201_000003_hijri_calendar_cache;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260201_000001_user_settings::Migration),
            Box::new(m20260201_000002_tracker_day::Migration),
            Box::new(m20260201_000003_hijri_calendar_cache::Migration),
        ]
    }
}
