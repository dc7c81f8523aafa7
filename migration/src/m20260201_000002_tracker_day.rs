use sea_orm_migration::{prelude::*, schema::*};

static IDX_TRACKER_DAY_USER_YEAR_DAY: &str = "idx-tracker_day-user_id-year-day_number";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackerDay::Table)
                    .if_not_exists()
                    .col(pk_auto(TrackerDay::Id))
                    .col(uuid(TrackerDay::UserId))
                    .col(integer(TrackerDay::Year))
                    .col(integer(TrackerDay::DayNumber))
                    .col(date(TrackerDay::Date))
                    .col(boolean(TrackerDay::Quran).default(false))
                    .col(boolean(TrackerDay::Charity).default(false))
                    .col(boolean(TrackerDay::Fasting).default(false))
                    .col(string_null(TrackerDay::Fajr))
                    .col(string_null(TrackerDay::Dhuhr))
                    .col(string_null(TrackerDay::Asr))
                    .col(string_null(TrackerDay::Maghrib))
                    .col(string_null(TrackerDay::Isha))
                    .col(integer_null(TrackerDay::Taraweeh))
                    .col(integer_null(TrackerDay::Tahajud))
                    .col(timestamp(TrackerDay::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRACKER_DAY_USER_YEAR_DAY)
                    .table(TrackerDay::Table)
                    .col(TrackerDay::UserId)
                    .col(TrackerDay::Year)
                    .col(TrackerDay::DayNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TRACKER_DAY_USER_YEAR_DAY)
                    .table(TrackerDay::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TrackerDay::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TrackerDay {
    Table,
    Id,
    UserId,
    Year,
    DayNumber,
    Date,
    Quran,
    Charity,
    Fasting,
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Taraweeh,
    Tahajud,
    UpdatedAt,
}
