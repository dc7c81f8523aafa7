use sea_orm_migration::{prelude::*, schema::*};

static IDX_HIJRI_CACHE_KEY: &str = "idx-hijri_calendar_cache-key";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HijriCalendarCache::Table)
                    .if_not_exists()
                    .col(pk_auto(HijriCalendarCache::Id))
                    .col(integer(HijriCalendarCache::Year))
                    .col(integer(HijriCalendarCache::Month))
                    .col(integer(HijriCalendarCache::Day))
                    .col(double(HijriCalendarCache::Latitude))
                    .col(double(HijriCalendarCache::Longitude))
                    .col(integer(HijriCalendarCache::Method))
                    .col(json(HijriCalendarCache::Data))
                    .col(timestamp(HijriCalendarCache::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_HIJRI_CACHE_KEY)
                    .table(HijriCalendarCache::Table)
                    .col(HijriCalendarCache::Year)
                    .col(HijriCalendarCache::Month)
                    .col(HijriCalendarCache::Day)
                    .col(HijriCalendarCache::Latitude)
                    .col(HijriCalendarCache::Longitude)
                    .col(HijriCalendarCache::Method)
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
                    .name(IDX_HIJRI_CACHE_KEY)
                    .table(HijriCalendarCache::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(HijriCalendarCache::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum HijriCalendarCache {
    Table,
    Id,
    Year,
    Month,
    Day,
    Latitude,
    Longitude,
    Method,
    Data,
    CreatedAt,
}
