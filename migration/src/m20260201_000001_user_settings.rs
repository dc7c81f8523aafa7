use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSettings::Table)
                    .if_not_exists()
                    .col(pk_auto(UserSettings::Id))
                    .col(uuid_uniq(UserSettings::UserId))
                    .col(double_null(UserSettings::Latitude))
                    .col(double_null(UserSettings::Longitude))
                    .col(string_null(UserSettings::Country))
                    .col(integer(UserSettings::CalculationMethod).default(2))
                    .col(string_null(UserSettings::Timezone))
                    .col(date_null(UserSettings::RamadanOverrideStart))
                    .col(string_null(UserSettings::Gender))
                    .col(timestamp(UserSettings::CreatedAt))
                    .col(timestamp(UserSettings::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSettings::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserSettings {
    Table,
    Id,
    UserId,
    Latitude,
    Longitude,
    Country,
    CalculationMethod,
    Timezone,
    RamadanOverrideStart,
    Gender,
    CreatedAt,
    UpdatedAt,
}
