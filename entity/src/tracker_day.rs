use sea_orm::entity::prelude::*;

/// One day of a user's Ramadan tracker, unique per `(user_id, year, day_number)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tracker_day")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Uuid,
    pub year: i32,
    pub day_number: i32,
    pub date: Date,
    pub quran: bool,
    pub charity: bool,
    pub fasting: bool,
    /// Farz prayer state, stored as text. Older rows may hold `"true"`/`"false"`.
    pub fajr: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
    pub taraweeh: Option<i32>,
    pub tahajud: Option<i32>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
