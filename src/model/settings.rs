use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Prayer time calculation method, numbered as Aladhan numbers them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CalculationMethod {
    Karachi,
    #[default]
    Isna,
    Mwl,
    UmmAlQura,
}

impl CalculationMethod {
    pub fn id(&self) -> i32 {
        match self {
            CalculationMethod::Karachi => 1,
            CalculationMethod::Isna => 2,
            CalculationMethod::Mwl => 3,
            CalculationMethod::UmmAlQura => 4,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(CalculationMethod::Karachi),
            2 => Some(CalculationMethod::Isna),
            3 => Some(CalculationMethod::Mwl),
            4 => Some(CalculationMethod::UmmAlQura),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalculationMethod::Karachi => "University of Islamic Sciences, Karachi",
            CalculationMethod::Isna => "Islamic Society of North America",
            CalculationMethod::Mwl => "Muslim World League",
            CalculationMethod::UmmAlQura => "Umm Al-Qura University, Makkah",
        }
    }

    /// Method most commonly used in a country, by ISO 3166-1 alpha-2 code.
    pub fn suggest_for_country(country: &str) -> Self {
        match country.trim().to_ascii_uppercase().as_str() {
            "PK" | "IN" | "BD" => CalculationMethod::Karachi,
            "SA" | "AE" | "KW" | "QA" | "BH" | "OM" | "YE" => CalculationMethod::UmmAlQura,
            _ => CalculationMethod::Isna,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSettingsDto {
    pub user_id: Uuid,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub calculation_method: i32,
    /// Display name of `calculation_method`, absent for ids outside 1..=4
    pub calculation_method_label: Option<String>,
    pub timezone: Option<String>,
    pub ramadan_override_start: Option<NaiveDate>,
    pub gender: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl From<entity::user_settings::Model> for UserSettingsDto {
    fn from(settings: entity::user_settings::Model) -> Self {
        Self {
            user_id: settings.user_id,
            latitude: settings.latitude,
            longitude: settings.longitude,
            country: settings.country,
            calculation_method: settings.calculation_method,
            calculation_method_label: CalculationMethod::from_id(settings.calculation_method)
                .map(|method| method.label().to_string()),
            timezone: settings.timezone,
            ramadan_override_start: settings.ramadan_override_start,
            gender: settings.gender,
            updated_at: settings.updated_at,
        }
    }
}

/// Partial settings update.
///
/// An absent key leaves the stored value alone, an explicit `null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserSettingsPatch {
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub latitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<f64>)]
    pub longitude: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub country: Option<Option<String>>,
    /// A `null` method resets to ISNA
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<i32>)]
    pub calculation_method: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub timezone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<NaiveDate>)]
    pub ramadan_override_start: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<Gender>)]
    pub gender: Option<Option<Gender>>,
}

// Present keys, including explicit nulls, deserialize to `Some`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
