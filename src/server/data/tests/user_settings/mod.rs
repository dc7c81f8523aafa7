mod get_by_user_id;
mod upsert;

use super::*;

use crate::server::data::user_settings::{UserSettingsRecord, UserSettingsRepository};

fn record() -> UserSettingsRecord {
    UserSettingsRecord {
        latitude: Some(51.5072),
        longitude: Some(-0.1276),
        country: Some("GB".to_string()),
        calculation_method: 3,
        timezone: Some("Europe/London".to_string()),
        ramadan_override_start: None,
        gender: Some("female".to_string()),
    }
}
