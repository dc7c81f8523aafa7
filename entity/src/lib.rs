pub mod prelude;

pub mod hijri_calendar_cache;
pub mod tracker_day;
pub mod user_settings;
