pub use super::hijri_calendar_cache::Entity as HijriCalendarCache;
pub use super::tracker_day::Entity as TrackerDay;
pub use super::user_settings::Entity as UserSettings;
