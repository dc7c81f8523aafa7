//! Database model type aliases.

/// A user's settings row, one per user.
pub type UserSettingsModel = entity::user_settings::Model;

/// One day of a user's tracker calendar, unique per `(user_id, year, day_number)`.
///
/// Farz columns may hold legacy `"true"`/`"false"` text; convert through
/// [`TrackerDayDto`](crate::model::tracker::TrackerDayDto) to normalize them.
pub type TrackerDayModel = entity::tracker_day::Model;

/// A cached Gregorian to Hijri conversion keyed by date, location and method.
pub type HijriCacheModel = entity::hijri_calendar_cache::Model;
