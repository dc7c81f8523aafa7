use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::prayer::Prayer;

/// Number of days in a tracker calendar.
pub const RAMADAN_DAYS: i32 = 30;

/// Rakat logged for a legacy `true` taraweeh value.
pub const LEGACY_TARAWEEH_RAKAT: i32 = 8;

/// Logged state of a farz prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FarzState {
    Mosque,
    OnTime,
    Qaza,
    Missed,
    NotApplicable,
}

impl FarzState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FarzState::Mosque => "mosque",
            FarzState::OnTime => "on_time",
            FarzState::Qaza => "qaza",
            FarzState::Missed => "missed",
            FarzState::NotApplicable => "not_applicable",
        }
    }
}

impl FromStr for FarzState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mosque" => Ok(FarzState::Mosque),
            "on_time" => Ok(FarzState::OnTime),
            "qaza" => Ok(FarzState::Qaza),
            "missed" => Ok(FarzState::Missed),
            "not_applicable" => Ok(FarzState::NotApplicable),
            other => Err(format!("unknown farz state {:?}", other)),
        }
    }
}

/// Whether a farz slot counts as prayed: mosque, on time or qaza.
pub fn is_farz_completed(state: Option<FarzState>) -> bool {
    matches!(
        state,
        Some(FarzState::Mosque | FarzState::OnTime | FarzState::Qaza)
    )
}

/// Farz value as received from clients or older rows: either a legacy checkbox or a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FarzValue {
    Legacy(bool),
    State(FarzState),
}

impl FarzValue {
    /// Legacy `true` becomes on time and legacy `false` becomes unlogged.
    pub fn normalize(self) -> Option<FarzState> {
        match self {
            FarzValue::Legacy(true) => Some(FarzState::OnTime),
            FarzValue::Legacy(false) => None,
            FarzValue::State(state) => Some(state),
        }
    }

    /// Reads a stored farz column. Unrecognised text is treated as unlogged.
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "true" => Some(FarzValue::Legacy(true)),
            "false" => Some(FarzValue::Legacy(false)),
            other => other.parse().ok().map(FarzValue::State),
        }
    }
}

/// Rakat value as received from clients: either a legacy checkbox or a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RakatValue {
    Legacy(bool),
    Count(i32),
}

impl RakatValue {
    /// Read-side normalization of a stored value.
    ///
    /// Zero, negative and legacy `false` become unlogged; legacy `true` becomes 8 rakat.
    pub fn normalize(self) -> Option<i32> {
        match self {
            RakatValue::Legacy(true) => Some(LEGACY_TARAWEEH_RAKAT),
            RakatValue::Legacy(false) => None,
            RakatValue::Count(count) if count <= 0 => None,
            RakatValue::Count(count) => Some(count),
        }
    }

    /// Write-side value of a client update.
    ///
    /// Only `0` and legacy `false` clear the field. Other counts pass through unchanged so
    /// out of range values are rejected rather than silently clearing a logged count.
    pub fn requested(self) -> Option<i32> {
        match self {
            RakatValue::Legacy(true) => Some(LEGACY_TARAWEEH_RAKAT),
            RakatValue::Legacy(false) | RakatValue::Count(0) => None,
            RakatValue::Count(count) => Some(count),
        }
    }
}

/// A tracker row with farz and rakat values normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TrackerDayDto {
    pub id: i32,
    pub year: i32,
    pub day_number: i32,
    pub date: NaiveDate,
    pub quran: bool,
    pub charity: bool,
    pub fasting: bool,
    pub fajr: Option<FarzState>,
    pub dhuhr: Option<FarzState>,
    pub asr: Option<FarzState>,
    pub maghrib: Option<FarzState>,
    pub isha: Option<FarzState>,
    pub taraweeh: Option<i32>,
    pub tahajud: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl TrackerDayDto {
    pub fn farz(&self, prayer: Prayer) -> Option<FarzState> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

fn normalize_stored_farz(raw: Option<String>) -> Option<FarzState> {
    raw.as_deref()
        .and_then(FarzValue::from_stored)
        .and_then(FarzValue::normalize)
}

fn normalize_stored_rakat(raw: Option<i32>) -> Option<i32> {
    raw.map(RakatValue::Count).and_then(RakatValue::normalize)
}

impl From<entity::tracker_day::Model> for TrackerDayDto {
    fn from(day: entity::tracker_day::Model) -> Self {
        Self {
            id: day.id,
            year: day.year,
            day_number: day.day_number,
            date: day.date,
            quran: day.quran,
            charity: day.charity,
            fasting: day.fasting,
            fajr: normalize_stored_farz(day.fajr),
            dhuhr: normalize_stored_farz(day.dhuhr),
            asr: normalize_stored_farz(day.asr),
            maghrib: normalize_stored_farz(day.maghrib),
            isha: normalize_stored_farz(day.isha),
            taraweeh: normalize_stored_rakat(day.taraweeh),
            tahajud: normalize_stored_rakat(day.tahajud),
            updated_at: day.updated_at,
        }
    }
}

/// Body of a tracker day update: exactly one field and its new value.
///
/// ```json
/// { "field": "fajr", "value": "mosque" }
/// { "field": "taraweeh", "value": 8 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum TrackerFieldUpdate {
    Quran(bool),
    Charity(bool),
    Fasting(bool),
    Fajr(Option<FarzValue>),
    Dhuhr(Option<FarzValue>),
    Asr(Option<FarzValue>),
    Maghrib(Option<FarzValue>),
    Isha(Option<FarzValue>),
    Taraweeh(Option<RakatValue>),
    Tahajud(Option<RakatValue>),
}

/// A tracker update after legacy values have been normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerUpdate {
    Quran(bool),
    Charity(bool),
    Fasting(bool),
    Farz(Prayer, Option<FarzState>),
    Taraweeh(Option<i32>),
    Tahajud(Option<i32>),
}

impl From<TrackerFieldUpdate> for TrackerUpdate {
    fn from(update: TrackerFieldUpdate) -> Self {
        let farz = |value: Option<FarzValue>| value.and_then(FarzValue::normalize);
        let rakat = |value: Option<RakatValue>| value.and_then(RakatValue::requested);

        match update {
            TrackerFieldUpdate::Quran(value) => TrackerUpdate::Quran(value),
            TrackerFieldUpdate::Charity(value) => TrackerUpdate::Charity(value),
            TrackerFieldUpdate::Fasting(value) => TrackerUpdate::Fasting(value),
            TrackerFieldUpdate::Fajr(value) => TrackerUpdate::Farz(Prayer::Fajr, farz(value)),
            TrackerFieldUpdate::Dhuhr(value) => TrackerUpdate::Farz(Prayer::Dhuhr, farz(value)),
            TrackerFieldUpdate::Asr(value) => TrackerUpdate::Farz(Prayer::Asr, farz(value)),
            TrackerFieldUpdate::Maghrib(value) => {
                TrackerUpdate::Farz(Prayer::Maghrib, farz(value))
            }
            TrackerFieldUpdate::Isha(value) => TrackerUpdate::Farz(Prayer::Isha, farz(value)),
            TrackerFieldUpdate::Taraweeh(value) => TrackerUpdate::Taraweeh(rakat(value)),
            TrackerFieldUpdate::Tahajud(value) => TrackerUpdate::Tahajud(rakat(value)),
        }
    }
}
