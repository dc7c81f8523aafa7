//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with state built from the test context, then the response
//! status and JSON body are checked.

mod ayah;
mod hijri;
mod prayer;
mod ramadan;
mod stats;
mod tracker;

use axum::{body::to_bytes, http::StatusCode, response::Response};
use chrono::NaiveDate;
use ramadan_test_utils::prelude::*;
use ramadan_tracker::server::model::app::AppState;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

async fn json_body(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
