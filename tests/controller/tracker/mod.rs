mod get_tracker;
mod update_tracker_day;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use ramadan_tracker::server::controller::tracker::{get_tracker, update_tracker_day};

use super::*;
