mod get_by_user_and_year;
mod insert_missing;
mod update_date;
mod update_field;

use super::*;

use crate::{
    model::{
        prayer::Prayer,
        tracker::{FarzState, TrackerUpdate},
    },
    server::data::tracker_day::TrackerDayRepository,
};
