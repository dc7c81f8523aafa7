mod find;
mod insert;

use super::*;

use serde_json::json;

use crate::server::data::hijri_cache::{HijriCacheKey, HijriCacheRepository};
