use std::{str::FromStr, time::Duration};

use crate::server::{
    error::config::ConfigError, service::ramadan::cache::DEFAULT_RAMADAN_CACHE_CAPACITY,
};

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_USER_AGENT: &str = concat!("ramadan-tracker/", env!("CARGO_PKG_VERSION"));
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TRACKER_FETCH_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub aladhan_url: String,
    pub quran_url: String,
    pub user_agent: String,
    pub http_timeout: Duration,
    pub tracker_fetch_timeout: Duration,
    pub ramadan_cache_capacity: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            aladhan_url: optional("ALADHAN_URL")
                .unwrap_or_else(|| aladhan::DEFAULT_BASE_URL.to_string()),
            quran_url: optional("QURAN_URL")
                .unwrap_or_else(|| alquran::DEFAULT_BASE_URL.to_string()),
            user_agent: optional("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            http_timeout: Duration::from_secs(parse_or("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?),
            tracker_fetch_timeout: Duration::from_secs(parse_or(
                "TRACKER_FETCH_TIMEOUT_SECS",
                DEFAULT_TRACKER_FETCH_TIMEOUT_SECS,
            )?),
            ramadan_cache_capacity: parse_or(
                "RAMADAN_CACHE_CAPACITY",
                DEFAULT_RAMADAN_CACHE_CAPACITY,
            )?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_or<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(var) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
