use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{endpoints::ayah::AyahEndpoints, error::Error, model::ApiResponse};

/// Production base URL of the Al-Quran Cloud API.
pub static DEFAULT_BASE_URL: &str = "https://api.alquran.cloud/v1";

static DEFAULT_USER_AGENT: &str = concat!("alquran-rs/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Cheaply cloneable Al-Quran Cloud client.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Verse endpoints.
    pub fn ayah(&self) -> AyahEndpoints<'_> {
        AyahEndpoints::new(self)
    }

    pub(crate) async fn get<T>(&self, path: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "Requesting Al-Quran Cloud API");

        let response = self.http.get(&url).send().await?.error_for_status()?;

        let envelope: ApiResponse<T> = response.json().await?;

        if envelope.code != 200 {
            return Err(Error::UnexpectedCode {
                code: envelope.code,
                status: envelope.status.unwrap_or_default(),
            });
        }

        envelope
            .data
            .ok_or_else(|| Error::MissingData(path.to_string()))
    }
}

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        if self.base_url.is_empty() {
            return Err(Error::Config("base URL must not be empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()?;

        Ok(Client {
            http,
            base_url: self.base_url,
        })
    }
}
