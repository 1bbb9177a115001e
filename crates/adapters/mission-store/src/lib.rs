//! Client for the key-value store holding the factory status record.
//!
//! The store speaks an Upstash-style Redis REST protocol: `GET {base}/get/{key}`
//! with a bearer token, answering `{"result": <string|null>}` where the string
//! is itself the JSON-serialized record. This client is strictly read-only —
//! writing the record is the producer's job.

use serde::Deserialize;

use mission_core::status::StatusRecord;

/// The single well-known key the producer writes.
pub const STATUS_KEY: &str = "factory:status";

/// Connection parameters for the REST store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub url: String,
    pub token: String,
}

impl StoreConfig {
    /// Read `MISSION_STORE_URL` / `MISSION_STORE_TOKEN` from the environment.
    pub fn from_env() -> Result<Self, StoreError> {
        let url = std::env::var("MISSION_STORE_URL")
            .ok()
            .filter(|v| !v.is_empty());
        let token = std::env::var("MISSION_STORE_TOKEN")
            .ok()
            .filter(|v| !v.is_empty());
        match (url, token) {
            (Some(url), Some(token)) => Ok(Self { url, token }),
            _ => Err(StoreError::MissingCredentials),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    MissingCredentials,
    Request(String),
    Decode(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredentials => write!(f, "store endpoint or token not configured"),
            Self::Request(m) => write!(f, "store request failed: {m}"),
            Self::Decode(m) => write!(f, "store response malformed: {m}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Envelope the REST store wraps every `get` reply in.
#[derive(Debug, Deserialize)]
struct GetResponse {
    result: Option<String>,
}

/// Read-only handle to the status record.
pub struct StatusStore {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl StatusStore {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        if config.url.is_empty() || config.token.is_empty() {
            return Err(StoreError::MissingCredentials);
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("mission-control/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StoreError::Request(e.to_string()))?;
        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            token: config.token,
            client,
        })
    }

    pub fn from_env() -> Result<Self, StoreError> {
        Self::new(StoreConfig::from_env()?)
    }

    /// Fetch the current status record. `None` means the producer has not
    /// written yet — a valid state, not an error.
    pub async fn get_status(&self) -> Result<Option<StatusRecord>, StoreError> {
        let url = format!("{}/get/{STATUS_KEY}", self.base_url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(StoreError::Request(format!(
                "store returned {}",
                resp.status()
            )));
        }

        let envelope: GetResponse = resp
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        match envelope.result {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StoreError::Decode(e.to_string())),
        }
    }
}
