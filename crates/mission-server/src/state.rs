use std::sync::Arc;
use std::time::Duration;

use mission_store::{StatusStore, StoreConfig};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    /// `None` until store credentials are configured; `/api/status` then
    /// answers 500 and `/readyz` reports not ready.
    pub store: Option<Arc<StatusStore>>,
    pub stale_after: Duration,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let store = match (&config.store.url, &config.store.token) {
            (Some(url), Some(token)) => {
                match StatusStore::new(StoreConfig {
                    url: url.clone(),
                    token: token.clone(),
                }) {
                    Ok(store) => Some(Arc::new(store)),
                    Err(e) => {
                        tracing::warn!(error = %e, "Store client not constructed");
                        None
                    },
                }
            },
            _ => None,
        };
        Self {
            store,
            stale_after: Duration::from_secs(config.status.stale_after_secs),
            config: Arc::new(config),
        }
    }
}
