use serde::Deserialize;

/// Top-level server configuration, loaded from `mission.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub web_root: String,
    pub store: StoreFileConfig,
    pub status: StatusConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            web_root: "web".to_string(),
            store: StoreFileConfig::default(),
            status: StatusConfig::default(),
        }
    }
}

/// Store section of the config file. Both parameters are required for the
/// status endpoint to work; the server still starts without them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreFileConfig {
    pub url: Option<String>,
    pub token: Option<String>,
}

/// Staleness policy knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Records older than this many seconds render as stale.
    pub stale_after_secs: u64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            stale_after_secs: mission_core::freshness::STALE_AFTER.as_secs(),
        }
    }
}

impl ServerConfig {
    /// Validate configuration, logging warnings for issues.
    pub fn validate(&self) {
        if self.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            tracing::error!(
                addr = %self.listen_addr,
                "listen_addr is not a valid socket address"
            );
            std::process::exit(1);
        }

        if self.status.stale_after_secs == 0 {
            tracing::error!("status.stale_after_secs must be > 0");
            std::process::exit(1);
        }

        if self.store.url.is_none() || self.store.token.is_none() {
            tracing::warn!(
                "Store credentials not configured — /api/status will answer 500 \
                 until MISSION_STORE_URL and MISSION_STORE_TOKEN are set"
            );
        }

        // Warn about secrets in config file (should use env vars in production)
        if self.store.token.is_some() {
            tracing::warn!(
                "store.token is set in config file — use MISSION_STORE_TOKEN env var in production"
            );
        }
    }

    /// Load config from `mission.toml` if it exists, then apply env var overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("mission.toml") {
            Ok(content) => match toml::from_str::<ServerConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from mission.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse mission.toml: {e}, using defaults");
                    ServerConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No mission.toml found, using defaults");
                ServerConfig::default()
            },
        };

        // Environment variable overrides
        if let Ok(addr) = std::env::var("MISSION_LISTEN_ADDR")
            && !addr.is_empty()
        {
            config.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("MISSION_WEB_ROOT")
            && !root.is_empty()
        {
            config.web_root = root;
        }
        if let Ok(url) = std::env::var("MISSION_STORE_URL")
            && !url.is_empty()
        {
            config.store.url = Some(url);
        }
        if let Ok(token) = std::env::var("MISSION_STORE_TOKEN")
            && !token.is_empty()
        {
            config.store.token = Some(token);
        }
        if let Ok(val) = std::env::var("MISSION_STALE_AFTER_SECS")
            && let Ok(n) = val.parse::<u64>()
        {
            config.status.stale_after_secs = n;
        }

        config
    }
}
