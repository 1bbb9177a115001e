use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::sync::RwLock;

use mission_core::status::StatusRecord;
use mission_server::build_app;
use mission_server::config::{ServerConfig, StoreFileConfig};

/// In-process stand-in for the Redis REST store. Serves the `get` envelope
/// for the well-known key and counts every request it sees, so tests can
/// assert the server never writes back.
pub struct FakeStore {
    pub addr: SocketAddr,
    reply: Arc<RwLock<String>>,
    gets: Arc<AtomicUsize>,
    others: Arc<AtomicUsize>,
}

impl FakeStore {
    pub async fn start() -> Self {
        let reply = Arc::new(RwLock::new(r#"{"result":null}"#.to_string()));
        let gets = Arc::new(AtomicUsize::new(0));
        let others = Arc::new(AtomicUsize::new(0));

        let app = Router::new()
            .route("/get/{key}", {
                let reply = Arc::clone(&reply);
                let gets = Arc::clone(&gets);
                get(move || {
                    let reply = Arc::clone(&reply);
                    let gets = Arc::clone(&gets);
                    async move {
                        gets.fetch_add(1, Ordering::SeqCst);
                        (
                            [("content-type", "application/json")],
                            reply.read().await.clone(),
                        )
                    }
                })
            })
            .fallback({
                let others = Arc::clone(&others);
                move || {
                    let others = Arc::clone(&others);
                    async move {
                        others.fetch_add(1, Ordering::SeqCst);
                        StatusCode::NOT_FOUND
                    }
                }
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            reply,
            gets,
            others,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Install a record as the stored value.
    pub async fn set_record(&self, record: &StatusRecord) {
        let raw = serde_json::to_string(record).unwrap();
        let envelope = serde_json::json!({ "result": raw }).to_string();
        *self.reply.write().await = envelope;
    }

    /// Clear the stored value (pre-first-write state).
    pub async fn clear(&self) {
        *self.reply.write().await = r#"{"result":null}"#.to_string();
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    /// Requests that were not a `get` of the status key.
    pub fn other_count(&self) -> usize {
        self.others.load(Ordering::SeqCst)
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server wired to the given store endpoint.
    pub async fn with_store(store_url: &str) -> Self {
        let config = ServerConfig {
            store: StoreFileConfig {
                url: Some(store_url.to_string()),
                token: Some("test-token".to_string()),
            },
            ..ServerConfig::default()
        };
        Self::from_config(config).await
    }

    /// Start a server with no store credentials configured.
    pub async fn without_store() -> Self {
        Self::from_config(ServerConfig::default()).await
    }

    async fn from_config(config: ServerConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (app, _state) = build_app(config);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the server a moment to start accepting
        tokio::time::sleep(Duration::from_millis(20)).await;

        Self {
            addr,
            _server: handle,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
