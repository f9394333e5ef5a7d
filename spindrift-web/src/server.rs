//! Server setup: shared state, router construction, and the serve loop.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use spindrift_core::TorrentStore;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    api_docs, create_torrent, delete_torrent, get_torrent, list_torrents, search_torrents,
    update_torrent,
};

/// Shared application state handed to every handler.
///
/// The store itself is single-threaded; all access is serialized through
/// this one lock, which is the explicit mutual-exclusion boundary for the
/// whole service. Reads take the read lock, mutations the write lock.
#[derive(Clone)]
pub struct AppState {
    /// The record store behind the service's single lock.
    pub store: Arc<RwLock<TorrentStore>>,
}

impl AppState {
    /// Wraps a store in shared state.
    pub fn new(store: TorrentStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Server bind configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Builds the application router with all routes and middleware layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_docs))
        .route(
            "/api/torrents",
            get(list_torrents).post(create_torrent).put(update_torrent),
        )
        .route(
            "/api/torrents/{id}",
            get(get_torrent).delete(delete_torrent),
        )
        .route("/api/torrents/search/{title}", get(search_torrents))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the API until the process exits.
///
/// # Errors
/// - `std::io::Error` - The address cannot be bound or the server loop fails
pub async fn run_server(config: ServerConfig, store: TorrentStore) -> std::io::Result<()> {
    let state = AppState::new(store);
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("spindrift API listening on http://{addr}");

    axum::serve(listener, app).await
}
