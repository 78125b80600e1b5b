//! Router construction and server entry point

use std::sync::{Arc, RwLock};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

use arbor_core::Tree;

use crate::handlers;

/// Maximum request body size (1MB)
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// Shared application state
///
/// The tree itself is single-threaded; the lock serializes access from
/// concurrent request handlers. Guards are never held across await points.
pub struct AppState {
    pub tree: RwLock<Tree>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tree: RwLock::new(Tree::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::api_root))
        .route("/health", get(handlers::health))
        .route("/nodes/root", get(handlers::get_root))
        .route(
            "/nodes/:node_id",
            get(handlers::get_node)
                .patch(handlers::update_node)
                .delete(handlers::delete_node),
        )
        .route(
            "/nodes/:node_id/children",
            get(handlers::get_children).post(handlers::create_child),
        )
        .route("/nodes/:node_id/expand", post(handlers::expand_node))
        .route("/nodes/:node_id/collapse", post(handlers::collapse_node))
        .route("/nodes/:node_id/move", post(handlers::move_node))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
}

/// Run the HTTP server until shutdown
pub async fn run_server(addr: &str) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Arbor API server listening on {}", addr);
    tracing::info!("  Root node: http://{}/nodes/root", addr);
    tracing::info!("  Health check: http://{}/health", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
