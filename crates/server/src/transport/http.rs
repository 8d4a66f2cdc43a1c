//! HTTP/REST transport
//!
//! Routes:
//! - `GET /`               - service banner
//! - `GET /api/items`      - filtered and proximity search
//! - `GET /api/items/:id`  - single item

use crate::handler::{get_item, list_items, root};
use axum::Router;
use axum::routing::get;
use nearby::NearbySearch;
use std::future::Future;
use tracing::info;

/// Build the application router over a search pipeline.
pub fn router(search: NearbySearch) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/items", get(list_items))
        .route("/api/items/:id", get(get_item))
        .with_state(search)
}

/// Serve the API on `listener` until `shutdown` resolves.
pub async fn run_server(
    listener: tokio::net::TcpListener,
    search: NearbySearch,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    info!("Nearby HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(search))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
