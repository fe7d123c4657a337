//! HTTP surface for depot.
//!
//! A thin axum layer over the engine: five JSON routes bound to one shared
//! [`FileManager`](depot_ops::FileManager). Per-entry batch failures ride in
//! 200 responses; only structural errors become error statuses.

mod error;
mod handlers;
mod state;

pub use error::{ApiError, ErrorBody};
pub use state::{AppState, DepotManager};

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

/// Build the depot router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/entries", get(handlers::list_entries))
        .route("/select", post(handlers::select_entries))
        .route("/copy", post(handlers::copy))
        .route("/move", post(handlers::move_entries))
        .route("/delete", post(handlers::delete))
        .with_state(state)
}

/// Bind `addr` and serve the router until the process exits.
pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Ok(local) = listener.local_addr() {
        info!(addr = %local, "listening");
    }
    axum::serve(listener, router(state)).await
}
