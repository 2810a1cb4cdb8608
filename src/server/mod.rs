//! server
//!
//! HTTP surface over the browse facade.
//!
//! # Routes
//!
//! - `GET /` - HTML index of every repository's tracked files
//! - `GET /repo/{repo}/file/{path}` - file content at the tip, or at an
//!   explicit commit via `?at=<id>`; markdown is rendered for display
//! - `GET /repo/{repo}/history/{path}` - JSON revision groups
//!
//! # Concurrency
//!
//! Store reads are synchronous, blocking calls, so every handler moves
//! them onto the blocking pool; async workers never block on the store.
//! The shared state is the read-only [`Browser`] facade.

mod handlers;
mod render;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::browse::Browser;

/// Build the application router.
pub fn router(browser: Arc<Browser>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/repo/:repo/file/:path", get(handlers::file))
        .route("/repo/:repo/history/:path", get(handlers::history))
        .layer(CorsLayer::permissive())
        .with_state(browser)
}

/// Bind the listen address and serve until the process is stopped.
pub async fn serve(browser: Arc<Browser>, listen: &str) -> anyhow::Result<()> {
    let app = router(browser);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .with_context(|| format!("cannot bind {}", listen))?;
    info!("listening on {}", listen);

    axum::serve(listener, app.into_make_service())
        .await
        .context("server terminated")
}
