//! HTTP surface
//!
//! Route structure:
//!
//! ```text
//! GET  /                  - health check
//! POST /scrape-full       - structured page data (JSON)
//! POST /screenshot        - single capture (PNG bytes)
//! POST /screenshot-tiled  - viewport tiles (JSON, base64 images)
//! ```

pub mod handlers;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use crate::utils::constants::MAX_REQUEST_BODY_BYTES;

/// Build the service router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/scrape-full", post(handlers::scrape_full))
        .route("/screenshot", post(handlers::screenshot))
        .route("/screenshot-tiled", post(handlers::screenshot_tiled))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
}
