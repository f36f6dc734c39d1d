//! Error types for the scrape pipeline
//!
//! Components report failures as `anyhow::Error` with context attached; the
//! pipeline boundary wraps them into a `ScrapeError` kind so the HTTP layer
//! can map them to responses without inspecting error strings.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Error taxonomy for a single scrape request
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Missing or malformed request input, rejected before any browser work
    #[error("{0}")]
    Validation(String),

    /// Browser launch or page creation failed
    #[error("browser session failed: {0:#}")]
    Session(anyhow::Error),

    /// Navigation timed out or the connection failed
    #[error("navigation failed for {url}: {reason:#}")]
    Navigation { url: String, reason: anyhow::Error },

    /// DOM query or script evaluation failed on a loaded page
    #[error("extraction failed: {0:#}")]
    Extraction(anyhow::Error),

    /// Anything unclassified
    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl ScrapeError {
    /// Stable kind name reported in error responses
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "ValidationError",
            Self::Session(_) => "SessionError",
            Self::Navigation { .. } => "NavigationError",
            Self::Extraction(_) => "ExtractionError",
            Self::Internal(_) => "InternalError",
        }
    }

    /// HTTP status this error maps to
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Innermost cause, when an underlying error is attached
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Validation(_) => None,
            Self::Session(e) | Self::Extraction(e) | Self::Internal(e) => {
                Some(e.root_cause().to_string())
            }
            Self::Navigation { reason, .. } => Some(reason.root_cause().to_string()),
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(msg) => json!({ "error": msg }),
            other => json!({
                "error": other.to_string(),
                "name": other.kind(),
                "message": other.detail(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
