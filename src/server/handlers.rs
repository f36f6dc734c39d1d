//! HTTP request handlers
//!
//! Thin mapping between the JSON surface and the pipeline: validate the
//! body, run the requested mode, shape the response. All validation
//! happens before any browser resource is acquired.

use axum::Json;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::ScrapeError;
use crate::extract::ExtractedDocument;
use crate::pipeline::{self, ScrapeOptions};
use crate::session::Viewport;

/// Request body shared by all scrape/capture endpoints
#[derive(Debug, Deserialize)]
pub struct ScrapeBody {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub options: ScrapeOptions,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Envelope for structured-data responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeEnvelope {
    pub scraped_at: String,
    pub data: ExtractedDocument,
}

/// Envelope for tiled-capture responses
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TiledEnvelope {
    pub scraped_at: String,
    pub url: String,
    pub viewport: Viewport,
    pub total_height: u64,
    pub num_shots: usize,
    /// Base64-encoded PNG tiles, top-to-bottom
    pub images: Vec<String>,
}

/// `GET /` - health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "sitesnap service running",
    })
}

/// `POST /scrape-full` - structured page data
pub async fn scrape_full(
    Json(body): Json<ScrapeBody>,
) -> Result<Json<ScrapeEnvelope>, ScrapeError> {
    let url = require_url(&body)?;
    let data = pipeline::scrape_structured(url, &body.options)
        .await
        .inspect_err(|e| error!("scrape-full failed: {e}"))?;

    Ok(Json(ScrapeEnvelope {
        scraped_at: timestamp(),
        data,
    }))
}

/// `POST /screenshot` - single PNG capture
pub async fn screenshot(Json(body): Json<ScrapeBody>) -> Result<Response, ScrapeError> {
    let url = require_url(&body)?;
    let png = pipeline::screenshot_single(url, &body.options)
        .await
        .inspect_err(|e| error!("screenshot failed: {e}"))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// `POST /screenshot-tiled` - ordered viewport tiles
pub async fn screenshot_tiled(
    Json(body): Json<ScrapeBody>,
) -> Result<Json<TiledEnvelope>, ScrapeError> {
    let url = require_url(&body)?;
    let capture = pipeline::screenshot_tiled(url, &body.options)
        .await
        .inspect_err(|e| error!("tiled screenshot failed: {e}"))?;

    Ok(Json(TiledEnvelope {
        scraped_at: timestamp(),
        url: url.to_string(),
        viewport: capture.viewport,
        total_height: capture.total_height,
        num_shots: capture.shots.len(),
        images: capture.shots.iter().map(|s| BASE64.encode(s)).collect(),
    }))
}

/// Reject bodies without a usable `url` before any browser work.
fn require_url(body: &ScrapeBody) -> Result<&str, ScrapeError> {
    match body.url.as_deref() {
        Some(url) if !url.trim().is_empty() => Ok(url),
        _ => Err(ScrapeError::Validation("Missing \"url\"".to_string())),
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
