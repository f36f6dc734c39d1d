//! Request pipeline
//!
//! One request is one sequential pass: acquire an isolated browser session,
//! load the page under the readiness policy, extract or capture, release
//! the session. Release happens on every exit path - the fallible body runs
//! first and the session is closed before its result propagates; `Drop`
//! covers panics.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::info;

use crate::capture::{self, TileOptions, TiledCapture};
use crate::error::ScrapeError;
use crate::extract::{self, ExtractOptions, ExtractedDocument};
use crate::navigation::{self, NavigationOptions, WaitUntil};
use crate::session::{BrowserSession, SessionConfig, Viewport};
use crate::utils::constants::{
    DEFAULT_MAX_IMAGES, DEFAULT_MAX_LINKS, DEFAULT_MAX_SHOTS, DEFAULT_VIEWPORT_HEIGHT,
    DEFAULT_VIEWPORT_WIDTH,
};

/// Per-request options, deserialized from the request body's `options` bag.
///
/// One configurable pipeline serves all endpoints; fields irrelevant to an
/// endpoint are simply unused there. `waitUntil` defaults per endpoint:
/// `domcontentloaded` for structured extraction, `networkidle` for
/// captures.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrapeOptions {
    pub wait_until: Option<WaitUntil>,
    pub max_links: usize,
    pub max_images: usize,
    pub include_text: bool,
    pub cookie_header: Option<String>,
    pub extra_headers: Option<HashMap<String, String>>,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub max_shots: usize,
    pub scroll_overlap: u32,
    pub full_page: bool,
    pub expand_clicks: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            wait_until: None,
            max_links: DEFAULT_MAX_LINKS,
            max_images: DEFAULT_MAX_IMAGES,
            include_text: false,
            cookie_header: None,
            extra_headers: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            max_shots: DEFAULT_MAX_SHOTS,
            scroll_overlap: 0,
            full_page: false,
            expand_clicks: false,
        }
    }
}

impl ScrapeOptions {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }

    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            viewport: self.viewport(),
            cookie_header: self.cookie_header.clone(),
            extra_headers: self.extra_headers.clone(),
            ..SessionConfig::default()
        }
    }

    fn navigation_options(&self, default_wait: WaitUntil) -> NavigationOptions {
        NavigationOptions {
            wait_until: self.wait_until.unwrap_or(default_wait),
            expand_clicks: self.expand_clicks,
            ..NavigationOptions::default()
        }
    }

    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            max_links: self.max_links,
            max_images: self.max_images,
            include_text: self.include_text,
        }
    }

    fn tile_options(&self) -> TileOptions {
        TileOptions {
            viewport: self.viewport(),
            max_shots: self.max_shots,
            scroll_overlap: self.scroll_overlap,
            ..TileOptions::default()
        }
    }
}

/// Structured-data mode: load the page and extract an [`ExtractedDocument`].
pub async fn scrape_structured(
    url: &str,
    opts: &ScrapeOptions,
) -> Result<ExtractedDocument, ScrapeError> {
    info!("Structured scrape requested for {url}");
    let session = BrowserSession::acquire(opts.session_config())
        .await
        .map_err(ScrapeError::Session)?;

    let result = async {
        let page = load_page(&session, url, opts, WaitUntil::DomContentLoaded).await?;
        extract::extract_document(&page, &opts.extract_options())
            .await
            .map_err(ScrapeError::Extraction)
    }
    .await;

    session.close().await;
    result
}

/// Single-shot capture mode: load the page and capture one PNG, viewport
/// or full-page.
pub async fn screenshot_single(url: &str, opts: &ScrapeOptions) -> Result<Vec<u8>, ScrapeError> {
    info!(
        "Screenshot requested for {url} (full_page={})",
        opts.full_page
    );
    let session = BrowserSession::acquire(opts.session_config())
        .await
        .map_err(ScrapeError::Session)?;

    let result = async {
        let page = load_page(&session, url, opts, WaitUntil::NetworkIdle).await?;
        capture::capture_screenshot(&page, opts.full_page)
            .await
            .map_err(ScrapeError::Extraction)
    }
    .await;

    session.close().await;
    result
}

/// Tiled capture mode: load the page and capture it as an ordered set of
/// viewport tiles.
pub async fn screenshot_tiled(
    url: &str,
    opts: &ScrapeOptions,
) -> Result<TiledCapture, ScrapeError> {
    info!("Tiled screenshot requested for {url}");
    let session = BrowserSession::acquire(opts.session_config())
        .await
        .map_err(ScrapeError::Session)?;

    let result = async {
        let page = load_page(&session, url, opts, WaitUntil::NetworkIdle).await?;
        capture::capture_tiles(&page, &opts.tile_options())
            .await
            .map_err(ScrapeError::Extraction)
    }
    .await;

    session.close().await;
    result
}

/// Shared preamble: create the context-carrying page and run the
/// load + settle + sweep sequence on it.
async fn load_page(
    session: &BrowserSession,
    url: &str,
    opts: &ScrapeOptions,
    default_wait: WaitUntil,
) -> Result<chromiumoxide::Page, ScrapeError> {
    let page = session
        .new_page(url)
        .await
        .map_err(ScrapeError::Session)?;

    navigation::load(&page, url, &opts.navigation_options(default_wait))
        .await
        .map_err(|reason| ScrapeError::Navigation {
            url: url.to_string(),
            reason,
        })?;

    Ok(page)
}
