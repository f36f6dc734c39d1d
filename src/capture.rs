//! Visual capture: single screenshots and viewport tiles
//!
//! A tile is one viewport-sized screenshot at a fixed vertical scroll
//! offset; a tiled capture covers a tall page top-to-bottom as an ordered
//! set of standalone images, without stitching.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::page::{
    CaptureScreenshotFormat, CaptureScreenshotParams,
};
use log::debug;
use std::time::Duration;

use crate::navigation::scroll::page_scroll_height;
use crate::session::Viewport;
use crate::utils::constants::{DEFAULT_MAX_SHOTS, TILE_REPAINT_DELAY_MS};

/// Controls for tiled capture
#[derive(Debug, Clone)]
pub struct TileOptions {
    pub viewport: Viewport,
    /// Hard bound on the number of tiles
    pub max_shots: usize,
    /// Vertical overlap between consecutive tiles, in pixels
    pub scroll_overlap: u32,
    /// Repaint pause after each scroll, before capturing
    pub repaint_delay: Duration,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            max_shots: DEFAULT_MAX_SHOTS,
            scroll_overlap: 0,
            repaint_delay: Duration::from_millis(TILE_REPAINT_DELAY_MS),
        }
    }
}

/// Result of a tiled capture: tiles in top-to-bottom order plus the
/// geometry used to produce them
#[derive(Debug, Clone)]
pub struct TiledCapture {
    pub viewport: Viewport,
    pub total_height: u64,
    pub shots: Vec<Vec<u8>>,
}

/// Vertical step and tile count for covering a page of `total_height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilePlan {
    pub step: u64,
    pub count: usize,
}

/// Compute the tile plan: effective step is the viewport height minus the
/// overlap (at least 1 to guarantee progress), and the tile count is
/// `ceil(total_height / step)` bounded by `max_shots`.
#[must_use]
pub fn tile_plan(
    total_height: u64,
    viewport_height: u32,
    scroll_overlap: u32,
    max_shots: usize,
) -> TilePlan {
    let step = u64::from(viewport_height.saturating_sub(scroll_overlap)).max(1);
    let count = (total_height.div_ceil(step) as usize).min(max_shots);
    TilePlan { step, count }
}

/// Capture one PNG screenshot of the page: the current viewport, or the
/// whole page when `full_page` is set.
pub async fn capture_screenshot(page: &Page, full_page: bool) -> Result<Vec<u8>> {
    let params = CaptureScreenshotParams {
        format: Some(CaptureScreenshotFormat::Png),
        capture_beyond_viewport: Some(full_page),
        ..Default::default()
    };

    page.screenshot(params)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to capture screenshot: {e}"))
}

/// Capture a tall page as an ordered set of viewport-sized tiles.
///
/// For each tile index the page is scrolled to `index * step`, given a
/// repaint pause, and captured viewport-only. The page height is measured
/// once, after the caller's lazy-load sweep has already settled it.
pub async fn capture_tiles(page: &Page, opts: &TileOptions) -> Result<TiledCapture> {
    let total_height = page_scroll_height(page)
        .await
        .context("Failed to measure page height for tiling")?;
    let plan = tile_plan(
        total_height,
        opts.viewport.height,
        opts.scroll_overlap,
        opts.max_shots,
    );
    debug!(
        "Tiling {total_height}px page into {} shots (step {}px)",
        plan.count, plan.step
    );

    let mut shots = Vec::with_capacity(plan.count);
    for index in 0..plan.count {
        let offset = index as u64 * plan.step;
        page.evaluate(format!("window.scrollTo(0, {offset})"))
            .await
            .with_context(|| format!("Failed to scroll to tile offset {offset}"))?;
        tokio::time::sleep(opts.repaint_delay).await;

        let shot = capture_screenshot(page, false)
            .await
            .with_context(|| format!("Failed to capture tile {index}"))?;
        debug!("Captured tile {index} at offset {offset} ({} bytes)", shot.len());
        shots.push(shot);
    }

    page.evaluate("window.scrollTo(0, 0)")
        .await
        .context("Failed to scroll back to top after tiling")?;

    Ok(TiledCapture {
        viewport: opts.viewport,
        total_height,
        shots,
    })
}
