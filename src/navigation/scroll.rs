//! Lazy-load scroll sweep
//!
//! Scrolling the viewport down in fixed steps forces deferred and
//! viewport-triggered content to render before extraction or capture.
//! The page height is re-measured every iteration because triggered
//! content grows it.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use log::{debug, warn};
use std::time::Duration;

use crate::utils::constants::{MAX_SCROLL_ITERATIONS, SCROLL_INTERVAL_MS, SCROLL_STEP_PX};

/// Sweep parameters
#[derive(Debug, Clone)]
pub struct ScrollOptions {
    pub step_px: u32,
    pub interval: Duration,
    /// Hard iteration cap guarding against pages that grow faster than the
    /// sweep advances
    pub max_iterations: usize,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            step_px: SCROLL_STEP_PX,
            interval: Duration::from_millis(SCROLL_INTERVAL_MS),
            max_iterations: MAX_SCROLL_ITERATIONS,
        }
    }
}

/// Current scrollable height of the page in CSS pixels
pub async fn page_scroll_height(page: &Page) -> Result<u64> {
    let height: f64 = page
        .evaluate(
            "Math.max(document.body ? document.body.scrollHeight : 0, document.documentElement.scrollHeight)",
        )
        .await
        .context("Failed to measure page height")?
        .into_value()
        .map_err(|e| anyhow::anyhow!("Failed to read page height: {e}"))?;
    Ok(height.max(0.0) as u64)
}

/// Scroll to the bottom of the page in fixed steps, waiting between steps.
///
/// The loop converges: the scrolled offset strictly increases each step
/// while height growth is bounded by real content; `max_iterations` guards
/// the pathological case. Scrolls back to the top before returning so
/// extraction and capture start from a known position.
///
/// Returns the final measured page height.
pub async fn lazy_load_sweep(page: &Page, opts: &ScrollOptions) -> Result<u64> {
    let mut offset: u64 = 0;
    let mut height = page_scroll_height(page).await?;
    let mut iterations = 0usize;

    while offset < height {
        if iterations >= opts.max_iterations {
            warn!(
                "Lazy-load sweep hit iteration cap ({}) at offset {offset} of {height}px",
                opts.max_iterations
            );
            break;
        }

        page.evaluate(format!("window.scrollBy(0, {})", opts.step_px))
            .await
            .context("Failed to scroll page")?;
        offset += u64::from(opts.step_px);
        iterations += 1;

        tokio::time::sleep(opts.interval).await;
        height = page_scroll_height(page).await?;
    }

    debug!("Lazy-load sweep finished after {iterations} steps, page height {height}px");

    page.evaluate("window.scrollTo(0, 0)")
        .await
        .context("Failed to scroll back to top")?;

    Ok(height)
}
