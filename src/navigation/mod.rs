//! Navigation control: load a page under a readiness policy, then settle
//! and sweep it so lazy content is rendered before extraction.
//!
//! chromiumoxide has no Playwright-style `waitUntil`, so readiness is
//! implemented by polling the document from outside: `readyState` for the
//! minimal policy, plus a resource-count quiet window for network idle.

pub mod expand;
pub mod scroll;

use anyhow::{Context, Result};
use chromiumoxide::Page;
use log::debug;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::info;

use crate::utils::constants::{
    DEFAULT_NAVIGATION_TIMEOUT_MS, NETWORK_QUIET_WINDOW_MS, POST_LOAD_SETTLE_MS,
    POST_SWEEP_SETTLE_MS, READINESS_POLL_INTERVAL_MS,
};

pub use scroll::ScrollOptions;

/// Readiness policy: when is a navigated page "loaded enough" to proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaitUntil {
    /// Minimal DOM parsed (`document.readyState` past `loading`)
    #[default]
    DomContentLoaded,
    /// Fully loaded and no new network resources for a short quiet window
    NetworkIdle,
}

/// Options for one page load
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    pub wait_until: WaitUntil,
    /// Overall deadline for navigation plus readiness
    pub timeout: Duration,
    /// Settle delay after the readiness signal
    pub settle: Duration,
    /// Settle delay after the lazy-load sweep
    pub post_sweep_settle: Duration,
    pub scroll: ScrollOptions,
    /// Run the best-effort expand-click sweep after settling
    pub expand_clicks: bool,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            wait_until: WaitUntil::default(),
            timeout: Duration::from_millis(DEFAULT_NAVIGATION_TIMEOUT_MS),
            settle: Duration::from_millis(POST_LOAD_SETTLE_MS),
            post_sweep_settle: Duration::from_millis(POST_SWEEP_SETTLE_MS),
            scroll: ScrollOptions::default(),
            expand_clicks: false,
        }
    }
}

/// Drive `page` to `url` and bring it to a ready state:
/// navigate + readiness wait, settle, lazy-load sweep, settle again,
/// optional expand-click sweep.
///
/// Navigation timeout and connection failures surface as one error; the
/// caller attaches the URL and maps it to the navigation error kind.
pub async fn load(page: &Page, url: &str, opts: &NavigationOptions) -> Result<()> {
    info!("Navigating to {url} (policy {:?})", opts.wait_until);
    navigate(page, url, opts).await?;

    tokio::time::sleep(opts.settle).await;

    scroll::lazy_load_sweep(page, &opts.scroll)
        .await
        .context("Lazy-load sweep failed")?;

    tokio::time::sleep(opts.post_sweep_settle).await;

    if opts.expand_clicks {
        expand::expand_collapsed_content(page).await;
    }

    Ok(())
}

async fn navigate(page: &Page, url: &str, opts: &NavigationOptions) -> Result<()> {
    tokio::time::timeout(opts.timeout, async {
        page.goto(url).await.context("Navigation request failed")?;
        wait_for_ready(page, opts.wait_until).await
    })
    .await
    .map_err(|_| {
        anyhow::anyhow!(
            "Navigation timed out after {} ms",
            opts.timeout.as_millis()
        )
    })?
}

/// Poll the page until the readiness policy is satisfied.
///
/// The overall deadline is enforced by the caller's timeout wrapper, so
/// this loop only terminates on readiness.
async fn wait_for_ready(page: &Page, policy: WaitUntil) -> Result<()> {
    let poll_interval = Duration::from_millis(READINESS_POLL_INTERVAL_MS);
    let quiet_window = Duration::from_millis(NETWORK_QUIET_WINDOW_MS);
    let start = Instant::now();

    let mut last_resource_count: u64 = 0;
    let mut last_change = Instant::now();

    loop {
        let ready_state: String = page
            .evaluate("document.readyState")
            .await
            .context("Failed to check readyState")?
            .into_value()
            .map_err(|e| anyhow::anyhow!("Failed to read readyState: {e}"))?;

        match policy {
            WaitUntil::DomContentLoaded => {
                if ready_state != "loading" {
                    debug!(
                        "DOM ready after {:.2}s (readyState {ready_state})",
                        start.elapsed().as_secs_f64()
                    );
                    return Ok(());
                }
            }
            WaitUntil::NetworkIdle => {
                let resource_count: u64 = page
                    .evaluate("performance.getEntriesByType('resource').length")
                    .await
                    .context("Failed to count resource entries")?
                    .into_value()
                    .map_err(|e| anyhow::anyhow!("Failed to read resource count: {e}"))?;

                if resource_count != last_resource_count {
                    last_resource_count = resource_count;
                    last_change = Instant::now();
                }

                if ready_state == "complete" && last_change.elapsed() >= quiet_window {
                    debug!(
                        "Network idle after {:.2}s ({last_resource_count} resources)",
                        start.elapsed().as_secs_f64()
                    );
                    return Ok(());
                }
            }
        }

        tokio::time::sleep(poll_interval).await;
    }
}
