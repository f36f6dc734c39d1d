//! Expand-click sweep
//!
//! Best-effort pass over "read more" / "show more" style affordances so
//! collapsed content is visible before extraction. Individual click
//! failures are swallowed; one unclickable element must not fail the
//! request.

use chromiumoxide::Page;
use log::debug;
use std::time::Duration;

use crate::utils::constants::{
    EXPAND_CLICK_PAUSE_MS, EXPAND_CLICK_TIMEOUT_MS, EXPAND_TEXT_PATTERNS,
};

/// Attribute used to address matched elements from Rust, one index each
const EXPAND_ATTR: &str = "data-sitesnap-expand";

/// Tag every clickable element whose visible text matches an affordance
/// pattern, returning how many were tagged.
fn tag_script() -> String {
    let patterns = serde_json::to_string(EXPAND_TEXT_PATTERNS).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
    (() => {{
        const patterns = {patterns};
        const candidates = document.querySelectorAll('a, button, [role="button"], summary');
        let tagged = 0;
        candidates.forEach(el => {{
            const text = (el.textContent || '').trim().toLowerCase();
            if (text && patterns.some(p => text.includes(p))) {{
                el.setAttribute('{EXPAND_ATTR}', String(tagged));
                tagged++;
            }}
        }});
        return tagged;
    }})()
    "#
    )
}

/// Click every affordance-text match on the page, best-effort.
///
/// Each element is scrolled into view and clicked under a per-click
/// timeout; a short pause separates clicks so expanded content can settle.
/// Returns the number of successful clicks.
pub async fn expand_collapsed_content(page: &Page) -> usize {
    let tagged = match page.evaluate(tag_script()).await {
        Ok(result) => match result.into_value::<usize>() {
            Ok(count) => count,
            Err(e) => {
                debug!("Failed to read expand-tag count: {e}");
                return 0;
            }
        },
        Err(e) => {
            debug!("Expand-tag script failed: {e}");
            return 0;
        }
    };

    if tagged == 0 {
        return 0;
    }
    debug!("Expand sweep found {tagged} matching elements");

    let click_timeout = Duration::from_millis(EXPAND_CLICK_TIMEOUT_MS);
    let mut clicked = 0usize;

    for idx in 0..tagged {
        let selector = format!("[{EXPAND_ATTR}=\"{idx}\"]");
        match tokio::time::timeout(click_timeout, click_element(page, &selector)).await {
            Ok(Ok(())) => clicked += 1,
            Ok(Err(e)) => debug!("Expand click {idx} failed: {e:#}"),
            Err(_) => debug!("Expand click {idx} timed out"),
        }
        tokio::time::sleep(Duration::from_millis(EXPAND_CLICK_PAUSE_MS)).await;
    }

    debug!("Expand sweep clicked {clicked} of {tagged} elements");
    clicked
}

async fn click_element(page: &Page, selector: &str) -> anyhow::Result<()> {
    let element = page.find_element(selector).await?;
    element.scroll_into_view().await?.click().await?;
    Ok(())
}
