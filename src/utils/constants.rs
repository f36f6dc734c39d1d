//! Shared configuration constants for sitesnap
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Chrome user agent string presented by every browser session
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
/// Next update: 2025-04-29 (quarterly schedule)
///
/// Chrome releases new stable versions ~every 4 weeks.
/// Update quarterly to stay within reasonable version window.
///
/// Reference: https://chromiumdash.appspot.com/schedule
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1366;

/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 768;

/// Overall navigation deadline: 60 seconds
///
/// Covers the initial request plus the readiness wait. Slow servers and
/// heavy single-page apps routinely take 10-30s to settle; 60s leaves
/// headroom without letting a dead host pin a browser process forever.
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 60_000;

/// Settle delay after navigation completes: 3 seconds
///
/// Gives post-load scripts (hydration, analytics-gated rendering) a chance
/// to run before the lazy-load sweep starts measuring page height.
pub const POST_LOAD_SETTLE_MS: u64 = 3_000;

/// Settle delay after the lazy-load sweep: 2 seconds
///
/// Content triggered by the final scroll steps may still be streaming in
/// when the sweep's offset catches up with the page height.
pub const POST_SWEEP_SETTLE_MS: u64 = 2_000;

/// Vertical scroll step for the lazy-load sweep, in pixels
pub const SCROLL_STEP_PX: u32 = 800;

/// Pause between lazy-load scroll steps
pub const SCROLL_INTERVAL_MS: u64 = 400;

/// Hard cap on lazy-load sweep iterations
///
/// The sweep terminates when the scrolled offset reaches the page height,
/// but infinite-scroll pages grow faster than the sweep advances. 120 steps
/// at 800px covers ~96,000px of content before the cap trips.
pub const MAX_SCROLL_ITERATIONS: usize = 120;

/// Default cap on extracted links (first-N in document order)
pub const DEFAULT_MAX_LINKS: usize = 1000;

/// Default cap on extracted images (first-N in document order)
pub const DEFAULT_MAX_IMAGES: usize = 500;

/// Cap on the whitespace-collapsed full-page text, in characters
pub const MAX_TEXT_CHARS: usize = 500_000;

/// Cap on extracted block-level text entries
pub const MAX_TEXT_BLOCKS: usize = 1000;

/// Default cap on tiles per tiled capture
///
/// A hard safety bound against pathologically tall pages: 30 tiles at the
/// default 768px viewport already covers ~23,000px.
pub const DEFAULT_MAX_SHOTS: usize = 30;

/// Repaint pause before each tile screenshot
///
/// After a programmatic scroll the compositor needs a beat to paint
/// newly-visible content; capturing immediately yields blank strips.
pub const TILE_REPAINT_DELAY_MS: u64 = 600;

/// Per-element timeout for expand-sweep clicks
pub const EXPAND_CLICK_TIMEOUT_MS: u64 = 2_000;

/// Pause between expand-sweep clicks
pub const EXPAND_CLICK_PAUSE_MS: u64 = 250;

/// Affordance texts that mark a clickable element as "expands content"
///
/// Matched case-insensitively against the element's visible text.
pub const EXPAND_TEXT_PATTERNS: &[&str] =
    &["read more", "show more", "view more", "load more", "see more"];

/// Quiet window for the network-idle readiness policy
///
/// The page counts as idle once no new resource entries appear for this
/// long while `document.readyState` is `complete`.
pub const NETWORK_QUIET_WINDOW_MS: u64 = 500;

/// Poll interval for readiness checks
pub const READINESS_POLL_INTERVAL_MS: u64 = 100;

/// Default HTTP listen port (overridden by the PORT env var)
pub const DEFAULT_PORT: u16 = 3000;

/// Maximum accepted JSON request body size: 1 MiB
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
