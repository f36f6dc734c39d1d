pub mod browser_profile;
pub mod browser_setup;
pub mod capture;
pub mod error;
pub mod extract;
pub mod navigation;
pub mod pipeline;
pub mod server;
pub mod session;
pub mod utils;

pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use capture::{TileOptions, TilePlan, TiledCapture, tile_plan};
pub use error::ScrapeError;
pub use extract::{
    ExtractOptions, ExtractedDocument, JsonLd, PageText, Section, build_sections, parse_json_ld,
};
pub use navigation::{NavigationOptions, WaitUntil};
pub use pipeline::ScrapeOptions;
pub use session::{BrowserSession, SessionConfig, Viewport};
pub use session::cookies::{CookieRecord, parse_cookie_header};

/// Scrape structured page data from a URL with default options.
pub async fn scrape(url: &str) -> Result<ExtractedDocument, ScrapeError> {
    pipeline::scrape_structured(url, &ScrapeOptions::default()).await
}

/// Capture a single screenshot of a URL with default options.
pub async fn screenshot(url: &str) -> Result<Vec<u8>, ScrapeError> {
    pipeline::screenshot_single(url, &ScrapeOptions::default()).await
}
