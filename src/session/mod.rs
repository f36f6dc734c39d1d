//! Per-request browser session management
//!
//! Each request owns one isolated browser process and browsing context:
//! viewport, user agent, injected cookies, extra headers. The session is
//! released unconditionally at the end of the request, on every exit path.

pub mod cookies;

use anyhow::{Context, Result};
use chromiumoxide::Page;
use chromiumoxide::browser::Browser;
use chromiumoxide::cdp::browser_protocol::emulation::{
    SetDeviceMetricsOverrideParams, SetUserAgentOverrideParams,
};
use chromiumoxide::cdp::browser_protocol::network::{
    CookieParam, Headers, SetExtraHttpHeadersParams,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::browser_profile;
use crate::browser_setup::launch_browser;
use crate::utils::constants::{CHROME_USER_AGENT, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

/// Viewport dimensions in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Browsing-context configuration for one session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub viewport: Viewport,
    pub user_agent: String,
    /// Raw `"name=value; name2=value2"` cookie-header string
    pub cookie_header: Option<String>,
    pub extra_headers: Option<HashMap<String, String>>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            user_agent: CHROME_USER_AGENT.to_string(),
            cookie_header: None,
            extra_headers: None,
        }
    }
}

/// One isolated browser process plus its CDP handler task and profile dir
///
/// The handler MUST be aborted when the session ends or it runs forever
/// after the browser is gone; the profile directory MUST be removed after
/// Chrome has released its file handles. [`BrowserSession::close`] does both
/// in order; `Drop` is the best-effort fallback for abandoned sessions.
pub struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    profile_dir: Option<PathBuf>,
    config: SessionConfig,
}

impl BrowserSession {
    /// Launch an isolated browser for this session's context configuration.
    ///
    /// Launch failure yields an error and no partial state; nothing needs
    /// releasing if this returns `Err`.
    pub async fn acquire(config: SessionConfig) -> Result<Self> {
        let profile = browser_profile::create_unique_profile("sitesnap_chrome")
            .context("Failed to create session profile")?;
        let profile_dir = profile.into_path();

        let (browser, handler) =
            launch_browser(config.viewport, &config.user_agent, profile_dir.clone())
                .await
                .context("Failed to launch session browser")?;

        Ok(Self {
            browser,
            handler,
            profile_dir: Some(profile_dir),
            config,
        })
    }

    /// Create a page carrying this session's full browsing context.
    ///
    /// The page starts on `about:blank`; viewport metrics, user agent,
    /// cookies (scoped to `target_url`), and extra headers are applied
    /// before the caller navigates anywhere.
    pub async fn new_page(&self, target_url: &str) -> Result<Page> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .context("Failed to create page")?;

        let metrics = SetDeviceMetricsOverrideParams::builder()
            .width(i64::from(self.config.viewport.width))
            .height(i64::from(self.config.viewport.height))
            .device_scale_factor(1.0)
            .mobile(false)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build viewport params: {e}"))?;
        page.execute(metrics)
            .await
            .context("Failed to apply viewport override")?;

        page.execute(SetUserAgentOverrideParams::new(
            self.config.user_agent.clone(),
        ))
        .await
        .context("Failed to set user agent")?;

        if let Some(header) = &self.config.cookie_header {
            let records = cookies::parse_cookie_header(header, target_url);
            if !records.is_empty() {
                let params = records
                    .into_iter()
                    .map(|c| {
                        CookieParam::builder()
                            .name(c.name)
                            .value(c.value)
                            .url(c.url)
                            .build()
                            .map_err(|e| anyhow::anyhow!("Invalid cookie: {e}"))
                    })
                    .collect::<Result<Vec<_>>>()?;
                page.set_cookies(params)
                    .await
                    .context("Failed to set cookies")?;
            }
        }

        if let Some(headers) = &self.config.extra_headers
            && !headers.is_empty()
        {
            let value = serde_json::to_value(headers).context("Failed to encode extra headers")?;
            page.execute(SetExtraHttpHeadersParams::new(Headers::new(value)))
                .await
                .context("Failed to set extra headers")?;
        }

        Ok(page)
    }

    /// Gracefully release the session: close the browser, wait for the
    /// process to exit, abort the handler, remove the profile directory.
    ///
    /// Errors during teardown are logged, not propagated; the caller's
    /// pipeline result must not be masked by cleanup noise.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser cleanly: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to wait for browser exit: {e}");
        }
        self.handler.abort();
        self.remove_profile_dir();
        info!("Browser session released");
    }

    fn remove_profile_dir(&mut self) {
        if let Some(path) = self.profile_dir.take()
            && let Err(e) = std::fs::remove_dir_all(&path)
        {
            warn!(
                "Failed to remove profile directory {}: {}. Manual cleanup may be required.",
                path.display(),
                e
            );
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // Browser::drop kills the Chrome process; the handler and profile
        // dir still need explicit cleanup when close() was never reached.
        self.handler.abort();
        if self.profile_dir.is_some() {
            warn!("BrowserSession dropped without explicit close - cleaning up in Drop");
            self.remove_profile_dir();
        }
    }
}
