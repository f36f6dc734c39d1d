//! Chrome profile directory management
//!
//! Every browser session gets a UUID-named user-data directory so concurrent
//! requests never contend on Chrome's SingletonLock. Directories live under
//! the system temp dir and are removed when the session ends.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

/// RAII wrapper for a Chrome profile directory
///
/// Removes the directory on drop unless `into_path()` transferred ownership
/// to the session, which then cleans up after the browser process has exited.
#[derive(Debug)]
pub struct BrowserProfile {
    path: PathBuf,
    cleanup_on_drop: bool,
}

impl BrowserProfile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            cleanup_on_drop: true,
        }
    }

    /// Get reference to the profile directory path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the profile and return the path, disabling auto-cleanup
    ///
    /// The caller becomes responsible for removing the directory AFTER the
    /// browser process has released its file handles.
    #[must_use]
    pub fn into_path(mut self) -> PathBuf {
        self.cleanup_on_drop = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for BrowserProfile {
    fn drop(&mut self) {
        if self.cleanup_on_drop && self.path.exists() {
            if let Err(e) = std::fs::remove_dir_all(&self.path) {
                warn!(
                    "Failed to remove profile directory {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

/// Create a unique profile directory under the system temp dir
///
/// The UUID suffix guarantees no collision with other live sessions or with
/// leftovers from a crashed process.
pub fn create_unique_profile(prefix: &str) -> Result<BrowserProfile> {
    let path = std::env::temp_dir().join(format!("{}_{}", prefix, Uuid::new_v4()));
    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create profile directory {}", path.display()))?;
    Ok(BrowserProfile::new(path))
}
