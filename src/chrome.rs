//! Platform window chrome
//!
//! macOS hides the native title bar, so the client draws its own draggable
//! header region and views shift their layout underneath it. Fullscreen
//! removes the header; a periodic poll against the host keeps the visibility
//! in sync because the embedding does not deliver fullscreen transitions as
//! events.

use crate::host::{Host, Platform};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Parameters for the fullscreen poll.
#[derive(Debug, Clone, Copy)]
pub struct ChromeConfig {
    /// Fixed poll period. Independent of the layout synchronizer's period.
    pub poll_period: Duration,
    /// Extra delay added to every tick to offset this poller from other
    /// fixed-period pollers sharing the runtime.
    pub poll_jitter: Duration,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            poll_period: Duration::from_millis(2000),
            poll_jitter: Duration::ZERO,
        }
    }
}

/// Platform-conditional header chrome state.
///
/// Pure function of the platform: only macOS gets a header at all. The
/// visibility flag flips with fullscreen and is shared with whichever view
/// is mounted.
#[derive(Clone)]
pub struct ChromeAdapter {
    with_header: bool,
    header_visible: Arc<AtomicBool>,
}

impl ChromeAdapter {
    pub fn new(platform: Platform) -> Self {
        let with_header = platform == Platform::MacOs;
        Self {
            with_header,
            header_visible: Arc::new(AtomicBool::new(with_header)),
        }
    }

    /// Whether this platform renders the draggable header region at all.
    pub fn with_header(&self) -> bool {
        self.with_header
    }

    /// Whether the header is currently shown (false while fullscreen).
    pub fn header_visible(&self) -> bool {
        self.with_header && self.header_visible.load(Ordering::Relaxed)
    }

    /// Start the fullscreen poll. Returns `None` on platforms without a
    /// header, where there is nothing to toggle.
    ///
    /// Host failures keep the last known visibility; the next tick retries.
    pub fn spawn_fullscreen_poll(
        &self,
        host: Arc<dyn Host>,
        config: ChromeConfig,
    ) -> Option<JoinHandle<()>> {
        if !self.with_header {
            return None;
        }

        let visible = Arc::clone(&self.header_visible);
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(config.poll_period + config.poll_jitter);
            loop {
                ticker.tick().await;
                match host.window_is_fullscreen().await {
                    Ok(fullscreen) => {
                        let was_visible = visible.swap(!fullscreen, Ordering::Relaxed);
                        if was_visible == fullscreen {
                            debug!(
                                "header {} (fullscreen={})",
                                if fullscreen { "hidden" } else { "shown" },
                                fullscreen
                            );
                        }
                    }
                    Err(e) => debug!("fullscreen query failed: {}", e),
                }
            }
        }))
    }
}
