//! Geometry resynchronization
//!
//! Keeps the remote pty's notion of size consistent with the visible
//! surface. Window resize events are not reliably observed through the host
//! embedding, so the synchronizer refits on a fixed period instead and
//! resends whatever the surface proposes; the push is idempotent on the
//! remote side, and a failed push is simply retried by the next tick.

use crate::host::Host;
use crate::surface::{Geometry, TerminalSurface};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Parameters for the resize poll.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Fixed resynchronization period.
    pub period: Duration,
    /// Extra delay added to every tick to offset this poller from other
    /// fixed-period pollers sharing the runtime.
    pub jitter: Duration,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            period: Duration::from_millis(2000),
            jitter: Duration::ZERO,
        }
    }
}

/// Periodic task fitting the surface and pushing the proposed geometry to
/// the remote pty. Lives as long as the session.
pub struct LayoutSynchronizer {
    current: Arc<Mutex<Geometry>>,
    _task: JoinHandle<()>,
}

impl LayoutSynchronizer {
    /// Fit once immediately, then refit and resend on every tick.
    ///
    /// `current` is the session's shared geometry slot; only this task
    /// writes it.
    pub fn spawn(
        host: Arc<dyn Host>,
        surface: Arc<dyn TerminalSurface>,
        config: LayoutConfig,
        current: Arc<Mutex<Geometry>>,
    ) -> Self {
        let slot = Arc::clone(&current);
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(config.period + config.jitter);
            loop {
                // First tick fires immediately, covering the on-load sync.
                ticker.tick().await;
                sync_once(host.as_ref(), surface.as_ref(), &slot).await;
            }
        });

        Self {
            current,
            _task: task,
        }
    }

    /// The most recently fitted geometry.
    pub fn geometry(&self) -> Geometry {
        *self.current.lock()
    }
}

async fn sync_once(host: &dyn Host, surface: &dyn TerminalSurface, slot: &Mutex<Geometry>) {
    let geometry = surface.fit();
    *slot.lock() = geometry;

    // Fire-and-forget: the next tick resends current geometry anyway.
    if let Err(e) = host.set_pty_size(geometry).await {
        debug!(
            "pty resize push failed ({}x{}): {}",
            geometry.rows(),
            geometry.cols(),
            e
        );
    }
}
