//! Link activation
//!
//! The terminal surface recognizes hyperlink text; the bridge decides which
//! pointer events actually open a browser. The qualifying modifier depends
//! on the platform: Command on macOS, Control everywhere else.

use crate::host::{Host, Platform};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Pointer button, as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// Whether the button was going down or coming up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonPhase {
    Pressed,
    Released,
}

/// Modifier keys held during the pointer event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub meta: bool,
    pub control: bool,
}

/// A pointer event over detected link text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEvent {
    pub uri: String,
    pub button: MouseButton,
    pub phase: ButtonPhase,
    pub modifiers: Modifiers,
}

/// Opens link URIs through the host browser, gated on the platform's
/// modifier key.
pub struct LinkOpener {
    platform: Platform,
    host: Arc<dyn Host>,
}

impl LinkOpener {
    pub fn new(platform: Platform, host: Arc<dyn Host>) -> Self {
        Self { platform, host }
    }

    /// A qualifying event is a primary-button release with the platform
    /// modifier held.
    pub fn qualifies(&self, event: &LinkEvent) -> bool {
        let modifier_held = match self.platform {
            Platform::MacOs => event.modifiers.meta,
            _ => event.modifiers.control,
        };

        event.phase == ButtonPhase::Released
            && event.button == MouseButton::Primary
            && modifier_held
    }

    /// Ask the host to open the link externally if the event qualifies.
    /// Returns whether a browser open was requested.
    pub async fn handle(&self, event: &LinkEvent) -> Result<bool> {
        if !self.qualifies(event) {
            return Ok(false);
        }

        info!("opening link in external browser: {}", event.uri);
        self.host.browser_open_url(&event.uri).await?;
        Ok(true)
    }
}
