//! Host collaborator contract
//!
//! The embedding host owns the pseudo-terminal and the window. The bridge
//! talks to it through `Host`: independently awaitable request/response
//! calls, injected so views never reach for ambient global state.

use crate::config::Config;
use crate::surface::Geometry;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// Operating system identifier, as reported by the host.
///
/// Gates the draggable header chrome and the link-click modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
}

impl Platform {
    /// The platform this client was built for. Other unixes report Linux.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Linux,
        }
    }
}

/// Font settings as the host reports them. `family` is an identifier from a
/// closed set, resolved to a concrete family name by the config resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostFontConfig {
    pub family: String,
    pub size: u16,
    pub weight: u16,
    pub bold_weight: u16,
}

/// Request/response calls into the embedding host.
///
/// Every call is independently awaitable and non-blocking; failures surface
/// as errors to the caller, which logs and degrades rather than crashing.
#[async_trait]
pub trait Host: Send + Sync {
    /// Operating system the host is running on.
    async fn platform(&self) -> Result<Platform>;

    /// Connection URL for the pty transport.
    async fn websocket_url(&self) -> Result<String>;

    /// Selected terminal theme identifier.
    async fn terminal_theme(&self) -> Result<String>;

    /// Selected terminal font settings.
    async fn terminal_font_config(&self) -> Result<HostFontConfig>;

    /// Tell the remote pty about the surface's character-grid size.
    /// Idempotent on the host side; the acknowledgement carries no data.
    async fn set_pty_size(&self, geometry: Geometry) -> Result<()>;

    /// Whether the window is currently fullscreen.
    async fn window_is_fullscreen(&self) -> Result<bool>;

    /// Open a URL in the user's default browser. Fire-and-forget.
    async fn browser_open_url(&self, url: &str) -> Result<()>;
}

/// Host implementation backed by the client configuration file.
///
/// Answers platform from the compile-time target, theme and font from the
/// loaded `Config`, and the transport URL from its constructor. The pty
/// itself lives in the real embedding process, so `set_pty_size` is a logged
/// hook point here.
pub struct ConfigHost {
    config: Config,
    websocket_url: String,
}

impl ConfigHost {
    pub fn new(websocket_url: impl Into<String>, config: Config) -> Self {
        Self {
            config,
            websocket_url: websocket_url.into(),
        }
    }
}

#[async_trait]
impl Host for ConfigHost {
    async fn platform(&self) -> Result<Platform> {
        Ok(Platform::current())
    }

    async fn websocket_url(&self) -> Result<String> {
        Ok(self.websocket_url.clone())
    }

    async fn terminal_theme(&self) -> Result<String> {
        Ok(self.config.terminal.theme.clone())
    }

    async fn terminal_font_config(&self) -> Result<HostFontConfig> {
        let font = &self.config.terminal.font;
        Ok(HostFontConfig {
            family: font.family.clone(),
            size: font.size,
            weight: font.weight,
            bold_weight: font.weight_bold,
        })
    }

    async fn set_pty_size(&self, geometry: Geometry) -> Result<()> {
        debug!(
            "pty resize requested: {}x{}",
            geometry.rows(),
            geometry.cols()
        );
        Ok(())
    }

    async fn window_is_fullscreen(&self) -> Result<bool> {
        Ok(false)
    }

    async fn browser_open_url(&self, url: &str) -> Result<()> {
        open::that_detached(url)?;
        Ok(())
    }
}
