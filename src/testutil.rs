//! Shared test doubles for the host and surface seams.

use crate::host::{Host, HostFontConfig, Platform};
use crate::surface::{Geometry, TerminalSurface};
use crate::theme::Palette;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Configurable host double that records pty resizes and browser opens.
pub struct TestHost {
    pub platform: Platform,
    pub websocket_url: String,
    pub theme: String,
    pub font: HostFontConfig,
    pub fullscreen: AtomicBool,
    pub pty_sizes: Mutex<Vec<Geometry>>,
    pub opened_urls: Mutex<Vec<String>>,
}

impl TestHost {
    pub fn new(platform: Platform, websocket_url: impl Into<String>) -> Self {
        Self {
            platform,
            websocket_url: websocket_url.into(),
            theme: "OneHalf".to_string(),
            font: HostFontConfig {
                family: "FiraCode".to_string(),
                size: 15,
                weight: 400,
                bold_weight: 600,
            },
            fullscreen: AtomicBool::new(false),
            pty_sizes: Mutex::new(Vec::new()),
            opened_urls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Host for TestHost {
    async fn platform(&self) -> Result<Platform> {
        Ok(self.platform)
    }

    async fn websocket_url(&self) -> Result<String> {
        Ok(self.websocket_url.clone())
    }

    async fn terminal_theme(&self) -> Result<String> {
        Ok(self.theme.clone())
    }

    async fn terminal_font_config(&self) -> Result<HostFontConfig> {
        Ok(self.font.clone())
    }

    async fn set_pty_size(&self, geometry: Geometry) -> Result<()> {
        self.pty_sizes.lock().push(geometry);
        Ok(())
    }

    async fn window_is_fullscreen(&self) -> Result<bool> {
        Ok(self.fullscreen.load(Ordering::SeqCst))
    }

    async fn browser_open_url(&self, url: &str) -> Result<()> {
        self.opened_urls.lock().push(url.to_string());
        Ok(())
    }
}

/// Surface double that records writes, palette pushes and focus moves.
pub struct TestSurface {
    pub writes: Mutex<Vec<String>>,
    pub palettes: Mutex<Vec<Palette>>,
    pub focus_count: AtomicUsize,
    pub geometry: Mutex<Geometry>,
}

impl TestSurface {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            palettes: Mutex::new(Vec::new()),
            focus_count: AtomicUsize::new(0),
            geometry: Mutex::new(geometry),
        }
    }
}

impl TerminalSurface for TestSurface {
    fn write(&self, text: &str) {
        self.writes.lock().push(text.to_string());
    }

    fn set_palette(&self, palette: &Palette) {
        self.palettes.lock().push(palette.clone());
    }

    fn focus(&self) {
        self.focus_count.fetch_add(1, Ordering::SeqCst);
    }

    fn fit(&self) -> Geometry {
        *self.geometry.lock()
    }
}
