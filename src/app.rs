//! Application shell
//!
//! Decides which view mounts: the welcome view on first launch, the terminal
//! view after. There is no in-place transition between the two. Dismissing
//! the welcome view persists the onboarding flag and requests a full reload,
//! and the re-evaluated gate mounts the terminal.

use crate::chrome::{ChromeAdapter, ChromeConfig};
use crate::events::{AppEvent, EventSender};
use crate::host::{Host, Platform};
use crate::layout::LayoutConfig;
use crate::onboarding::{FlagStore, OnboardingGate};
use crate::resolver::ResolveError;
use crate::session::TerminalSession;
use crate::surface::TerminalSurface;
use crate::theme::ColorScheme;
use anyhow::Result;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Which view the shell mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Welcome,
    Terminal,
}

/// The application shell: platform chrome, onboarding gate, view mounting.
pub struct AppShell {
    host: Arc<dyn Host>,
    flag_store: Arc<dyn FlagStore>,
    platform: Platform,
    chrome: ChromeAdapter,
    gate: OnboardingGate,
    events: EventSender,
}

impl AppShell {
    /// Query the platform and evaluate the gate. Runs before anything
    /// renders; an unreachable host means the shell cannot start.
    pub async fn new(
        host: Arc<dyn Host>,
        flag_store: Arc<dyn FlagStore>,
        events: EventSender,
    ) -> Result<Self, ResolveError> {
        let platform = host
            .platform()
            .await
            .map_err(|source| ResolveError::Host {
                what: "platform",
                source,
            })?;

        let chrome = ChromeAdapter::new(platform);
        let gate = OnboardingGate::new(Arc::clone(&flag_store));

        info!("shell starting on {:?}", platform);

        Ok(Self {
            host,
            flag_store,
            platform,
            chrome,
            gate,
            events,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn chrome(&self) -> &ChromeAdapter {
        &self.chrome
    }

    /// The view the current gate decision mounts.
    pub fn active_view(&self) -> View {
        if self.gate.should_show_welcome() {
            View::Welcome
        } else {
            View::Terminal
        }
    }

    /// Re-evaluate the onboarding gate, as a full application reload would.
    pub fn reload(&mut self) {
        info!("shell reloading");
        self.gate = OnboardingGate::new(Arc::clone(&self.flag_store));
    }

    /// Mount the welcome view, starting its fullscreen poll on platforms
    /// with header chrome.
    pub fn mount_welcome(&self, config: ChromeConfig) -> WelcomeView {
        let fullscreen_poll = self
            .chrome
            .spawn_fullscreen_poll(Arc::clone(&self.host), config);

        WelcomeView {
            gate: OnboardingGate::new(Arc::clone(&self.flag_store)),
            chrome: self.chrome.clone(),
            events: self.events.clone(),
            _fullscreen_poll: fullscreen_poll,
        }
    }

    /// Mount the terminal view: resolve configuration and open a session on
    /// the given surface.
    pub async fn mount_terminal(
        &self,
        surface: Arc<dyn TerminalSurface>,
        scheme: ColorScheme,
        layout_config: LayoutConfig,
    ) -> Result<TerminalSession, ResolveError> {
        TerminalSession::open(
            Arc::clone(&self.host),
            surface,
            scheme,
            layout_config,
            self.events.clone(),
        )
        .await
    }
}

/// First-launch welcome screen state.
///
/// The only transition out is `dismiss`, which persists the onboarding flag
/// and asks the shell to reload.
pub struct WelcomeView {
    gate: OnboardingGate,
    chrome: ChromeAdapter,
    events: EventSender,
    _fullscreen_poll: Option<JoinHandle<()>>,
}

impl WelcomeView {
    /// Whether the layout shifts down to clear the header region.
    pub fn shifted_for_header(&self) -> bool {
        self.chrome.header_visible()
    }

    /// User pressed continue: persist the flag and request the reload that
    /// swaps in the terminal view.
    pub fn dismiss(&self) -> Result<()> {
        self.gate.complete()?;
        let _ = self.events.send(AppEvent::ReloadRequested);
        Ok(())
    }
}
