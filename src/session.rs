//! Mounted terminal session
//!
//! One logical terminal: resolved configuration, theme engine, transport and
//! layout synchronizer wired to a single surface. Exactly one session exists
//! per window; it ends when the transport reaches a terminal state or the
//! view unmounts, and a replacement needs a fresh mount.

use crate::events::EventSender;
use crate::host::Host;
use crate::layout::{LayoutConfig, LayoutSynchronizer};
use crate::links::{LinkEvent, LinkOpener};
use crate::resolver::{self, FontSpec, ResolveError, SessionConfig};
use crate::surface::{Geometry, TerminalSurface};
use crate::theme::{ColorScheme, Palette, ThemeEngine};
use crate::transport::{SessionTransport, TransportState};
use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub struct TerminalSession {
    config: SessionConfig,
    theme: Arc<ThemeEngine>,
    transport: SessionTransport,
    layout: LayoutSynchronizer,
    links: LinkOpener,
}

impl TerminalSession {
    /// Resolve startup configuration and bring the session up: initial
    /// palette push, transport connect, layout poll.
    ///
    /// Resolution happens first: the surface must not render terminal
    /// content before platform and font are known, and both are part of the
    /// returned session.
    pub async fn open(
        host: Arc<dyn Host>,
        surface: Arc<dyn TerminalSurface>,
        scheme: ColorScheme,
        layout_config: LayoutConfig,
        events: EventSender,
    ) -> Result<Self, ResolveError> {
        let config = resolver::resolve(host.as_ref()).await?;

        let theme = Arc::new(ThemeEngine::new(
            config.theme,
            Arc::clone(&surface),
            scheme,
        ));

        let geometry = Arc::new(Mutex::new(surface.fit()));
        let transport =
            SessionTransport::open(config.websocket_url.clone(), Arc::clone(&surface), events);
        let layout = LayoutSynchronizer::spawn(
            Arc::clone(&host),
            Arc::clone(&surface),
            layout_config,
            geometry,
        );
        let links = LinkOpener::new(config.platform, host);

        Ok(Self {
            config,
            theme,
            transport,
            layout,
            links,
        })
    }

    /// Resolved startup configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Font settings, immutable for the session.
    pub fn font(&self) -> &FontSpec {
        &self.config.font
    }

    /// Most recently fitted geometry.
    pub fn geometry(&self) -> Geometry {
        self.layout.geometry()
    }

    /// Transport lifecycle state.
    pub fn transport_state(&self) -> TransportState {
        self.transport.state()
    }

    /// Sender for surface input chunks (keystrokes, pastes).
    pub fn input_sender(&self) -> mpsc::UnboundedSender<String> {
        self.transport.input_sender()
    }

    /// Palette that should be active for the given scheme.
    pub fn current_palette(&self, scheme: ColorScheme) -> &Palette {
        self.theme.current_palette(scheme)
    }

    /// Push the palette for a newly reported OS scheme into the surface.
    pub fn on_scheme_changed(&self, scheme: ColorScheme) {
        self.theme.apply(scheme);
    }

    /// Apply every scheme change from `rx` for the life of the session.
    pub fn watch_scheme(&self, rx: mpsc::UnboundedReceiver<ColorScheme>) -> JoinHandle<()> {
        self.theme.spawn_watcher(rx)
    }

    /// Route a pointer event over link text, opening the browser when the
    /// event qualifies.
    pub async fn handle_link_event(&self, event: &LinkEvent) -> Result<bool> {
        self.links.handle(event).await
    }
}
