//! TermBridge
//!
//! The session bridge of a desktop terminal client: pumps bytes between a
//! remote pseudo-terminal, reached over a persistent WebSocket, and an
//! embedded terminal-emulator surface.
//!
//! # Features
//! - Opens and pumps the pty transport (text and binary frames, in order)
//! - Resolves platform, theme, font and connection URL from the host once
//!   per session
//! - Keeps the remote pty size in sync with the surface on a fixed period
//! - Selects light/dark palettes and applies OS scheme changes live
//! - Gates a one-time welcome view behind a persisted first-launch flag
//! - Renders platform header chrome state, hidden while fullscreen
//!
//! The emulator widget, the window and the host process are external
//! collaborators, injected through the `TerminalSurface`, `Host` and
//! `FlagStore` traits.

pub mod app;
pub mod chrome;
pub mod config;
pub mod events;
pub mod host;
pub mod layout;
pub mod links;
pub mod onboarding;
pub mod resolver;
pub mod session;
pub mod surface;
pub mod theme;
pub mod transport;

#[cfg(test)]
pub(crate) mod testutil;

pub use app::{AppShell, View, WelcomeView};
pub use chrome::{ChromeAdapter, ChromeConfig};
pub use config::Config;
pub use events::{AppEvent, EventReceiver, EventSender};
pub use host::{ConfigHost, Host, HostFontConfig, Platform};
pub use layout::{LayoutConfig, LayoutSynchronizer};
pub use links::{ButtonPhase, LinkEvent, LinkOpener, Modifiers, MouseButton};
pub use onboarding::{FileFlagStore, FlagStore, OnboardingGate};
pub use resolver::{FontSpec, ResolveError, SessionConfig};
pub use session::TerminalSession;
pub use surface::{Geometry, TerminalSurface};
pub use theme::{ColorScheme, Palette, Rgba, ThemeEngine, ThemeId, ThemePair};
pub use transport::{SessionTransport, TransportState};
