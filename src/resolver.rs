//! Startup configuration resolution
//!
//! One-shot queries against the host that gate terminal construction: the
//! surface cannot be built until platform and font are known, and the
//! transport cannot open without the connection URL. All four requests are
//! issued concurrently; there is a single resolution path for every launch.

use crate::host::Host;
use crate::theme::ThemeId;
use thiserror::Error;
use tracing::info;

pub use crate::host::Platform;

/// Default concrete font family used when the host reports an unknown
/// font identifier.
pub const DEFAULT_FONT_FAMILY: &str = "Fira Code";

/// Font family identifier returned by the host. Closed set, currently one
/// member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamilyId {
    #[default]
    FiraCode,
}

impl FontFamilyId {
    /// Decode a host-supplied identifier, falling back to the default.
    pub fn from_id(id: &str) -> Self {
        match id {
            "FiraCode" => FontFamilyId::FiraCode,
            _ => FontFamilyId::FiraCode,
        }
    }

    /// The concrete family name the identifier stands for.
    pub fn family_name(&self) -> &'static str {
        match self {
            FontFamilyId::FiraCode => DEFAULT_FONT_FAMILY,
        }
    }
}

/// Resolved font settings, immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// Concrete family name, ready for the surface's font stack.
    pub family: String,
    pub size: u16,
    pub weight: u16,
    pub bold_weight: u16,
}

/// Everything the terminal view needs before it may start rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub platform: Platform,
    pub websocket_url: String,
    pub theme: ThemeId,
    pub font: FontSpec,
}

/// Resolution failure. The session cannot start; there is no retry.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("host unreachable resolving {what}: {source}")]
    Host {
        what: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

/// Issue the four startup queries concurrently and fold the answers into a
/// `SessionConfig`. Unknown theme and font identifiers fall back to their
/// defaults; an unreachable host is a construction-time failure.
pub async fn resolve(host: &dyn Host) -> Result<SessionConfig, ResolveError> {
    let (platform, url, theme, font) = tokio::join!(
        host.platform(),
        host.websocket_url(),
        host.terminal_theme(),
        host.terminal_font_config(),
    );

    let platform = platform.map_err(|source| ResolveError::Host {
        what: "platform",
        source,
    })?;
    let websocket_url = url.map_err(|source| ResolveError::Host {
        what: "websocket url",
        source,
    })?;
    let theme = theme.map_err(|source| ResolveError::Host {
        what: "terminal theme",
        source,
    })?;
    let font = font.map_err(|source| ResolveError::Host {
        what: "terminal font",
        source,
    })?;

    let config = SessionConfig {
        platform,
        websocket_url,
        theme: ThemeId::from_id(&theme),
        font: FontSpec {
            family: FontFamilyId::from_id(&font.family).family_name().to_string(),
            size: font.size,
            weight: font.weight,
            bold_weight: font.bold_weight,
        },
    };

    info!(
        "session configuration resolved: platform={:?} theme={:?} font={} {}pt",
        config.platform, config.theme, config.font.family, config.font.size
    );

    Ok(config)
}
