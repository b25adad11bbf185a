//! Terminal color themes
//!
//! A theme binds one light and one dark palette to a session. The engine
//! selects between them from the OS color-scheme signal and pushes the
//! selection into the live terminal surface.

use crate::surface::TerminalSurface;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// An RGBA color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent; the terminal background uses this so the
    /// translucent window surface shows through.
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}

/// The full color-role set driving terminal rendering for one scheme.
///
/// Sixteen ANSI slots (normal 0-7, bright 8-15) plus the surface roles.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Rgba,
    pub background: Rgba,
    pub cursor: Rgba,
    pub cursor_accent: Rgba,
    pub selection_background: Rgba,
    pub ansi: [Rgba; 16],
}

/// OS color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Default when the OS reports no preference.
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    /// Map the host's "prefers dark" signal; `None` means no preference.
    pub fn from_prefers_dark(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(true) => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

/// Theme identifier returned by the host. Closed set, currently one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeId {
    #[default]
    OneHalf,
}

impl ThemeId {
    /// Decode a host-supplied identifier. Unknown identifiers fall back to
    /// the default rather than failing.
    pub fn from_id(id: &str) -> Self {
        match id {
            "OneHalf" => ThemeId::OneHalf,
            _ => ThemeId::OneHalf,
        }
    }

    /// The light/dark palette pair for this theme.
    pub fn palettes(&self) -> ThemePair {
        match self {
            ThemeId::OneHalf => ThemePair {
                light: one_half_light(),
                dark: one_half_dark(),
            },
        }
    }
}

/// The two palettes bound to one session at configuration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    pub light: Palette,
    pub dark: Palette,
}

// Colors from https://github.com/sonph/onehalf (fluentterminal variant).
// Normal and bright ANSI slots intentionally share values.
fn one_half_dark() -> Palette {
    let black = Rgba::rgb(0x28, 0x2c, 0x34);
    let red = Rgba::rgb(0xe0, 0x6c, 0x75);
    let green = Rgba::rgb(0x98, 0xc3, 0x79);
    let yellow = Rgba::rgb(0xe5, 0xc0, 0x7b);
    let blue = Rgba::rgb(0x61, 0xaf, 0xef);
    let magenta = Rgba::rgb(0xc6, 0x78, 0xdd);
    let cyan = Rgba::rgb(0x56, 0xb6, 0xc2);
    let white = Rgba::rgb(0xdc, 0xdf, 0xe4);

    Palette {
        foreground: white,
        background: Rgba::TRANSPARENT,
        cursor: white,
        cursor_accent: black,
        selection_background: Rgba::rgb(0x47, 0x4e, 0x5d),
        ansi: [
            black, red, green, yellow, blue, magenta, cyan, white, // normal
            black, red, green, yellow, blue, magenta, cyan, white, // bright
        ],
    }
}

fn one_half_light() -> Palette {
    let black = Rgba::rgb(0x38, 0x3a, 0x42);
    let red = Rgba::rgb(0xe4, 0x56, 0x49);
    let green = Rgba::rgb(0x50, 0xa1, 0x4f);
    let yellow = Rgba::rgb(0xc1, 0x84, 0x01);
    let blue = Rgba::rgb(0x01, 0x84, 0xbc);
    let magenta = Rgba::rgb(0xa6, 0x26, 0xa4);
    let cyan = Rgba::rgb(0x09, 0x97, 0xb3);
    let white = Rgba::rgb(0xfa, 0xfa, 0xfa);

    Palette {
        foreground: black,
        background: Rgba::TRANSPARENT,
        cursor: black,
        cursor_accent: white,
        selection_background: Rgba::rgb(0xbf, 0xce, 0xff),
        ansi: [
            black, red, green, yellow, blue, magenta, cyan, white, // normal
            black, red, green, yellow, blue, magenta, cyan, white, // bright
        ],
    }
}

/// Selects the active palette for a session and keeps the live surface in
/// sync with the OS color scheme.
pub struct ThemeEngine {
    pair: ThemePair,
    surface: Arc<dyn TerminalSurface>,
}

impl ThemeEngine {
    /// Build the engine and push the palette for `initial` into the surface.
    pub fn new(theme: ThemeId, surface: Arc<dyn TerminalSurface>, initial: ColorScheme) -> Self {
        let engine = Self {
            pair: theme.palettes(),
            surface,
        };
        engine.apply(initial);
        engine
    }

    /// The palette that should be active for the given scheme.
    pub fn current_palette(&self, scheme: ColorScheme) -> &Palette {
        if scheme.is_dark() {
            &self.pair.dark
        } else {
            &self.pair.light
        }
    }

    /// Push the palette for `scheme` into the live surface.
    pub fn apply(&self, scheme: ColorScheme) {
        debug!("applying {:?} palette to terminal surface", scheme);
        self.surface.set_palette(self.current_palette(scheme));
    }

    /// Spawn a task that applies every scheme-change notification for the
    /// life of the session.
    pub fn spawn_watcher(
        self: &Arc<Self>,
        mut scheme_rx: mpsc::UnboundedReceiver<ColorScheme>,
    ) -> JoinHandle<()> {
        let engine = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(scheme) = scheme_rx.recv().await {
                engine.apply(scheme);
            }
        })
    }
}
