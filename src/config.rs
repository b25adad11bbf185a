//! Client configuration file
//!
//! The host answers theme and font queries from this file. A missing file is
//! written out with defaults on first load; missing keys merge with defaults.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Terminal font configuration.
///
/// `family` is a font identifier, not a display name; the config resolver
/// maps identifiers to concrete family names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    #[serde(default = "default_font_family")]
    pub family: String,
    #[serde(default = "default_font_size")]
    pub size: u16,
    #[serde(default = "default_font_weight")]
    pub weight: u16,
    #[serde(default = "default_font_weight_bold")]
    pub weight_bold: u16,
}

fn default_font_family() -> String {
    "FiraCode".to_string()
}
fn default_font_size() -> u16 {
    15
}
fn default_font_weight() -> u16 {
    400
}
fn default_font_weight_bold() -> u16 {
    600
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: default_font_family(),
            size: default_font_size(),
            weight: default_font_weight(),
            weight_bold: default_font_weight_bold(),
        }
    }
}

/// Terminal appearance configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Theme identifier; unknown values fall back to the default theme.
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub font: FontConfig,
}

fn default_theme() -> String {
    "OneHalf".to_string()
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font: FontConfig::default(),
        }
    }
}

/// Initial window size in logical pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
}

fn default_window_width() -> u32 {
    600
}
fn default_window_height() -> u32 {
    410
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Main client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub terminal: TerminalConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Load configuration from the default path, writing defaults on first
    /// launch so the user has a file to edit.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "termbridge", "TermBridge")
            .context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
