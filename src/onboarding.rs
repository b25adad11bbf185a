//! First-launch onboarding gate
//!
//! One persisted boolean decides whether the shell mounts the welcome view
//! or the terminal view. The flag is read once per shell start; dismissing
//! the welcome view writes it and forces a full reload, which re-evaluates
//! the gate.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Client-local persistent storage for the onboarding flag.
pub trait FlagStore: Send + Sync {
    /// Whether this installation has completed first launch.
    fn is_set(&self) -> bool;

    /// Persist that first launch is complete.
    fn set(&self) -> Result<()>;
}

/// Flag store backed by a marker file in the platform data directory.
pub struct FileFlagStore {
    path: PathBuf,
}

impl FileFlagStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Marker file at the default location for this installation.
    pub fn for_installation() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("dev", "termbridge", "TermBridge")
            .context("Failed to determine data directory")?;
        Ok(Self::new(proj_dirs.data_local_dir().join("launched")))
    }
}

impl FlagStore for FileFlagStore {
    fn is_set(&self) -> bool {
        self.path.exists()
    }

    fn set(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {:?}", parent))?;
        }
        std::fs::write(&self.path, "1")
            .with_context(|| format!("Failed to write launch marker: {:?}", self.path))
    }
}

/// The first-launch decision for one shell start.
///
/// The flag is sampled at construction; a later write does not change the
/// mounted view until the shell reloads and builds a fresh gate.
pub struct OnboardingGate {
    store: Arc<dyn FlagStore>,
    completed_at_start: bool,
}

impl OnboardingGate {
    pub fn new(store: Arc<dyn FlagStore>) -> Self {
        let completed_at_start = store.is_set();
        Self {
            store,
            completed_at_start,
        }
    }

    /// Whether the welcome view mounts instead of the terminal.
    pub fn should_show_welcome(&self) -> bool {
        !self.completed_at_start
    }

    /// Persist that onboarding is done. The caller requests a reload to make
    /// the transition happen.
    pub fn complete(&self) -> Result<()> {
        info!("onboarding completed");
        self.store.set()
    }
}
