use crate::{CoreResult, ShortcutError};

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

const SHORTCUTS_FILE: &str = "shortcuts.json";
const SETTINGS_FILE: &str = "settings.json";
const EXPORT_FILE: &str = "shortcuts-export.json";

/// Filesystem locations used by the application.
///
/// `config_dir` is application-private and holds the two JSON documents.
/// `data_dir` is user-visible and is the default target for exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl AppPaths {
    /// Create a path set from explicit directories.
    pub fn new(config_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Application-private configuration directory.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// User-visible data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Backing file of the shortcut list.
    pub fn shortcuts_file(&self) -> PathBuf {
        self.config_dir.join(SHORTCUTS_FILE)
    }

    /// Backing file of the settings document.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Where an export lands when the user accepts the suggested location.
    pub fn default_export_path(&self) -> PathBuf {
        self.data_dir.join(EXPORT_FILE)
    }

    /// Create the data directory if it does not exist yet.
    ///
    /// Returns `true` when the directory was created by this call.
    #[track_caller]
    #[instrument(skip(self), fields(data_dir = ?self.data_dir))]
    pub fn ensure_data_dir(&self) -> CoreResult<bool> {
        if self.data_dir.is_dir() {
            debug!("Data directory already present");
            return Ok(false);
        }

        fs::create_dir_all(&self.data_dir).map_err(|e| ShortcutError::io(&self.data_dir, e))?;
        info!("Data directory created");

        Ok(true)
    }
}
