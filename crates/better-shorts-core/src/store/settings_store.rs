use crate::{
    CoreResult, SettingsRecord,
    store::{JsonDocument, LoadOutcome},
};

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};

/// Persistent settings document.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    document: JsonDocument<SettingsRecord>,
}

impl SettingsStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path),
        }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        self.document.path()
    }

    /// Current settings, or the defaults when the file is missing or unreadable.
    #[instrument(skip(self))]
    pub fn load(&self) -> SettingsRecord {
        match self.read() {
            LoadOutcome::Loaded(settings) => settings,
            LoadOutcome::Missing => {
                debug!(path = ?self.path(), "No settings file, using defaults");
                SettingsRecord::default()
            }
            LoadOutcome::Corrupt { reason } => {
                warn!(path = ?self.path(), reason = %reason, "Settings file unreadable, using defaults");
                SettingsRecord::default()
            }
        }
    }

    /// Current settings with missing and corrupt files reported separately.
    pub fn read(&self) -> LoadOutcome<SettingsRecord> {
        self.document.read()
    }

    /// Overwrite the settings. Failures are logged only.
    #[instrument(skip(self, settings))]
    pub fn save(&self, settings: &SettingsRecord) {
        if let Err(e) = self.try_save(settings) {
            error!(error = ?e, "Failed to save settings");
        }
    }

    /// Overwrite the settings, returning any failure.
    #[track_caller]
    pub fn try_save(&self, settings: &SettingsRecord) -> CoreResult<()> {
        self.document.write(settings)?;
        info!("Settings saved");
        Ok(())
    }
}
