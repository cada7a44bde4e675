use crate::{
    CoreResult, ShortcutRecord,
    store::{JsonDocument, LoadOutcome},
};

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};

/// Persistent shortcut list.
///
/// Loads from disk on every call; there is no in-memory copy. Saving does
/// not touch hotkey bindings, the caller rebinds afterwards.
#[derive(Debug, Clone)]
pub struct ShortcutStore {
    document: JsonDocument<Vec<ShortcutRecord>>,
}

impl ShortcutStore {
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

    /// Current list. Missing or unreadable files yield an empty list.
    #[instrument(skip(self))]
    pub fn load(&self) -> Vec<ShortcutRecord> {
        match self.read() {
            LoadOutcome::Loaded(list) => {
                debug!(count = list.len(), "Shortcuts loaded");
                list
            }
            LoadOutcome::Missing => {
                debug!(path = ?self.path(), "No shortcut file, starting empty");
                Vec::new()
            }
            LoadOutcome::Corrupt { reason } => {
                warn!(path = ?self.path(), reason = %reason, "Shortcut file unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Current list with missing and corrupt files reported separately.
    pub fn read(&self) -> LoadOutcome<Vec<ShortcutRecord>> {
        self.document.read()
    }

    /// Overwrite the list. Failures are logged; persistence is not guaranteed.
    #[instrument(skip(self, list), fields(count = list.len()))]
    pub fn save(&self, list: &[ShortcutRecord]) {
        if let Err(e) = self.try_save(list) {
            error!(error = ?e, "Failed to save shortcuts");
        }
    }

    /// Overwrite the list, returning any failure.
    #[track_caller]
    pub fn try_save(&self, list: &[ShortcutRecord]) -> CoreResult<()> {
        self.document.write(&list.to_vec())?;
        info!(count = list.len(), "Shortcuts saved");
        Ok(())
    }
}
