//! Request/response operations offered to the presentation layer.
//!
//! Every operation reloads the documents it needs from disk and never
//! returns an error: failures are logged and turned into a default value or
//! an [`OperationResult`] with `success: false`. Mutations of the shortcut
//! list end with a call to the [`RebindHook`].

use crate::{
    AppPaths, SettingsRecord, SettingsStore, ShortcutRecord, ShortcutStore,
    service::{AutostartRegistrar, OperationResult, UpdateStatus},
    store::{JsonDocument, LoadOutcome},
};

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::Utc;
use tracing::{info, instrument, warn};

/// Asks the hotkey owner to rebuild every binding from disk.
pub trait RebindHook: Send + Sync {
    /// Schedule or perform a full unbind-then-rebind pass.
    fn rebind(&self);
}

/// The boundary operations over both stores.
pub struct ShortcutService {
    paths: AppPaths,
    shortcuts: ShortcutStore,
    settings: SettingsStore,
    rebind: Arc<dyn RebindHook>,
    autostart: Arc<dyn AutostartRegistrar>,
}

impl ShortcutService {
    /// Service over the documents under `paths`.
    pub fn new(
        paths: AppPaths,
        rebind: Arc<dyn RebindHook>,
        autostart: Arc<dyn AutostartRegistrar>,
    ) -> Self {
        Self {
            shortcuts: ShortcutStore::new(paths.shortcuts_file()),
            settings: SettingsStore::new(paths.settings_file()),
            paths,
            rebind,
            autostart,
        }
    }

    /// The paths this service reads and writes.
    pub fn paths(&self) -> &AppPaths {
        &self.paths
    }

    /// get-shortcuts
    #[instrument(skip(self))]
    pub fn get_shortcuts(&self) -> Vec<ShortcutRecord> {
        self.shortcuts.load()
    }

    /// save-shortcuts: replace the whole list and rebind.
    #[instrument(skip(self, list), fields(count = list.len()))]
    pub fn save_shortcuts(&self, list: &[ShortcutRecord]) -> bool {
        self.shortcuts.save(list);
        self.rebind.rebind();
        true
    }

    /// get-settings
    #[instrument(skip(self))]
    pub fn get_settings(&self) -> SettingsRecord {
        self.settings.load()
    }

    /// save-settings
    #[instrument(skip(self, settings))]
    pub fn save_settings(&self, settings: &SettingsRecord) -> bool {
        self.settings.save(settings);
        true
    }

    /// export-shortcuts: write the current list to `destination`.
    ///
    /// `None` means the user dismissed the save prompt.
    #[instrument(skip(self))]
    pub fn export_shortcuts(&self, destination: Option<&Path>) -> OperationResult {
        let Some(destination) = destination else {
            info!("Export canceled");
            return OperationResult::canceled();
        };

        let list = self.shortcuts.load();
        let document = JsonDocument::<Vec<ShortcutRecord>>::new(destination);

        match document.write(&list) {
            Ok(()) => {
                info!(path = ?destination, count = list.len(), "Shortcuts exported");
                OperationResult::exported(destination.to_path_buf())
            }
            Err(e) => {
                warn!(path = ?destination, error = %e, "Export failed");
                OperationResult::failed(e.reason())
            }
        }
    }

    /// import-shortcuts: replace the list with the contents of `source`.
    ///
    /// `None` means the user dismissed the open prompt. A file that does not
    /// parse as a shortcut list leaves the stored list untouched.
    #[instrument(skip(self))]
    pub fn import_shortcuts(&self, source: Option<&Path>) -> OperationResult {
        let Some(source) = source else {
            info!("Import canceled");
            return OperationResult::canceled();
        };

        let list = match JsonDocument::<Vec<ShortcutRecord>>::new(source).read() {
            LoadOutcome::Loaded(list) => list,
            LoadOutcome::Missing => {
                warn!(path = ?source, "Import source does not exist");
                return OperationResult::failed(format!("File not found: {}", source.display()));
            }
            LoadOutcome::Corrupt { reason } => {
                warn!(path = ?source, reason = %reason, "Import source rejected");
                return OperationResult::failed(reason);
            }
        };

        if let Err(e) = self.shortcuts.try_save(&list) {
            warn!(error = %e, "Failed to store imported shortcuts");
            return OperationResult::failed(e.reason());
        }

        self.rebind.rebind();
        info!(path = ?source, count = list.len(), "Shortcuts imported");

        OperationResult::imported(list.len())
    }

    /// reset-shortcuts: store an empty list and rebind.
    #[instrument(skip(self))]
    pub fn reset_shortcuts(&self) -> OperationResult {
        let result = match self.shortcuts.try_save(&[]) {
            Ok(()) => OperationResult::ok(),
            Err(e) => {
                warn!(error = %e, "Failed to reset shortcuts");
                OperationResult::failed(e.reason())
            }
        };

        self.rebind.rebind();
        result
    }

    /// check-updates: stamp `lastCheck` and report no update.
    #[instrument(skip(self))]
    pub fn check_updates(&self) -> UpdateStatus {
        let mut settings = self.settings.load();
        settings.last_check = Some(Utc::now());
        self.settings.save(&settings);

        UpdateStatus {
            update_available: false,
            current_version: settings.version.clone(),
            latest_version: settings.version,
            last_check: settings.last_check,
        }
    }

    /// toggle-autostart: persist the preference and hand off to the OS
    /// collaborator.
    #[instrument(skip(self))]
    pub fn toggle_autostart(&self, enabled: bool) -> OperationResult {
        let mut settings = self.settings.load();
        settings.auto_start = enabled;
        self.settings.save(&settings);

        match self.autostart.set_enabled(enabled) {
            Ok(()) => OperationResult::ok(),
            Err(e) => {
                warn!(error = %e, "Autostart change failed");
                OperationResult::failed(e.reason())
            }
        }
    }

    /// get-installation-path: the user data directory.
    pub fn installation_path(&self) -> PathBuf {
        self.paths.data_dir().to_path_buf()
    }
}
