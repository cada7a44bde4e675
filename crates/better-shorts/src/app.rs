use crate::{
    AppError, AppResult, EventLoopRebind, TrayManager, UiEvent,
    config::Config,
    installation,
    server::{AppState, ServerHandle},
};

use std::{panic::Location, path::PathBuf, sync::Arc};

use better_shorts_core::{
    Executor, Registrar, SettingsOnlyAutostart, ShortcutService, ShortcutStore,
};
use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager};
use tao::event_loop::EventLoopProxy;
use tokio::sync::Mutex;
use tracing::{error, info, instrument};
use tray_icon::menu::MenuEvent;

/// Main application state.
///
/// Lives on the main thread: the hotkey manager must stay on the thread
/// that pumps platform messages, and `TrayIcon` is `!Send`. The HTTP
/// transport runs elsewhere and reaches this state only through
/// [`UiEvent`]s.
pub struct App {
    pub(crate) registrar: Registrar<GlobalHotKeyManager>,
    pub(crate) executor: Executor,
    pub(crate) tray_manager: TrayManager,
    pub(crate) server: ServerHandle,
    pub(crate) settings_url: String,
    pub(crate) data_dir: PathBuf,
}

impl App {
    /// Load config, bind hotkeys and start the settings API.
    #[track_caller]
    #[instrument(skip(proxy, tray_manager))]
    pub(crate) fn start(
        proxy: EventLoopProxy<UiEvent>,
        tray_manager: TrayManager,
    ) -> AppResult<Self> {
        info!("BetterShorts starting");

        let config = Config::load()?;
        let paths = config.app_paths()?;

        installation::ensure_installed(&paths);

        let manager = GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyManagerFailed {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let registrar = Registrar::new(manager, ShortcutStore::new(paths.shortcuts_file()));
        let executor = Executor::new(config.execution.policy());

        let service = ShortcutService::new(
            paths.clone(),
            Arc::new(EventLoopRebind::new(proxy)),
            Arc::new(SettingsOnlyAutostart),
        );
        let state = AppState {
            service: Arc::new(Mutex::new(service)),
        };
        let server = ServerHandle::spawn(state, config.server.port)?;
        info!(addr = %server.local_addr(), "Settings API ready");

        let mut app = Self {
            registrar,
            executor,
            tray_manager,
            server,
            settings_url: config.server_url(),
            data_dir: paths.data_dir().to_path_buf(),
        };
        app.rebind();

        Ok(app)
    }

    /// Handle one event. Returns `false` when the app should exit.
    pub(crate) fn handle(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Hotkey(event) => self.on_hotkey(event),
            UiEvent::Menu(event) => return self.on_menu(event),
            UiEvent::Rebind => self.rebind(),
            UiEvent::Shutdown => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    /// Rebuild all bindings from disk and refresh the tray.
    #[instrument(skip(self))]
    fn rebind(&mut self) {
        let report = self.registrar.register_all();

        if let Err(e) = self.tray_manager.show_bound(report.bound.len()) {
            error!(error = ?e, "Failed to update tray icon");
        }
    }

    fn on_hotkey(&self, event: GlobalHotKeyEvent) {
        if let Some(record) = self.registrar.record_for_event(&event) {
            self.executor.execute(record);
        }
    }

    #[instrument(skip(self))]
    fn on_menu(&mut self, event: MenuEvent) -> bool {
        let ids = self.tray_manager.menu_ids().clone();

        if event.id == ids.settings {
            if let Err(e) = open::that_detached(&self.settings_url) {
                error!(error = ?e, "Failed to open settings");
            }
        } else if event.id == ids.data_folder {
            if let Err(e) = open::that_detached(&self.data_dir) {
                error!(error = ?e, "Failed to open data folder");
            }
        } else if event.id == ids.reload {
            info!("Reload requested from tray menu");
            self.rebind();
        } else if event.id == ids.exit {
            info!("Exit requested from tray menu");
            self.shutdown();
            return false;
        }

        true
    }

    #[instrument(skip(self))]
    fn shutdown(&mut self) {
        let released = self.registrar.unregister_all();
        self.server.shutdown();
        info!(released, "BetterShorts shut down successfully");
    }
}
