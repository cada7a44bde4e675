//! System tray icon with binding-count updates.
//!
//! Shows whether any hotkey is live and offers Settings, Data Folder,
//! Reload and Exit in its context menu.

use crate::{AppError, AppResult, TrayIconState};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 32;
const BORDER: u32 = 3;

/// Menu item ids of the tray context menu.
#[derive(Debug, Clone)]
pub struct TrayMenuIds {
    /// Open the settings API in the browser.
    pub settings: MenuId,
    /// Open the user data directory.
    pub data_folder: MenuId,
    /// Rebuild hotkey bindings from disk.
    pub reload: MenuId,
    /// Quit.
    pub exit: MenuId,
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    menu_ids: TrayMenuIds,
}

impl TrayManager {
    /// Create a new tray manager in the inactive state.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let menu = Menu::new();

        let settings_item = MenuItem::new("Settings", true, None);
        let data_folder_item = MenuItem::new("Open Data Folder", true, None);
        let reload_item = MenuItem::new("Reload Shortcuts", true, None);
        let exit_item = MenuItem::new("Exit", true, None);

        let menu_ids = TrayMenuIds {
            settings: settings_item.id().clone(),
            data_folder: data_folder_item.id().clone(),
            reload: reload_item.id().clone(),
            exit: exit_item.id().clone(),
        };

        let separator = PredefinedMenuItem::separator();
        let items: [&dyn IsMenuItem; 5] = [
            &settings_item,
            &data_folder_item,
            &reload_item,
            &separator,
            &exit_item,
        ];

        menu.append_items(&items)
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to build tray menu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(Self::tooltip(0))
            .with_menu(Box::new(menu))
            .with_icon(Self::render_icon(TrayIconState::Inactive)?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            menu_ids,
        })
    }

    /// Reflect the number of live bindings in icon and tooltip.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn show_bound(&mut self, bound: usize) -> AppResult<()> {
        let state = if bound > 0 {
            TrayIconState::Active
        } else {
            TrayIconState::Inactive
        };

        self.tray_icon
            .set_icon(Some(Self::render_icon(state)?))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(Self::tooltip(bound)))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(())
    }

    /// Ids of the context menu items.
    pub fn menu_ids(&self) -> &TrayMenuIds {
        &self.menu_ids
    }

    fn tooltip(bound: usize) -> String {
        match bound {
            0 => "BetterShorts - No active shortcuts".to_string(),
            1 => "BetterShorts - 1 active shortcut".to_string(),
            n => format!("BetterShorts - {} active shortcuts", n),
        }
    }

    /// Draw a keycap: light border around a filled face.
    ///
    /// Rendered in code so the binary carries no image assets.
    #[track_caller]
    fn render_icon(state: TrayIconState) -> AppResult<Icon> {
        let face: [u8; 4] = match state {
            TrayIconState::Active => [0x2d, 0x8c, 0xf0, 0xff],
            TrayIconState::Inactive => [0x70, 0x70, 0x70, 0xff],
        };
        let border: [u8; 4] = [0xf0, 0xf0, 0xf0, 0xff];

        let mut rgba = Vec::with_capacity((ICON_SIZE * ICON_SIZE * 4) as usize);
        for y in 0..ICON_SIZE {
            for x in 0..ICON_SIZE {
                let edge = x < BORDER
                    || y < BORDER
                    || x >= ICON_SIZE - BORDER
                    || y >= ICON_SIZE - BORDER;
                rgba.extend_from_slice(if edge { &border } else { &face });
            }
        }

        Icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
