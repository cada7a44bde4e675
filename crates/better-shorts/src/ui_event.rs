use global_hotkey::GlobalHotKeyEvent;
use tray_icon::menu::MenuEvent;

/// Events delivered to the main thread's event loop.
///
/// The main thread owns the hotkey manager and the tray icon, so hotkey
/// presses, menu clicks and rebind requests from the HTTP thread all flow
/// through this enum.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A global hotkey was pressed or released.
    Hotkey(GlobalHotKeyEvent),
    /// A tray menu item was clicked.
    Menu(MenuEvent),
    /// The shortcut list changed on disk; rebuild every binding.
    Rebind,
    /// Leave the event loop.
    Shutdown,
}

impl UiEvent {
    /// Whether this event ends the process, with or without a running app.
    pub(crate) fn is_shutdown(&self) -> bool {
        matches!(self, UiEvent::Shutdown)
    }
}
