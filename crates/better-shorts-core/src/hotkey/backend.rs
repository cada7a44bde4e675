use global_hotkey::{GlobalHotKeyManager, hotkey::HotKey};

/// Something that can claim and release OS-level hotkeys.
///
/// [`GlobalHotKeyManager`] is the production implementation. It must live on
/// the thread that pumps the platform event loop.
pub trait HotkeyBackend {
    /// Claim `hotkey`. The error string is the backend's own message.
    fn register(&mut self, hotkey: HotKey) -> Result<(), String>;

    /// Release `hotkey`.
    fn unregister(&mut self, hotkey: HotKey) -> Result<(), String>;
}

impl HotkeyBackend for GlobalHotKeyManager {
    fn register(&mut self, hotkey: HotKey) -> Result<(), String> {
        GlobalHotKeyManager::register(self, hotkey).map_err(|e| e.to_string())
    }

    fn unregister(&mut self, hotkey: HotKey) -> Result<(), String> {
        GlobalHotKeyManager::unregister(self, hotkey).map_err(|e| e.to_string())
    }
}
