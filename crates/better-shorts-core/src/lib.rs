//! BetterShorts Core Library
//!
//! Shortcut registry for a desktop hotkey launcher: JSON persistence of
//! shortcuts and settings, projection of enabled shortcuts onto OS global
//! hotkeys, and execution of a shortcut when its hotkey fires.
//!
//! # Example
//!
//! ```no_run
//! use better_shorts_core::{
//!     AppPaths, ExecutionPolicy, Executor, Registrar, ShortcutStore,
//! };
//! use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let paths = AppPaths::new("/tmp/better-shorts", "/tmp/better-shorts/data");
//!     let store = ShortcutStore::new(paths.shortcuts_file());
//!
//!     let mut registrar = Registrar::new(GlobalHotKeyManager::new()?, store);
//!     registrar.register_all();
//!
//!     let executor = Executor::new(ExecutionPolicy::default());
//!     if let Ok(event) = GlobalHotKeyEvent::receiver().recv() {
//!         if let Some(record) = registrar.record_for(event.id) {
//!             executor.execute(record);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod executor;
mod hotkey;
mod model;
mod paths;
mod service;
mod store;

pub use {
    error::{Result as CoreResult, ShortcutError},
    executor::{ExecutionPolicy, Executor, Launcher, SystemLauncher},
    hotkey::{Binding, BindingFailure, HotkeyBackend, Registrar, RegistrationReport},
    model::{DEFAULT_VERSION, SettingsRecord, ShortcutKind, ShortcutRecord},
    paths::AppPaths,
    service::{
        AutostartRegistrar, OperationResult, RebindHook, SettingsOnlyAutostart, ShortcutService,
        UpdateStatus,
    },
    store::{JsonDocument, LoadOutcome, SettingsStore, ShortcutStore},
};

#[cfg(test)]
mod tests;
