mod autostart;
mod responses;
#[allow(clippy::module_inception)]
mod service;

pub use {
    autostart::{AutostartRegistrar, SettingsOnlyAutostart},
    responses::{OperationResult, UpdateStatus},
    service::{RebindHook, ShortcutService},
};
