mod lenient;
mod settings;
mod shortcut;

pub use {
    settings::{DEFAULT_VERSION, SettingsRecord},
    shortcut::{ShortcutKind, ShortcutRecord},
};
