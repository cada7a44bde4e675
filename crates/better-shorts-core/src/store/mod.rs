mod json_document;
mod settings_store;
mod shortcut_store;

pub use {
    json_document::{JsonDocument, LoadOutcome},
    settings_store::SettingsStore,
    shortcut_store::ShortcutStore,
};
