use crate::{
    LoadOutcome, SettingsRecord, SettingsStore, ShortcutKind, ShortcutRecord, ShortcutStore,
};

use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

fn sample_list() -> Vec<ShortcutRecord> {
    vec![
        ShortcutRecord::new("Ctrl+Alt+N", ShortcutKind::Url, "https://example.com"),
        ShortcutRecord::new("Ctrl+Alt+T", ShortcutKind::App, "/usr/bin/xterm").with_enabled(false),
        ShortcutRecord::new("Ctrl+Shift+K", ShortcutKind::Code, "notify-send hi"),
    ]
}

/// WHAT: Saved shortcuts load back equal and in order
/// WHY: The file is the single source of truth for bindings
#[test]
fn given_saved_list_when_loading_then_same_list_in_order() {
    // Given: A store in an empty directory
    let dir = TempDir::new().unwrap();
    let store = ShortcutStore::new(dir.path().join("shortcuts.json"));
    let list = sample_list();

    // When: Saving then loading
    store.try_save(&list).unwrap();
    let loaded = store.load();

    // Then: The list is unchanged
    assert_eq!(loaded, list);
}

/// WHAT: An empty list survives a round-trip
/// WHY: Reset writes an empty list and must not read back as missing
#[test]
fn given_empty_list_when_saved_then_loaded_as_empty_and_present() {
    let dir = TempDir::new().unwrap();
    let store = ShortcutStore::new(dir.path().join("shortcuts.json"));

    store.try_save(&[]).unwrap();

    assert_eq!(store.read(), LoadOutcome::Loaded(Vec::new()));
    assert!(store.load().is_empty());
}

/// WHAT: Missing shortcut file loads as an empty list
/// WHY: First run has no file
#[test]
fn given_no_file_when_loading_shortcuts_then_empty_and_missing() {
    let dir = TempDir::new().unwrap();
    let store = ShortcutStore::new(dir.path().join("shortcuts.json"));

    assert!(store.load().is_empty());
    assert_eq!(store.read(), LoadOutcome::Missing);
}

/// WHAT: Corrupt shortcut file loads as empty but is reported as corrupt
/// WHY: Callers can tell damage apart from a first run
#[test]
fn given_corrupt_file_when_loading_shortcuts_then_empty_and_corrupt() {
    // Given: A file with invalid JSON
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.json");
    fs::write(&path, "[{ not json").unwrap();
    let store = ShortcutStore::new(&path);

    // When/Then: load degrades to empty, read reports corruption
    assert!(store.load().is_empty());
    assert!(store.read().is_corrupt());
}

/// WHAT: A JSON object where a list is expected counts as corrupt
/// WHY: Valid JSON of the wrong shape is as unusable as a syntax error
#[test]
fn given_object_instead_of_list_when_loading_then_treated_as_missing_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.json");
    fs::write(&path, r#"{"keys": "Ctrl+A"}"#).unwrap();
    let store = ShortcutStore::new(&path);

    assert!(store.load().is_empty());
    assert!(store.read().is_corrupt());
}

/// WHAT: Unknown record fields are written back verbatim
/// WHY: Labels and ids belong to the front-end and must not be lost
#[test]
fn given_passthrough_fields_when_round_tripped_then_preserved() {
    // Given: A file written by a front-end with extra fields
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.json");
    fs::write(
        &path,
        r#"[{"id": 7, "label": "Docs", "keys": "Ctrl+Alt+D", "type": "url", "target": "https://docs.rs", "enabled": true, "color": {"r": 1}}]"#,
    )
    .unwrap();
    let store = ShortcutStore::new(&path);

    // When: Loading and saving the list unchanged
    let list = store.load();
    store.try_save(&list).unwrap();

    // Then: All fields survive
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written[0]["id"], 7);
    assert_eq!(written[0]["label"], "Docs");
    assert_eq!(written[0]["color"]["r"], 1);
    assert_eq!(written[0]["type"], "url");
    assert_eq!(list[0].extra.len(), 3);
}

/// WHAT: Saving creates the config directory when absent
/// WHY: The first save happens before anything else creates it
#[test]
fn given_missing_parent_dir_when_saving_then_directory_created() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config").join("shortcuts.json");
    let store = ShortcutStore::new(&path);

    store.try_save(&sample_list()).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("json.tmp").exists());
}

/// WHAT: A failed save is reported by try_save and swallowed by save
/// WHY: The hotkey path must never crash on a write failure
#[test]
fn given_unwritable_target_when_saving_then_error_only_from_try_save() {
    // Given: A store whose path is an existing directory
    let dir = TempDir::new().unwrap();
    let store = ShortcutStore::new(dir.path());

    // When/Then: try_save fails, save does not panic
    assert!(store.try_save(&sample_list()).is_err());
    store.save(&sample_list());
}

/// WHAT: Missing settings file yields the documented defaults
/// WHY: First run has no settings
#[test]
fn given_no_file_when_loading_settings_then_defaults() {
    let dir = TempDir::new().unwrap();
    let store = SettingsStore::new(dir.path().join("settings.json"));

    let settings = store.load();

    assert!(!settings.auto_start);
    assert_eq!(settings.version, "1.0.0");
    assert_eq!(settings.last_check, None);
    assert_eq!(settings, SettingsRecord::default());
}

/// WHAT: Corrupt settings file behaves like a missing one
/// WHY: Same recovery path for both stores
#[test]
fn given_corrupt_settings_when_loading_then_defaults_and_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "autoStart = true").unwrap();
    let store = SettingsStore::new(&path);

    assert_eq!(store.load(), SettingsRecord::default());
    assert!(store.read().is_corrupt());
}

/// WHAT: Settings round-trip including timestamp and camelCase keys
/// WHY: The front-end reads the same file format
#[test]
fn given_settings_when_saved_then_camel_case_on_disk_and_equal_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let store = SettingsStore::new(&path);
    let settings = SettingsRecord {
        auto_start: true,
        version: "2.1.0".to_string(),
        last_check: Some(Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()),
        ..SettingsRecord::default()
    };

    store.try_save(&settings).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"autoStart\": true"));
    assert!(raw.contains("\"lastCheck\""));
    assert_eq!(store.load(), settings);
}

/// WHAT: A JavaScript ISO timestamp parses as lastCheck
/// WHY: Existing settings files carry millisecond timestamps
#[test]
fn given_js_iso_timestamp_when_loading_settings_then_parsed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{"autoStart": false, "version": "1.0.0", "lastCheck": "2025-03-01T12:00:00.000Z"}"#,
    )
    .unwrap();

    let settings = SettingsStore::new(&path).load();

    assert_eq!(
        settings.last_check,
        Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap())
    );
}

/// WHAT: Records with wrongly typed fields still load with the rest
/// WHY: One odd record must not empty the list the next save writes back
#[test]
fn given_wrongly_typed_fields_when_loading_then_every_record_kept() {
    // Given: A hand-edited file with a numeric flag and a null type
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shortcuts.json");
    fs::write(
        &path,
        r#"[
            {"keys": "Ctrl+Alt+A", "type": "url", "target": "https://a.example", "enabled": 1},
            {"keys": "Ctrl+Alt+B", "type": null, "target": "x", "enabled": true},
            {"keys": "Ctrl+Alt+C", "type": "app", "target": "/bin/c", "enabled": false}
        ]"#,
    )
    .unwrap();
    let store = ShortcutStore::new(&path);

    // When: Loading
    let outcome = store.read();
    let loaded = store.load();

    // Then: All three records survive with coerced values
    assert!(!outcome.is_corrupt());
    assert_eq!(loaded.len(), 3);
    assert!(loaded[0].enabled);
    assert_eq!(loaded[0].kind, ShortcutKind::Url);
    assert_eq!(loaded[1].kind, ShortcutKind::default());
    assert!(!loaded[2].enabled);
}
