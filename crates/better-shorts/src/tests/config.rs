use crate::config::{Config, DEFAULT_PORT};

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// WHAT: A missing config file is created with defaults
/// WHY: First launch must not require manual setup
#[test]
fn given_no_config_when_loading_then_default_written() {
    // Given: An empty config directory
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Defaults are returned and persisted
    assert_eq!(config, Config::default());
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert!(!config.execution.allow_code);
    assert!(path.exists());
}

/// WHAT: Code execution stays disabled unless set explicitly
/// WHY: Running stored commands is an opt-in capability
#[test]
fn given_partial_config_when_loading_then_code_disabled_by_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server]\nport = 9000\n").unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.server.port, 9000);
    assert!(!config.execution.policy().allow_code);
    assert_eq!(config.storage.data_dir, None);
}

/// WHAT: Saved config loads back equal
/// WHY: Atomic save must produce a parseable file
#[test]
fn given_custom_config_when_saved_then_loads_back_equal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::default();
    config.execution.allow_code = true;
    config.execution.allowed_programs = vec!["notify-send".to_string()];
    config.storage.data_dir = Some(PathBuf::from("/srv/shorts"));

    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
    assert!(!path.with_extension("toml.tmp").exists());
}

/// WHAT: Malformed TOML is a configuration error
/// WHY: Silently replacing a user's config would discard their opt-ins
#[test]
fn given_malformed_config_when_loading_then_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server\nport = ").unwrap();

    let result = Config::load_from(&path);

    assert!(matches!(result, Err(crate::AppError::ConfigError { .. })));
}

/// WHAT: Configured data directory overrides the default
/// WHY: Users may keep exports somewhere other than Documents
#[test]
fn given_data_dir_override_when_resolving_paths_then_override_used() {
    let mut config = Config::default();
    config.storage.data_dir = Some(PathBuf::from("/srv/shorts"));

    // Project dirs need a home directory; skip quietly on systems without one.
    if let Ok(paths) = config.app_paths() {
        assert_eq!(paths.data_dir(), PathBuf::from("/srv/shorts"));
        assert!(paths.shortcuts_file().ends_with("shortcuts.json"));
    }
}
