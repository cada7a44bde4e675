//! Configuration management for better-shorts.
//!
//! Handles loading and saving the TOML application config with
//! cross-platform paths and atomic write operations. The shortcut and
//! settings documents live next to it but are owned by the core stores.

use crate::{
    AppError, AppResult,
    config::{DATA_DIR_NAME, ExecutionConfig, ServerConfig, StorageConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use better_shorts_core::AppPaths;
use directories::{ProjectDirs, UserDirs};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Local HTTP transport.
    #[serde(default)]
    pub server: ServerConfig,
    /// `code` shortcut gate.
    #[serde(default)]
    pub execution: ExecutionConfig,
    /// User-visible data location.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from the platform config directory, creating a
    /// default file if none exists.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `config_path`, creating a default file there
    /// if none exists.
    #[track_caller]
    #[instrument]
    pub fn load_from(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            info!("No config found, creating default");
            let config = Config::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if config.execution.allow_code {
            warn!(config_path = ?config_path, "Code shortcuts are enabled in config");
        }

        info!(config_path = ?config_path, "Configuration loaded");

        Ok(config)
    }

    /// Save configuration to `config_path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument]
    pub fn save_to(&self, config_path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(dir) = config_path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir)?;
            debug!(config_dir = ?dir, "Created config directory");
        }

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Resolve the document and data directories.
    ///
    /// Shortcut and settings files sit in the platform config directory.
    /// The data directory is `storage.data_dir` when set, otherwise
    /// `BetterShorts` inside the user's Documents folder.
    #[track_caller]
    pub fn app_paths(&self) -> AppResult<AppPaths> {
        let proj_dirs = Self::project_dirs()?;

        let data_dir = match &self.storage.data_dir {
            Some(dir) => dir.clone(),
            None => Self::default_data_dir(&proj_dirs),
        };

        Ok(AppPaths::new(proj_dirs.config_dir(), data_dir))
    }

    /// URL of the local settings API.
    pub fn server_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.server.port)
    }

    /// Platform directories for this application.
    #[track_caller]
    pub(crate) fn project_dirs() -> AppResult<ProjectDirs> {
        ProjectDirs::from("com", "better-shorts", "BetterShorts").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get project directories".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    fn default_data_dir(proj_dirs: &ProjectDirs) -> PathBuf {
        let user_dirs = UserDirs::new();

        match user_dirs
            .as_ref()
            .and_then(|dirs| dirs.document_dir().map(Path::to_path_buf))
        {
            Some(documents) => documents.join(DATA_DIR_NAME),
            None => match user_dirs {
                Some(dirs) => dirs.home_dir().join("Documents").join(DATA_DIR_NAME),
                None => proj_dirs.data_dir().to_path_buf(),
            },
        }
    }
}
