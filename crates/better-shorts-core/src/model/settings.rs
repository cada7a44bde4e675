use crate::model::lenient;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version reported when no settings file exists.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// User preferences document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRecord {
    /// Mirrors the OS autostart registration.
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub auto_start: bool,

    /// Informational application version.
    #[serde(default = "default_version")]
    pub version: String,

    /// Last update check.
    #[serde(default)]
    pub last_check: Option<DateTime<Utc>>,

    /// Fields written by other front-ends, kept as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            auto_start: false,
            version: default_version(),
            last_check: None,
            extra: Map::new(),
        }
    }
}
