use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reply of the export, import, reset and autostart operations.
///
/// Serializes to `{success, path?, count?, error?, canceled?}`, omitting the
/// fields that do not apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    /// Whether the operation completed.
    pub success: bool,
    /// File written by an export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Records loaded by an import.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Failure message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Set when the user dismissed the file prompt.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub canceled: bool,
}

impl OperationResult {
    /// Plain success.
    pub fn ok() -> Self {
        Self {
            success: true,
            path: None,
            count: None,
            error: None,
            canceled: false,
        }
    }

    /// Export finished at `path`.
    pub fn exported(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            ..Self::ok()
        }
    }

    /// Import loaded `count` records.
    pub fn imported(count: usize) -> Self {
        Self {
            count: Some(count),
            ..Self::ok()
        }
    }

    /// The operation failed with `error`.
    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            ..Self::ok()
        }
    }

    /// The user canceled the prompt.
    pub fn canceled() -> Self {
        Self {
            success: false,
            canceled: true,
            ..Self::ok()
        }
    }
}

/// Reply of check-updates. No update source exists, so nothing is ever newer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    /// Always `false`.
    pub update_available: bool,
    /// Version from settings.
    pub current_version: String,
    /// Same as `current_version`.
    pub latest_version: String,
    /// Time of this check.
    pub last_check: Option<DateTime<Utc>>,
}
