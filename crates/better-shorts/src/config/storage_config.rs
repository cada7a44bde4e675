use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where user-visible files go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Override for the data directory (default: `~/Documents/BetterShorts`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}
