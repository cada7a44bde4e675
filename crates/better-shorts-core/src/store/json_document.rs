//! Whole-document JSON persistence.
//!
//! A document is read in full and replaced in full. Writes go through a
//! temporary sibling file that is renamed over the target, so a crash mid
//! write leaves the previous version intact.

use crate::{CoreResult, ShortcutError};

use std::{
    fs,
    io::{ErrorKind, Write},
    marker::PhantomData,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

/// Result of reading a document from disk.
///
/// Keeps "never written" apart from "written but unreadable" so callers can
/// tell a first run from a damaged file.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// The document was read and parsed.
    Loaded(T),
    /// No backing file exists.
    Missing,
    /// The backing file exists but could not be read or parsed.
    Corrupt {
        /// Why the file was rejected.
        reason: String,
    },
}

impl<T> LoadOutcome<T> {
    /// Whether the backing file was rejected.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt { .. })
    }
}

/// A JSON file holding one value of type `T`.
#[derive(Debug, Clone)]
pub struct JsonDocument<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonDocument<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Bind a document to `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the backing file.
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn read(&self) -> LoadOutcome<T> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::Missing,
            Err(e) => {
                return LoadOutcome::Corrupt {
                    reason: format!("Failed to read: {}", e),
                };
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => {
                debug!(bytes = contents.len(), "Document loaded");
                LoadOutcome::Loaded(value)
            }
            Err(e) => LoadOutcome::Corrupt {
                reason: format!("Failed to parse: {}", e),
            },
        }
    }

    /// Serialize `value` and replace the backing file with it.
    #[track_caller]
    #[instrument(skip(self, value), fields(path = ?self.path))]
    pub fn write(&self, value: &T) -> CoreResult<()> {
        let contents = serde_json::to_string_pretty(value).map_err(|e| ShortcutError::Serialize {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| ShortcutError::io(parent, e))?;
            debug!(dir = ?parent, "Created document directory");
        }

        // Atomic write: write to temp file then rename
        let temp_path = self.path.with_extension("json.tmp");

        let mut temp_file =
            fs::File::create(&temp_path).map_err(|e| ShortcutError::io(&temp_path, e))?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| ShortcutError::io(&temp_path, e))?;

        temp_file
            .sync_all()
            .map_err(|e| ShortcutError::io(&temp_path, e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(ShortcutError::io(&self.path, e));
        }

        debug!(bytes = contents.len(), "Document written (atomic write)");

        Ok(())
    }
}
