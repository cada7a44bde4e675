use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Shortcut registry errors with source location tracking.
#[derive(Error, Debug)]
pub enum ShortcutError {
    /// Reading or writing a JSON document failed.
    #[error("Document I/O failed for {path:?}: {source} {location}")]
    DocumentIo {
        /// Path of the document.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A JSON document exists but does not parse.
    #[error("Document {path:?} is malformed: {reason} {location}")]
    DocumentParse {
        /// Path of the document.
        path: PathBuf,
        /// Parser message.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Serializing a value to JSON failed.
    #[error("Serialization failed: {reason} {location}")]
    Serialize {
        /// Serializer message.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The `keys` expression is not a valid accelerator.
    #[error("Invalid accelerator {keys:?}: {reason} {location}")]
    InvalidAccelerator {
        /// The rejected accelerator expression.
        keys: String,
        /// Parser message.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The OS refused to bind a hotkey.
    #[error("Failed to bind {keys:?}: {reason} {location}")]
    BindingFailed {
        /// The accelerator that could not be bound.
        keys: String,
        /// Backend message.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Another enabled record already claimed the same hotkey in this pass.
    #[error("Hotkey {keys:?} is already bound by an earlier shortcut {location}")]
    DuplicateBinding {
        /// The accelerator claimed twice.
        keys: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Opening a path or URL, or spawning a command, failed.
    #[error("Failed to launch {target:?}: {source} {location}")]
    LaunchFailed {
        /// The shortcut target.
        target: String,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A `code` shortcut fired while code execution is disabled.
    #[error("Code shortcuts are disabled {location}")]
    CodeExecutionDisabled {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A `code` shortcut names a program outside the allow-list.
    #[error("Program {program:?} is not in the allow-list {location}")]
    ProgramNotAllowed {
        /// The rejected program.
        program: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A shortcut has nothing to launch.
    #[error("Shortcut {keys:?} has an empty target {location}")]
    EmptyTarget {
        /// Accelerator of the offending shortcut.
        keys: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The autostart collaborator failed.
    #[error("Autostart registration failed: {reason} {location}")]
    Autostart {
        /// Collaborator message.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl ShortcutError {
    /// Wrap an IO error for `path` at the caller's location.
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ShortcutError::DocumentIo {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl ShortcutError {
    /// Message for end users: the error without its source location.
    pub fn reason(&self) -> String {
        match self {
            ShortcutError::DocumentIo { path, source, .. } => {
                format!("Document I/O failed for {}: {}", path.display(), source)
            }
            ShortcutError::DocumentParse { path, reason, .. } => {
                format!("Document {} is malformed: {}", path.display(), reason)
            }
            ShortcutError::Serialize { reason, .. } => format!("Serialization failed: {}", reason),
            ShortcutError::InvalidAccelerator { keys, reason, .. } => {
                format!("Invalid accelerator {:?}: {}", keys, reason)
            }
            ShortcutError::BindingFailed { keys, reason, .. } => {
                format!("Failed to bind {:?}: {}", keys, reason)
            }
            ShortcutError::DuplicateBinding { keys, .. } => {
                format!("Hotkey {:?} is already bound by an earlier shortcut", keys)
            }
            ShortcutError::LaunchFailed { target, source, .. } => {
                format!("Failed to launch {:?}: {}", target, source)
            }
            ShortcutError::CodeExecutionDisabled { .. } => "Code shortcuts are disabled".to_string(),
            ShortcutError::ProgramNotAllowed { program, .. } => {
                format!("Program {:?} is not in the allow-list", program)
            }
            ShortcutError::EmptyTarget { keys, .. } => {
                format!("Shortcut {:?} has an empty target", keys)
            }
            ShortcutError::Autostart { reason, .. } => {
                format!("Autostart registration failed: {}", reason)
            }
        }
    }
}

/// Result type alias using [`ShortcutError`].
pub type Result<T> = std::result::Result<T, ShortcutError>;
