use crate::model::lenient;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What a shortcut does when its hotkey fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShortcutKind {
    /// Open a filesystem path with its default handler.
    App,
    /// Open a URL in the default browser.
    Url,
    /// Run a command (gated by the execution policy).
    Code,
    /// A type this build does not understand. Kept verbatim on save.
    Other(String),
}

impl ShortcutKind {
    /// Wire name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            ShortcutKind::App => "app",
            ShortcutKind::Url => "url",
            ShortcutKind::Code => "code",
            ShortcutKind::Other(name) => name,
        }
    }
}

impl Default for ShortcutKind {
    fn default() -> Self {
        ShortcutKind::Other(String::new())
    }
}

impl From<String> for ShortcutKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "app" => ShortcutKind::App,
            "url" => ShortcutKind::Url,
            "code" => ShortcutKind::Code,
            _ => ShortcutKind::Other(value),
        }
    }
}

impl From<ShortcutKind> for String {
    fn from(kind: ShortcutKind) -> Self {
        match kind {
            ShortcutKind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ShortcutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-defined shortcut.
///
/// Only `keys`, `type`, `target` and `enabled` are interpreted. Every other
/// field (`id`, `label`, ...) lands in `extra` and is written back untouched,
/// in its original order. Fields of the wrong JSON type are coerced rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortcutRecord {
    /// Accelerator expression, e.g. `Ctrl+Alt+N`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub keys: String,

    /// Action kind.
    #[serde(rename = "type", default, deserialize_with = "lenient::kind")]
    pub kind: ShortcutKind,

    /// Path, URL or command, depending on `kind`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub target: String,

    /// Disabled records are stored but never bound.
    #[serde(default, deserialize_with = "lenient::truthy")]
    pub enabled: bool,

    /// Opaque passthrough fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShortcutRecord {
    /// Build an enabled record with no passthrough fields.
    pub fn new(keys: impl Into<String>, kind: ShortcutKind, target: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            kind,
            target: target.into(),
            enabled: true,
            extra: Map::new(),
        }
    }

    /// Same record with `enabled` set.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
