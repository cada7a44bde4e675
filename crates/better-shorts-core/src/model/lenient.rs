//! Field decoders for hand-edited or older shortcut files.
//!
//! A field of the wrong JSON type decodes to a usable value instead of
//! failing the record, and with it the whole list.

use crate::ShortcutKind;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Strings as-is, `null` as empty, anything else as its JSON text.
pub(super) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Known type names map to their kind; `null` is the empty unknown kind.
pub(super) fn kind<'de, D>(deserializer: D) -> Result<ShortcutKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) => ShortcutKind::from(name),
        Value::Null => ShortcutKind::default(),
        other => ShortcutKind::Other(other.to_string()),
    })
}

/// JavaScript truthiness: `0`, `""`, `null` and `false` are false.
pub(super) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
