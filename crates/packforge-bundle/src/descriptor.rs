//! Plugin descriptor (`mcmod.info`) normalization.
//!
//! Descriptors come in three shapes:
//!
//! ```text
//! {"modid": "x", ...}                           bare object
//! {"modListVersion": 2, "modList": [{...}]}     wrapped under a list key
//! [{"modid": "x", ...}, ...]                    list, first element wins
//! ```
//!
//! All three reduce to the same [`Descriptor`].

use packforge_core::UNKNOWN;
use serde_json::{Map, Value};

/// Keys under which the real payload may be wrapped.
const WRAPPER_KEYS: &[&str] = &["modlist", "modList"];

/// Keys that may hold the author list.
const AUTHOR_KEYS: &[&str] = &["authors", "authorList"];

/// The fields of a descriptor that make it into a plugin record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub id: String,
    pub name: String,
    pub version: String,
    pub authors: String,
    pub platform_version: Option<String>,
}

impl Descriptor {
    /// Parse descriptor bytes.
    ///
    /// Returns a reason string on failure; the caller attaches the archive
    /// path.
    pub fn from_json(bytes: &[u8]) -> Result<Self, String> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let value: Value = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        Self::from_value(value)
    }

    /// Normalize an already-parsed descriptor document.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let payload = unwrap_payload(value)?;

        let id = match payload.get("modid") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(_) => return Err("modid must be a non-empty string".to_string()),
            None => return Err("missing required field modid".to_string()),
        };

        let name = text_field(&payload, "name")
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| id.clone());
        // An explicit null is an empty version, which the manifest omits.
        let version = match payload.get("version") {
            Some(value) => value_text(value).unwrap_or_default(),
            None => UNKNOWN.to_string(),
        };
        let authors = AUTHOR_KEYS
            .iter()
            .find_map(|key| text_field(&payload, key))
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string());
        let platform_version = text_field(&payload, "mcversion").filter(|v| !v.is_empty());

        Ok(Self {
            id,
            name,
            version,
            authors,
            platform_version,
        })
    }
}

/// Reduce any of the three descriptor shapes to the payload object.
fn unwrap_payload(value: Value) -> Result<Map<String, Value>, String> {
    let value = match value {
        Value::Object(mut map) if WRAPPER_KEYS.iter().any(|k| map.contains_key(*k)) => {
            WRAPPER_KEYS
                .iter()
                .find_map(|k| map.remove(*k))
                .unwrap_or(Value::Null)
        }
        other => other,
    };

    let value = match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| "descriptor list is empty".to_string())?,
        other => other,
    };

    match value {
        Value::Object(map) => Ok(map),
        other => Err(format!("expected an object, found {}", kind_of(&other))),
    }
}

/// Text form of a scalar or list field.
///
/// Lists are joined with `", "`. `null` counts as absent.
fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(value_text)
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
