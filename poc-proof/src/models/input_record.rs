//! Uploaded data record schema
//!
//! Each input file holds one JSON object:
//!
//! ```json
//! {
//!   "address": "0x...",
//!   "unixtime": 1718000000,
//!   "preferences": { "categories": [...], "likes": { ... } }
//! }
//! ```
//!
//! Presence is checked explicitly, in stages, before any typed field access:
//! top-level keys first, then preference keys, then leaf types. Extra keys
//! are ignored.

use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Required top-level keys
pub const REQUIRED_KEYS: [&str; 3] = ["address", "unixtime", "preferences"];

/// Required keys inside `preferences`
pub const REQUIRED_PREFERENCE_KEYS: [&str; 2] = ["categories", "likes"];

/// Schema check failures, in the order they are tested
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    /// Document is not an object or lacks top-level keys
    #[error("Missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    /// `preferences` is not an object or lacks nested keys
    #[error("Missing required preference keys: {}", .0.join(", "))]
    MissingPreferenceKeys(Vec<&'static str>),

    /// All keys present but at least one value has the wrong type
    #[error("Invalid data types: {}", .0.join(", "))]
    InvalidTypes(Vec<&'static str>),
}

/// Nested `preferences` object
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub categories: Vec<Value>,
    pub likes: Map<String, Value>,
}

/// A record that passed every schema check
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    pub address: String,
    /// Kept as the parsed number so integers of any size survive
    pub unixtime: Number,
    pub preferences: Preferences,
}

impl InputRecord {
    /// Check a parsed document against the schema
    pub fn from_value(value: &Value) -> Result<Self, SchemaViolation> {
        let root = match value.as_object() {
            Some(obj) => obj,
            None => return Err(SchemaViolation::MissingKeys(REQUIRED_KEYS.to_vec())),
        };

        let missing = missing_keys(root, &REQUIRED_KEYS);
        if !missing.is_empty() {
            return Err(SchemaViolation::MissingKeys(missing));
        }

        // A non-object `preferences` cannot hold the nested keys
        let preferences = root.get("preferences").and_then(Value::as_object);
        let missing = match preferences {
            Some(prefs) => missing_keys(prefs, &REQUIRED_PREFERENCE_KEYS),
            None => REQUIRED_PREFERENCE_KEYS.to_vec(),
        };
        if !missing.is_empty() {
            return Err(SchemaViolation::MissingPreferenceKeys(missing));
        }

        let address = root.get("address").and_then(Value::as_str);
        let unixtime = root.get("unixtime").and_then(as_integer);
        let categories = preferences
            .and_then(|p| p.get("categories"))
            .and_then(Value::as_array);
        let likes = preferences
            .and_then(|p| p.get("likes"))
            .and_then(Value::as_object);

        match (address, unixtime, categories, likes) {
            (Some(address), Some(unixtime), Some(categories), Some(likes)) => Ok(Self {
                address: address.to_string(),
                unixtime,
                preferences: Preferences {
                    categories: categories.clone(),
                    likes: likes.clone(),
                },
            }),
            (address, unixtime, categories, likes) => {
                let mut invalid = Vec::new();
                if address.is_none() {
                    invalid.push("address");
                }
                if unixtime.is_none() {
                    invalid.push("unixtime");
                }
                if categories.is_none() {
                    invalid.push("preferences.categories");
                }
                if likes.is_none() {
                    invalid.push("preferences.likes");
                }
                Err(SchemaViolation::InvalidTypes(invalid))
            }
        }
    }
}

fn missing_keys(obj: &Map<String, Value>, keys: &[&'static str]) -> Vec<&'static str> {
    keys.iter().copied().filter(|k| !obj.contains_key(*k)).collect()
}

/// JSON integer of any magnitude
///
/// Relies on serde_json's `arbitrary_precision` feature, which keeps the
/// literal text of every number. A number is an integer when that text has no
/// fraction or exponent. Booleans are rejected here, unlike a Python
/// `isinstance(x, int)` check, which accepts `True`.
fn as_integer(value: &Value) -> Option<Number> {
    match value {
        Value::Number(n) if !n.to_string().contains(['.', 'e', 'E']) => Some(n.clone()),
        _ => None,
    }
}
