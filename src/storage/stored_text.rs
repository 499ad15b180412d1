//! Raw text of a single stored field.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Deref;

/// The text of one stored field, as read from a possibly hand-edited file.
///
/// Strings are kept as-is. Numbers and booleans are accepted and kept as
/// their JSON text, so `"attendance": 3` reads the same as
/// `"attendance": "3"`. Arrays, objects and `null` list elements are kept
/// as JSON text too but marked structured; thawing rejects them as an
/// invalid value for that field. An absent key or a `null` field is `None`
/// on the enclosing `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredText {
    text: String,
    structured: bool,
}

impl StoredText {
    /// Get the field text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the stored value was an array, object or `null` rather than
    /// a scalar.
    pub fn is_structured(&self) -> bool {
        self.structured
    }
}

impl From<String> for StoredText {
    fn from(text: String) -> Self {
        Self {
            text,
            structured: false,
        }
    }
}

impl From<&str> for StoredText {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl Deref for StoredText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for StoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// Always written back as a string
impl Serialize for StoredText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for StoredText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let stored = match Value::deserialize(deserializer)? {
            Value::String(s) => Self::from(s),
            Value::Number(n) => Self::from(n.to_string()),
            Value::Bool(b) => Self::from(b.to_string()),
            other => Self {
                text: other.to_string(),
                structured: true,
            },
        };
        Ok(stored)
    }
}
