//! Attribute values configured on a workflow action instance

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Attribute values keyed by the host's attribute key
///
/// Hosts store most attribute values as strings, so boolean reads are lenient:
/// `true`, `yes`, `t`, `y` and `1` (trimmed, any case) are true and every other
/// non-blank string is false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionAttributes {
    pub data: HashMap<String, Value>,
}

/// Declares one boolean attribute an action reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub default: bool,
}

impl ActionAttributes {
    #[must_use]
    pub fn new(data: HashMap<String, Value>) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.data
            .get(key)
            .and_then(|v| v.as_str().map(std::string::ToString::to_string))
    }

    /// Boolean value, `None` when missing or blank
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.data.get(key).and_then(as_boolean)
    }

    #[must_use]
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

fn as_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(matches!(
                text.to_ascii_lowercase().as_str(),
                "true" | "yes" | "t" | "y" | "1"
            ))
        }
        Value::Number(number) => number.as_f64().map(|n| n != 0.0),
        _ => None,
    }
}
