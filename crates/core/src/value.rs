//! Loosely-typed configuration values
//!
//! [`SpecValue`] is a JSON tree with one extra variant for functions, so a
//! dialog configuration can carry its callbacks alongside plain data.

use crate::callback::Callable;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Object node of a [`SpecValue`] tree
pub type SpecObject = BTreeMap<String, SpecValue>;

/// A raw, unvalidated configuration value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SpecValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<SpecValue>),
    Object(SpecObject),
    Function(Callable),
}

impl SpecValue {
    /// Name of the value's type as reported in errors
    pub fn type_name(&self) -> &'static str {
        match self {
            SpecValue::Null => "null",
            SpecValue::Bool(_) => "boolean",
            SpecValue::Number(_) => "number",
            SpecValue::String(_) => "string",
            SpecValue::Array(_) => "array",
            SpecValue::Object(_) => "object",
            SpecValue::Function(_) => "function",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SpecValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SpecValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SpecValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[SpecValue]> {
        match self {
            SpecValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&SpecObject> {
        match self {
            SpecValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Callable> {
        match self {
            SpecValue::Function(callable) => Some(callable),
            _ => None,
        }
    }

    /// Look up a key on an object value
    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Convert to JSON, dropping functions (they become `null`)
    pub fn to_json(&self) -> Value {
        match self {
            SpecValue::Null | SpecValue::Function(_) => Value::Null,
            SpecValue::Bool(b) => Value::Bool(*b),
            SpecValue::Number(n) => Value::Number(n.clone()),
            SpecValue::String(s) => Value::String(s.clone()),
            SpecValue::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            SpecValue::Object(map) => Value::Object(
                map.iter()
                    .filter(|(_, v)| !matches!(v, SpecValue::Function(_)))
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Value> for SpecValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SpecValue::Null,
            Value::Bool(b) => SpecValue::Bool(b),
            Value::Number(n) => SpecValue::Number(n),
            Value::String(s) => SpecValue::String(s),
            Value::Array(items) => SpecValue::Array(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => {
                SpecValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<&str> for SpecValue {
    fn from(s: &str) -> Self {
        SpecValue::String(s.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(s: String) -> Self {
        SpecValue::String(s)
    }
}

impl From<bool> for SpecValue {
    fn from(b: bool) -> Self {
        SpecValue::Bool(b)
    }
}

impl From<i64> for SpecValue {
    fn from(n: i64) -> Self {
        SpecValue::Number(n.into())
    }
}

impl From<Callable> for SpecValue {
    fn from(callable: Callable) -> Self {
        SpecValue::Function(callable)
    }
}

impl From<Vec<SpecValue>> for SpecValue {
    fn from(items: Vec<SpecValue>) -> Self {
        SpecValue::Array(items)
    }
}

impl From<SpecObject> for SpecValue {
    fn from(map: SpecObject) -> Self {
        SpecValue::Object(map)
    }
}

impl<K: Into<String>, const N: usize> From<[(K, SpecValue); N]> for SpecValue {
    fn from(entries: [(K, SpecValue); N]) -> Self {
        SpecValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<T: Into<SpecValue>> From<Option<T>> for SpecValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SpecValue::Null, Into::into)
    }
}

// ============================================================================
// Serde
// ============================================================================

impl Serialize for SpecValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SpecValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Into::into)
    }
}

// ============================================================================
// Tests
// ============================================================================
