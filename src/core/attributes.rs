//! Structured attribute values and attribute maps
//!
//! This module provides:
//! - `FieldValue`: a tagged value (scalar or nested) attached to an event
//! - `Attributes`: an ordered string-keyed map of field values, used both
//!   for a logger's common attributes and for per-call attributes

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Value type for structured logging fields
///
/// Serialization fails for non-finite floats, which have no JSON form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<FieldValue>),
    Map(Attributes),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Int(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            FieldValue::Float(f) => Err(S::Error::custom(format!(
                "unsupported value: non-finite float {}",
                f
            ))),
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Array(items) => items.serialize(serializer),
            FieldValue::Map(map) => map.serialize(serializer),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Array(_) | FieldValue::Map(_) => match serde_json::to_string(self) {
                Ok(json) => write!(f, "{}", json),
                Err(_) => Err(fmt::Error),
            },
        }
    }
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl From<Attributes> for FieldValue {
    fn from(map: Attributes) -> Self {
        FieldValue::Map(map)
    }
}

/// Ordered mapping of attribute names to values
///
/// Keys serialize in sorted order, so the same attributes always produce
/// the same JSON text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes {
    fields: BTreeMap<String, FieldValue>,
}

impl Attributes {
    /// Create a new empty attribute map
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add a field to the map
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the map (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy every field of `overlay` into `self`, replacing existing keys
    pub fn extend_from(&mut self, overlay: &Attributes) {
        for (key, value) in overlay.iter() {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// Return `self` with `overlay` applied on top; `overlay` wins on collision
    #[must_use]
    pub fn merged(&self, overlay: &Attributes) -> Attributes {
        let mut merged = self.clone();
        merged.extend_from(overlay);
        merged
    }

    /// The `module` entry as text, empty when missing or not a string
    pub fn module(&self) -> &str {
        self.get("module").and_then(FieldValue::as_str).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_creation() {
        let attrs = Attributes::new();
        assert!(attrs.is_empty());

        let attrs = Attributes::new()
            .with_field("user_id", 123)
            .with_field("username", "john_doe")
            .with_field("active", true);
        assert_eq!(attrs.len(), 3);
    }

    #[test]
    fn test_merge_overlay_wins() {
        let common = Attributes::new()
            .with_field("module", "billing")
            .with_field("_pid", 42);
        let call = Attributes::new()
            .with_field("module", "override")
            .with_field("q", 71);

        let merged = common.merged(&call);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.module(), "override");
        assert_eq!(merged.get("_pid"), Some(&FieldValue::Int(42)));

        // the base map is untouched
        assert_eq!(common.module(), "billing");
    }

    #[test]
    fn test_serialization_is_sorted() {
        let attrs = Attributes::new()
            .with_field("q", 71)
            .with_field("p", "17")
            .with_field("nested", Attributes::new().with_field("b", vec![1, 2]));

        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"nested":{"b":[1,2]},"p":"17","q":71}"#);
    }

    #[test]
    fn test_non_finite_float_fails_to_serialize() {
        let attrs = Attributes::new().with_field("ratio", f64::NAN);
        assert!(serde_json::to_string(&attrs).is_err());

        let attrs = Attributes::new().with_field("ratio", 0.5);
        assert_eq!(serde_json::to_string(&attrs).unwrap(), r#"{"ratio":0.5}"#);
    }

    #[test]
    fn test_module_lookup() {
        assert_eq!(Attributes::new().module(), "");
        assert_eq!(Attributes::new().with_field("module", 7).module(), "");
        assert_eq!(Attributes::new().with_field("module", "api").module(), "api");
    }

    #[test]
    fn test_deserialize_nested() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"a":1,"b":1.5,"c":[true,null],"d":{"e":"x"}}"#).unwrap();
        assert_eq!(attrs.get("a"), Some(&FieldValue::Int(1)));
        assert_eq!(attrs.get("b"), Some(&FieldValue::Float(1.5)));
        assert!(matches!(attrs.get("c"), Some(FieldValue::Array(items)) if items.len() == 2));
        assert!(matches!(attrs.get("d"), Some(FieldValue::Map(_))));
    }
}
