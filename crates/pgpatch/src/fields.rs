//! Source objects for patch building.
//!
//! [`Fields`] is the untrusted side of a patch: a mapping of field names as
//! the caller knows them (typically camelCase, straight out of a JSON API
//! body) to values tokio-postgres can bind. It may carry any number of keys
//! the whitelist will never let through.

use bytes::BytesMut;
use serde_json::Value;
use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

use crate::param::Param;

/// An insertion-ordered mapping of field names to bindable SQL values.
///
/// Re-inserting an existing key replaces its value but keeps the key's
/// original position. The mapping is read-only input to the patch builder
/// and is never mutated by it.
///
/// # Example
/// ```ignore
/// let mut row = Fields::new();
/// row.insert("displayName", "Alice")
///     .insert("loginCount", 7_i64);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Fields {
    entries: Vec<(String, Param)>,
}

impl Fields {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field value.
    pub fn insert<T>(&mut self, key: impl Into<String>, value: T) -> &mut Self
    where
        T: ToSql + Send + Sync + 'static,
    {
        let key = key.into();
        let param = Param::new(value);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = param,
            None => self.entries.push((key, param)),
        }
        self
    }

    /// Whether a field with this exact name is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Look up a field value by its exact name.
    pub fn get(&self, key: &str) -> Option<&Param> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, param)| param)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Convert a JSON object into fields.
    ///
    /// Scalars bind as their native SQL types: strings as text, booleans as
    /// bool, integral numbers as int8 and other numbers as float8. `null`
    /// binds as an untyped SQL NULL; arrays and nested objects bind as json
    /// values. Field order follows the map's own iteration order.
    pub fn from_json(map: &serde_json::Map<String, Value>) -> Self {
        let mut fields = Self::new();
        for (key, value) in map {
            fields.entries.push((key.clone(), json_param(value)));
        }
        fields
    }
}

impl From<serde_json::Map<String, Value>> for Fields {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self::from_json(&map)
    }
}

/// SQL NULL that satisfies any column type.
#[derive(Debug)]
struct AnyNull;

impl ToSql for AnyNull {
    fn to_sql(
        &self,
        _ty: &Type,
        _out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        Ok(IsNull::Yes)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }

    to_sql_checked!();
}

fn json_param(value: &Value) -> Param {
    match value {
        Value::Null => Param::new(AnyNull),
        Value::Bool(b) => Param::new(*b),
        // u64 beyond the int8 range falls back to float8
        Value::Number(n) => match n.as_i64() {
            Some(i) => Param::new(i),
            None => Param::new(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Param::new(s.clone()),
        other => Param::new(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order() {
        let mut fields = Fields::new();
        fields.insert("b", 1_i32).insert("a", 2_i32);

        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut fields = Fields::new();
        fields
            .insert("name", "alice")
            .insert("email", "a@example.com")
            .insert("name", "bob");

        let keys: Vec<&str> = fields.keys().collect();
        assert_eq!(keys, vec!["name", "email"]);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn contains_is_exact() {
        let mut fields = Fields::new();
        fields.insert("displayName", "Alice");

        assert!(fields.contains("displayName"));
        assert!(!fields.contains("display_name"));
        assert!(!fields.contains("displayname"));
    }

    #[test]
    fn from_json_carries_every_key() {
        let map = serde_json::json!({
            "name": "alice",
            "age": 42,
            "ratio": 0.5,
            "active": true,
            "deletedAt": null,
            "tags": ["a", "b"],
        });
        let Value::Object(map) = map else {
            unreachable!()
        };

        let fields = Fields::from_json(&map);
        assert_eq!(fields.len(), 6);
        assert!(fields.contains("deletedAt"));
        assert!(fields.contains("tags"));
    }

    #[test]
    fn any_null_encodes_as_null_for_any_type() {
        let mut buf = BytesMut::new();
        let res = AnyNull.to_sql_checked(&Type::INT4, &mut buf).unwrap();
        assert!(matches!(res, IsNull::Yes));

        let res = AnyNull.to_sql_checked(&Type::TEXT, &mut buf).unwrap();
        assert!(matches!(res, IsNull::Yes));
    }
}
