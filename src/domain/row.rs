//! Row - Caller Records and Field Values

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single field value as seen by sorting, filtering, searching and selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Case-insensitive substring match against the stringified value
    pub fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        if self.is_null() {
            return false;
        }
        self.to_string().to_lowercase().contains(needle_lower)
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 3,
            Value::Bool(_) => 0,
            Value::Number(_) => 1,
            Value::Text(_) => 2,
        }
    }

    /// Total ordering used for sorting: numbers numerically, text case-insensitively,
    /// mixed kinds by kind. Null compares greater than everything.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Value::Text(a), Value::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::Text(s.clone()),
            // Nested structures are searchable through their JSON text.
            other => Value::Text(other.to_string()),
        }
    }
}

/// A record the engine can sort, filter, search and select.
///
/// The engine never interprets a row beyond the fields named by the caller.
pub trait Row: Clone + PartialEq + 'static {
    /// Value of the field named `key`, if the row has one
    fn field(&self, key: &str) -> Option<Value>;

    /// Every field value, in the row's own order (used by the global search)
    fn values(&self) -> Vec<Value>;
}

impl Row for serde_json::Map<String, serde_json::Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).map(Value::from)
    }

    fn values(&self) -> Vec<Value> {
        serde_json::Map::values(self).map(Value::from).collect()
    }
}

impl Row for serde_json::Value {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).map(Value::from)
    }

    fn values(&self) -> Vec<Value> {
        match self {
            serde_json::Value::Object(map) => map.values().map(Value::from).collect(),
            other => vec![Value::from(other)],
        }
    }
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, key: &str) -> Option<Value> {
        self.get(key).cloned()
    }

    fn values(&self) -> Vec<Value> {
        BTreeMap::values(self).cloned().collect()
    }
}

/// Parse rows from a JSON array
pub fn parse_rows<R: DeserializeOwned>(content: &str) -> Result<Vec<R>> {
    Ok(serde_json::from_str(content)?)
}

/// Load rows from a JSON file holding an array of records
pub fn load_rows<R: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<R>> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_rows(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn json_rows_expose_fields() {
        let row = json!({ "name": "Alice", "age": 30, "admin": true, "team": null });
        assert_eq!(row.field("name"), Some(Value::from("Alice")));
        assert_eq!(row.field("age"), Some(Value::Number(30.0)));
        assert_eq!(row.field("team"), Some(Value::Null));
        assert_eq!(row.field("missing"), None);
        assert_eq!(Row::values(&row).len(), 4);
    }

    #[test]
    fn numbers_display_without_trailing_zero() {
        assert_eq!(Value::Number(30.0).to_string(), "30");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn sort_cmp_orders_text_case_insensitively() {
        let a = Value::from("alice");
        let b = Value::from("Bob");
        assert_eq!(a.sort_cmp(&b), Ordering::Less);
        assert_eq!(Value::Number(10.0).sort_cmp(&Value::Number(9.0)), Ordering::Greater);
        assert_eq!(Value::Number(1.0).sort_cmp(&Value::from("a")), Ordering::Less);
    }

    #[test]
    fn contains_ignore_case_skips_null() {
        assert!(Value::from("Anna").contains_ignore_case("an"));
        assert!(Value::Number(1234.0).contains_ignore_case("23"));
        assert!(!Value::Null.contains_ignore_case(""));
    }

    #[test]
    fn parse_rows_reads_an_array_of_records() {
        let rows: Vec<serde_json::Value> =
            parse_rows(r#"[{ "id": 1, "name": "Alice" }, { "id": 2 }]"#).expect("valid json");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field("name"), Some(Value::from("Alice")));
    }

    #[test]
    fn parse_rows_reports_malformed_json() {
        let result: Result<Vec<serde_json::Value>> = parse_rows("[{ \"id\": 1,");
        assert!(matches!(result, Err(Error::Json { .. })));
    }

    #[test]
    fn load_rows_reports_missing_file() {
        let result: Result<Vec<serde_json::Value>> = load_rows("does/not/exist.json");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
