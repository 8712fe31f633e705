//! Filter - Per-column Filter Rules

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

use super::row::{Row, Value};

/// Value a column is filtered by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    Text(String),
}

impl FilterValue {
    /// An empty text filter means "no filter" for its column
    pub fn is_empty(&self) -> bool {
        matches!(self, FilterValue::Text(s) if s.is_empty())
    }

    /// Whether a field value passes this rule.
    ///
    /// Text matches as a case-insensitive substring; numbers match an equal
    /// number or a substring of the field's text.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => false,
            (FilterValue::Text(text), v) => v.contains_ignore_case(&text.to_lowercase()),
            (FilterValue::Number(n), Value::Number(v)) => n == v,
            (FilterValue::Number(n), v) => v.contains_ignore_case(&n.to_string()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Number(n)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(n as f64)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Number(f64::from(n))
    }
}

/// One active rule, as reported in state snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRule {
    pub filter_by: String,
    pub value: FilterValue,
}

/// Active filter rules keyed by field, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterRules {
    rules: LinkedHashMap<String, FilterValue>,
}

impl FilterRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the rule for `field`; an empty text value removes it
    pub fn upsert(&mut self, field: impl Into<String>, value: FilterValue) {
        let field = field.into();
        if value.is_empty() {
            self.rules.remove(&field);
        } else {
            self.rules.replace(field, value);
        }
    }

    pub fn remove(&mut self, field: &str) -> Option<FilterValue> {
        self.rules.remove(field)
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn get(&self, field: &str) -> Option<&FilterValue> {
        self.rules.get(field)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// AND over every rule; a row missing a filtered field fails
    pub fn matches<R: Row>(&self, row: &R) -> bool {
        self.rules.iter().all(|(field, rule)| {
            row.field(field)
                .is_some_and(|value| rule.matches(&value))
        })
    }

    pub fn to_rules(&self) -> Vec<FilterRule> {
        self.rules
            .iter()
            .map(|(filter_by, value)| FilterRule {
                filter_by: filter_by.clone(),
                value: value.clone(),
            })
            .collect()
    }
}
