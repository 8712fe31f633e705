//! Selection - Selected Rows per Page or Across Pages

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::row::{Row, Value};

/// Whether selection survives page navigation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionScope {
    /// Selection belongs to the page it was made on and is cleared on navigation
    #[default]
    CurrentPage,
    /// One selection shared by every page
    AcrossPages,
}

/// Key of one selection bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectionBucket {
    Page(usize),
    Global,
}

impl SelectionBucket {
    pub fn for_scope(scope: SelectionScope, page_number: usize) -> Self {
        match scope {
            SelectionScope::CurrentPage => SelectionBucket::Page(page_number),
            SelectionScope::AcrossPages => SelectionBucket::Global,
        }
    }
}

/// A selected entry: a whole row, or the value of one of its fields
#[derive(Debug, Clone, PartialEq)]
pub enum Selectable<R> {
    Row(R),
    Field { key: String, value: Value },
}

impl<R: Row> Selectable<R> {
    pub fn field(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Selectable::Field {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Entry representing `row`, reduced to `select_by` when given
    pub fn from_row(row: &R, select_by: Option<&str>) -> Self {
        match select_by {
            Some(key) => Selectable::Field {
                key: key.to_string(),
                value: row.field(key).unwrap_or_default(),
            },
            None => Selectable::Row(row.clone()),
        }
    }

    /// Whether this entry refers to `row`; a missing field reads as null,
    /// the same way `from_row` records it
    pub fn matches(&self, row: &R) -> bool {
        match self {
            Selectable::Row(selected) => selected == row,
            Selectable::Field { key, value } => row.field(key).unwrap_or_default() == *value,
        }
    }
}

impl<R> From<R> for Selectable<R> {
    fn from(row: R) -> Self {
        Selectable::Row(row)
    }
}

/// Selection buckets keyed by page, or a single global bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<R> {
    buckets: BTreeMap<SelectionBucket, Vec<Selectable<R>>>,
}

impl<R> Default for Selection<R> {
    fn default() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }
}

impl<R: Row> Selection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, bucket: SelectionBucket) -> &[Selectable<R>] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or_default()
    }

    /// Add `value` to the front of the bucket, or remove it if already there
    pub fn toggle(&mut self, bucket: SelectionBucket, value: Selectable<R>) {
        let entries = self.buckets.entry(bucket).or_default();
        if let Some(pos) = entries.iter().position(|e| e == &value) {
            entries.remove(pos);
        } else {
            entries.insert(0, value);
        }
        if entries.is_empty() {
            self.buckets.remove(&bucket);
        }
    }

    pub fn replace(&mut self, bucket: SelectionBucket, entries: Vec<Selectable<R>>) {
        if entries.is_empty() {
            self.buckets.remove(&bucket);
        } else {
            self.buckets.insert(bucket, entries);
        }
    }

    pub fn clear_bucket(&mut self, bucket: SelectionBucket) {
        self.buckets.remove(&bucket);
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Whether every row in `rows` is matched by an entry of `bucket`
    pub fn covers(&self, bucket: SelectionBucket, rows: &[R]) -> bool {
        let entries = self.bucket(bucket);
        !rows.is_empty() && rows.iter().all(|row| entries.iter().any(|e| e.matches(row)))
    }
}
