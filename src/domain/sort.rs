//! Sort - Single-field Sort State

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => f.write_str("asc"),
            Direction::Desc => f.write_str("desc"),
        }
    }
}

/// Current sort: one field and one direction, or unsorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub identifier: Option<String>,
    pub direction: Option<Direction>,
}

impl SortState {
    pub fn new(identifier: impl Into<String>, direction: Direction) -> Self {
        Self {
            identifier: Some(identifier.into()),
            direction: Some(direction),
        }
    }

    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn is_sorted(&self) -> bool {
        self.identifier.is_some()
    }

    /// Next state when the column `field` is clicked: asc → desc → unsorted,
    /// or asc on a different field.
    pub fn toggled(&self, field: &str) -> Self {
        if self.identifier.as_deref() != Some(field) {
            return Self::new(field, Direction::Asc);
        }
        match self.direction {
            Some(Direction::Asc) => Self::new(field, Direction::Desc),
            Some(Direction::Desc) => Self::unsorted(),
            None => Self::new(field, Direction::Asc),
        }
    }
}

/// Explicit sort request for `apply_sorting`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortParams {
    pub order_by: String,
    #[serde(default)]
    pub direction: Option<Direction>,
}

impl SortParams {
    pub fn new(order_by: impl Into<String>) -> Self {
        Self {
            order_by: order_by.into(),
            direction: None,
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }
}

impl From<SortParams> for SortState {
    fn from(params: SortParams) -> Self {
        SortState::new(params.order_by, params.direction.unwrap_or(Direction::Asc))
    }
}
