//! State - Settings Snapshot
//!
//! Plain, serializable copy of the table settings. Trigger callbacks receive one
//! after every operation, and a remote backend can turn it into a query.

use serde::{Deserialize, Serialize};

use crate::domain::{FilterRule, SelectionScope, SortState};
use crate::i18n::Internationalization;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub page_number: usize,
    pub rows_per_page: Option<usize>,
    /// Index of the first row on the current page
    pub offset: usize,
    pub search: String,
    pub sort: SortState,
    pub filters: Vec<FilterRule>,
    pub total_rows: Option<usize>,
    pub selection_scope: SelectionScope,
    pub i18n: Internationalization,
}
