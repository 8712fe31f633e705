//! Domain Models
//!
//! Plain data types shared by the context and the handlers.

pub mod config;
pub mod filter;
pub mod page;
pub mod row;
pub mod selection;
pub mod sort;

pub use config::Params;
pub use filter::{FilterRule, FilterRules, FilterValue};
pub use page::{PageItem, PageTarget, PagesOptions, RowCount};
pub use row::{Row, Value, load_rows, parse_rows};
pub use selection::{Selectable, Selection, SelectionBucket, SelectionScope};
pub use sort::{Direction, SortParams, SortState};
