//! Data Handler Library
//!
//! Client-side state engine for tabular data: filtering, global search,
//! single-field sorting, pagination and row selection over an in-memory row
//! collection. Every derived view is observable, and each mutating operation
//! fires a lifecycle event once the views have settled.

pub mod context;
pub mod data_handler;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod i18n;
pub mod observable;
pub mod state;

pub use data_handler::DataHandler;
pub use domain::{
    Direction, FilterValue, PageItem, PageTarget, PagesOptions, Params, Row, RowCount, Selectable,
    SelectionScope, SortParams, SortState, Value, load_rows,
};
pub use error::{CallbackError, Error, Result};
pub use handlers::Event;
pub use i18n::{I18nOverrides, Internationalization};
pub use state::State;
