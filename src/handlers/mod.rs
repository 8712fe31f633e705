//! Handlers
//!
//! Each handler owns one axis of table behavior and works on the shared
//! [`Context`](crate::context::Context). Handlers keep no state of their own
//! beyond the context handle, except the trigger handler's callback registry.
//!
//! ```text
//! DataHandler → handler → Context store write → derived views recompute → TriggerHandler::run
//! ```

mod filter;
mod page;
mod search;
mod select;
mod sort;
mod trigger;

pub use filter::FilterHandler;
pub use page::PageHandler;
pub use search::SearchHandler;
pub use select::SelectHandler;
pub use sort::SortHandler;
pub use trigger::{Action, Event, TriggerHandler};

pub(crate) use page::reset_to_first_page;
