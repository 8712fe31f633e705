//! TriggerHandler - Lifecycle Callbacks
//!
//! Maps each [`Event`] to at most one callback. Registering a callback for an
//! event that already has one replaces it: last registration wins.

use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::context::Context;
use crate::domain::Row;
use crate::error::{CallbackError, CallbackSnafu, Result};
use crate::state::State;

/// Lifecycle events, one per mutating operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Event {
    SetPage,
    SetRowsPerPage,
    SetRows,
    SetTotalRows,
    Sort,
    Search,
    ClearSearch,
    Filter,
    ClearFilters,
    Select,
    SelectAll,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::SetPage => "setPage",
            Event::SetRowsPerPage => "setRowsPerPage",
            Event::SetRows => "setRows",
            Event::SetTotalRows => "setTotalRows",
            Event::Sort => "sort",
            Event::Search => "search",
            Event::ClearSearch => "clearSearch",
            Event::Filter => "filter",
            Event::ClearFilters => "clearFilters",
            Event::Select => "select",
            Event::SelectAll => "selectAll",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Callback invoked with the settled state after an operation
pub type Action = Box<dyn FnMut(&State) -> std::result::Result<(), CallbackError>>;

pub struct TriggerHandler<R: Row> {
    context: Rc<Context<R>>,
    actions: AHashMap<Event, Action>,
}

impl<R: Row> TriggerHandler<R> {
    pub fn new(context: Rc<Context<R>>) -> Self {
        Self {
            context,
            actions: AHashMap::new(),
        }
    }

    /// Register the callback for `event`, replacing any previous one.
    ///
    /// Returns `true` when an earlier callback was replaced.
    pub fn set_action(
        &mut self,
        event: Event,
        action: impl FnMut(&State) -> std::result::Result<(), CallbackError> + 'static,
    ) -> bool {
        let replaced = self.actions.insert(event, Box::new(action)).is_some();
        tracing::debug!(%event, replaced, "trigger registered");
        replaced
    }

    #[cfg(test)]
    fn has_action(&self, event: Event) -> bool {
        self.actions.contains_key(&event)
    }

    /// Call the callback for `event`, if any, with a snapshot of the current state.
    ///
    /// A failing callback is not retried or swallowed; its error is returned.
    pub fn run(&mut self, event: Event) -> Result<()> {
        let Some(action) = self.actions.get_mut(&event) else {
            tracing::trace!(%event, "no trigger registered");
            return Ok(());
        };

        let state = self.context.state();
        tracing::trace!(%event, page = state.page_number, "running trigger");
        action(&state).context(CallbackSnafu { event })
    }

    /// Run `op`, then fire `event` once it has completed
    pub fn run_with<T>(&mut self, event: Event, op: impl FnOnce() -> T) -> Result<T> {
        let output = op();
        self.run(event)?;
        Ok(output)
    }
}
