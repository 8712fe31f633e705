//! FilterHandler - Per-column Filters

use std::rc::Rc;

use super::reset_to_first_page;
use crate::context::Context;
use crate::domain::{FilterValue, Row};

pub struct FilterHandler<R: Row> {
    context: Rc<Context<R>>,
}

impl<R: Row> FilterHandler<R> {
    pub fn new(context: Rc<Context<R>>) -> Self {
        Self { context }
    }

    /// Set the rule for `filter_by`; an empty text value drops it
    pub fn set(&self, value: FilterValue, filter_by: &str) {
        reset_to_first_page(&self.context);
        tracing::debug!(filter_by, value = ?value, "filter applied");
        self.context
            .filters
            .update(|filters| filters.upsert(filter_by, value));
    }

    /// Drop the rule for one column
    pub fn remove_one(&self, filter_by: &str) {
        if self.context.filters.with(|filters| filters.get(filter_by).is_none()) {
            return;
        }
        reset_to_first_page(&self.context);
        self.context.filters.update(|filters| {
            filters.remove(filter_by);
        });
    }

    pub fn remove(&self) {
        reset_to_first_page(&self.context);
        if self.context.filters.with(|filters| filters.is_empty()) {
            return;
        }
        tracing::debug!("filters cleared");
        self.context.filters.update(|filters| filters.clear());
    }
}
