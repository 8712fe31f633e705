//! SearchHandler - Global Search Term

use std::rc::Rc;

use super::reset_to_first_page;
use crate::context::Context;
use crate::domain::Row;

pub struct SearchHandler<R: Row> {
    context: Rc<Context<R>>,
}

impl<R: Row> SearchHandler<R> {
    pub fn new(context: Rc<Context<R>>) -> Self {
        Self { context }
    }

    /// Show only rows with a field containing `term`, ignoring case
    pub fn set(&self, term: &str) {
        reset_to_first_page(&self.context);
        tracing::debug!(term, "search applied");
        self.context.search.set(term.to_string());
    }

    pub fn remove(&self) {
        reset_to_first_page(&self.context);
        if self.context.search.with(String::is_empty) {
            return;
        }
        tracing::debug!("search cleared");
        self.context.search.set(String::new());
    }
}
