//! SortHandler - Single-field Sorting

use std::rc::Rc;

use super::reset_to_first_page;
use crate::context::Context;
use crate::domain::{Direction, Row, SortParams, SortState};

pub struct SortHandler<R: Row> {
    context: Rc<Context<R>>,
}

impl<R: Row> SortHandler<R> {
    pub fn new(context: Rc<Context<R>>) -> Self {
        Self { context }
    }

    /// Sort by `field`; repeating the same field cycles asc → desc → unsorted
    pub fn sort(&self, field: &str) {
        let next = self.context.sorted.with(|current| current.toggled(field));
        self.apply(next);
    }

    pub fn sort_asc(&self, field: &str) {
        self.apply(SortState::new(field, Direction::Asc));
    }

    pub fn sort_desc(&self, field: &str) {
        self.apply(SortState::new(field, Direction::Desc));
    }

    /// Apply an explicit sort, ascending unless a direction is given.
    ///
    /// `None` re-applies the current sort, which still moves back to page 1.
    pub fn apply_sorting(&self, params: Option<SortParams>) {
        let next = match params {
            Some(params) => SortState::from(params),
            None => self.context.sorted.get(),
        };
        self.apply(next);
    }

    pub fn clear(&self) {
        self.apply(SortState::unsorted());
    }

    fn apply(&self, next: SortState) {
        reset_to_first_page(&self.context);
        tracing::debug!(
            identifier = next.identifier.as_deref().unwrap_or("-"),
            direction = ?next.direction,
            "sort applied"
        );
        self.context.sorted.set(next);
    }
}
