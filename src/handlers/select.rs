//! SelectHandler - Row Selection
//!
//! Selection acts on the bucket in scope: the current page's bucket for
//! [`SelectionScope::CurrentPage`], the global bucket for
//! [`SelectionScope::AcrossPages`].

use std::rc::Rc;

use crate::context::Context;
use crate::domain::{Row, Selectable, SelectionScope};

pub struct SelectHandler<R: Row> {
    context: Rc<Context<R>>,
}

impl<R: Row> SelectHandler<R> {
    pub fn new(context: Rc<Context<R>>) -> Self {
        Self { context }
    }

    /// Toggle `value` in the bucket in scope
    pub fn select(&self, value: Selectable<R>) {
        let bucket = self.context.selection_bucket();
        self.context
            .selection
            .update(|selection| selection.toggle(bucket, value));
    }

    /// Select every row in scope, or clear the scope if it is already fully selected.
    ///
    /// With `select_by`, entries hold that field's value instead of the row.
    pub fn select_all(&self, select_by: Option<&str>) {
        let bucket = self.context.selection_bucket();

        if self.context.is_all_selected.get() {
            tracing::debug!(?bucket, "all rows selected, clearing selection");
            self.context
                .selection
                .update(|selection| selection.clear_bucket(bucket));
            return;
        }

        let entries: Vec<Selectable<R>> = self
            .context
            .scope_rows()
            .iter()
            .map(|row| Selectable::from_row(row, select_by))
            .collect();
        tracing::debug!(?bucket, count = entries.len(), "selecting all rows in scope");
        self.context
            .selection
            .update(|selection| selection.replace(bucket, entries));
    }

    /// Empty the bucket in scope
    pub fn clear(&self) {
        let bucket = self.context.selection_bucket();
        self.context
            .selection
            .update(|selection| selection.clear_bucket(bucket));
    }

    /// Switch between per-page and cross-page selection.
    ///
    /// Existing buckets are kept; the views are recomputed for the new scope.
    pub fn set_scope(&self, scope: SelectionScope) {
        if self.context.selection_scope() == scope {
            return;
        }
        self.context.selection_scope.set(scope);
        // The scope is not a store; touch the selection so dependent views follow.
        self.context.selection.update(|_| {});
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Params, SelectionBucket};
    use crate::handlers::PageHandler;
    use serde_json::{Value as Json, json};

    fn context(scope: SelectionScope) -> Rc<Context<Json>> {
        let rows = (1..=12).map(|i| json!({ "id": i })).collect();
        Rc::new(Context::new(rows, &Params::default().selection_scope(scope)))
    }

    #[test]
    fn select_twice_restores_the_bucket() {
        let ctx = context(SelectionScope::CurrentPage);
        let select = SelectHandler::new(Rc::clone(&ctx));

        select.select(Selectable::field("id", 1));
        let before = ctx.selected.get();
        select.select(Selectable::field("id", 2));
        select.select(Selectable::field("id", 2));

        assert_eq!(ctx.selected.get(), before);
    }

    #[test]
    fn select_all_toggles_the_current_page() {
        let ctx = context(SelectionScope::CurrentPage);
        let select = SelectHandler::new(Rc::clone(&ctx));

        select.select_all(None);
        assert_eq!(ctx.selected.with(Vec::len), 5);
        assert!(ctx.is_all_selected.get());

        select.select_all(None);
        assert!(ctx.selected.with(Vec::is_empty));
        assert!(!ctx.is_all_selected.get());
    }

    #[test]
    fn select_all_by_field_stores_values() {
        let ctx = context(SelectionScope::CurrentPage);
        let select = SelectHandler::new(Rc::clone(&ctx));

        select.select_all(Some("id"));
        assert_eq!(ctx.selected.get()[0], Selectable::field("id", 1));
        assert!(ctx.is_all_selected.get());
    }

    #[test]
    fn select_all_by_field_toggles_when_rows_lack_the_field() {
        let rows = vec![json!({ "id": 1 }), json!({ "name": "no id" })];
        let ctx = Rc::new(Context::new(rows, &Params::default()));
        let select = SelectHandler::new(Rc::clone(&ctx));

        select.select_all(Some("id"));
        assert_eq!(ctx.selected.with(Vec::len), 2);
        assert!(ctx.is_all_selected.get());

        select.select_all(Some("id"));
        assert!(ctx.selected.with(Vec::is_empty));
        assert!(!ctx.is_all_selected.get());
    }

    #[test]
    fn across_pages_selection_survives_navigation() {
        let ctx = context(SelectionScope::AcrossPages);
        let select = SelectHandler::new(Rc::clone(&ctx));
        let pages = PageHandler::new(Rc::clone(&ctx));

        select.select(Selectable::field("id", 3));
        assert!(pages.goto(2));
        assert_eq!(ctx.selected.get(), vec![Selectable::field("id", 3)]);
        assert!(!ctx.is_all_selected.get());

        select.select_all(Some("id"));
        assert_eq!(ctx.selected.with(Vec::len), 12);
        assert!(ctx.is_all_selected.get());
    }

    #[test]
    fn page_scope_clears_on_navigation() {
        let ctx = context(SelectionScope::CurrentPage);
        let select = SelectHandler::new(Rc::clone(&ctx));
        let pages = PageHandler::new(Rc::clone(&ctx));

        let first = ctx.paged_rows.get();
        select.select(Selectable::Row(first[0].clone()));
        select.select(Selectable::Row(first[1].clone()));
        assert_eq!(ctx.selection.with(|s| s.bucket(SelectionBucket::Page(1)).len()), 2);

        assert!(pages.goto(2));
        assert!(ctx.selection.with(|s| s.bucket(SelectionBucket::Page(1)).is_empty()));
        assert!(!ctx.is_all_selected.get());
    }

    #[test]
    fn changing_scope_recomputes_views() {
        let ctx = context(SelectionScope::CurrentPage);
        let select = SelectHandler::new(Rc::clone(&ctx));

        select.select_all(None);
        assert!(ctx.is_all_selected.get());

        select.set_scope(SelectionScope::AcrossPages);
        assert!(ctx.selected.with(Vec::is_empty));
        assert!(!ctx.is_all_selected.get());
    }
}
