//! PageHandler - Page Navigation

use std::rc::Rc;

use crate::context::Context;
use crate::domain::{PageItem, PagesOptions, Row, RowCount, SelectionScope};
use crate::observable::Derived;

pub struct PageHandler<R: Row> {
    context: Rc<Context<R>>,
}

impl<R: Row> PageHandler<R> {
    pub fn new(context: Rc<Context<R>>) -> Self {
        Self { context }
    }

    pub fn pages(&self, options: PagesOptions) -> Derived<Vec<PageItem>> {
        if options.ellipsis {
            self.context.pages_with_ellipsis.clone()
        } else {
            self.context.pages.clone()
        }
    }

    pub fn row_count(&self) -> Derived<RowCount> {
        self.context.row_count.clone()
    }

    /// Move to page `number`.
    ///
    /// Pages below 1 are always rejected. Pages above the page count are rejected
    /// only when the bound is known (rows per page set and a non-zero total).
    /// Returns whether the navigation was accepted; a rejected request leaves
    /// the state untouched.
    pub fn goto(&self, number: usize) -> bool {
        if number < 1 {
            tracing::debug!(number, "page navigation rejected: below first page");
            return false;
        }
        if self.context.has_known_bounds() {
            let page_count = self.context.page_count.get();
            if number > page_count {
                tracing::debug!(number, page_count, "page navigation rejected: past last page");
                return false;
            }
        }

        self.context.page_number.set(number);
        if self.context.selection_scope() == SelectionScope::CurrentPage {
            self.context.selection.update(|selection| selection.clear());
        }
        tracing::trace!(number, "page changed");
        true
    }

    /// Go one page back; a no-op on the first page
    pub fn previous(&self) -> bool {
        let current = self.context.page_number.get();
        if current <= 1 {
            return false;
        }
        self.goto(current - 1)
    }

    pub fn next(&self) -> bool {
        self.goto(self.context.page_number.get().saturating_add(1))
    }
}

/// Put the table back on page 1 after the visible row set changed
pub(crate) fn reset_to_first_page<R: Row>(context: &Context<R>) {
    if context.page_number.get() == 1 {
        return;
    }
    context.page_number.set(1);
    if context.selection_scope() == SelectionScope::CurrentPage {
        context.selection.update(|selection| selection.clear());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Params, Selectable};
    use serde_json::{Value as Json, json};

    fn handler(count: usize, params: Params) -> PageHandler<Json> {
        let rows = (1..=count).map(|i| json!({ "id": i })).collect();
        PageHandler::new(Rc::new(Context::new(rows, &params)))
    }

    #[test]
    fn goto_rejects_pages_outside_the_range() {
        let pages = handler(12, Params::default());

        assert!(!pages.goto(0));
        assert!(!pages.goto(4));
        assert_eq!(pages.context.page_number.get(), 1);

        assert!(pages.goto(3));
        assert_eq!(pages.context.page_number.get(), 3);
        assert_eq!(pages.row_count().get(), RowCount { total: 12, start: 11, end: 12 });
    }

    #[test]
    fn previous_on_first_page_is_a_no_op() {
        let pages = handler(12, Params::default());
        assert!(!pages.previous());
        assert_eq!(pages.context.page_number.get(), 1);
    }

    #[test]
    fn next_stops_at_the_last_page() {
        let pages = handler(12, Params::default());
        assert!(pages.next());
        assert!(pages.next());
        assert!(!pages.next());
        assert_eq!(pages.context.page_number.get(), 3);
        assert!(pages.previous());
        assert_eq!(pages.context.page_number.get(), 2);
    }

    #[test]
    fn only_lower_bound_without_known_total() {
        let empty = handler(0, Params::default());
        assert!(empty.goto(7));
        assert_eq!(empty.context.page_number.get(), 7);

        let unpaginated = handler(12, Params::unpaginated());
        assert!(unpaginated.goto(2));
        assert!(!unpaginated.goto(0));
    }

    #[test]
    fn total_rows_override_sets_the_bound() {
        let pages = handler(5, Params::default().total_rows(40));
        assert!(pages.goto(8));
        assert!(!pages.goto(9));
    }

    #[test]
    fn navigation_clears_page_scoped_selection() {
        let pages = handler(12, Params::default());
        let first = pages.context.paged_rows.get();
        pages.context.selection.update(|s| {
            s.toggle(pages.context.selection_bucket(), Selectable::Row(first[0].clone()));
        });
        assert_eq!(pages.context.selected.with(Vec::len), 1);

        assert!(pages.goto(2));
        assert!(pages.context.selection.with(|s| s.is_empty()));
    }

    #[test]
    fn rejected_navigation_keeps_selection() {
        let pages = handler(12, Params::default());
        pages.context.selection.update(|s| {
            s.toggle(pages.context.selection_bucket(), Selectable::field("id", 1));
        });
        assert!(!pages.goto(9));
        assert_eq!(pages.context.selected.with(Vec::len), 1);
    }

    #[test]
    fn pages_with_and_without_ellipsis() {
        let pages = handler(100, Params::default().rows_per_page(10));
        assert_eq!(pages.pages(PagesOptions::default()).with(Vec::len), 10);

        pages.goto(5);
        let compact = pages.pages(PagesOptions { ellipsis: true }).get();
        assert_eq!(
            compact,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }
}
