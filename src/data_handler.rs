//! DataHandler - Public Facade
//!
//! The only type callers touch. Owns one [`Context`] and one instance of every
//! handler, exposes live views for observers, and fires the matching [`Event`]
//! after each mutating operation once every derived view has settled.

use std::rc::Rc;

use crate::context::Context;
use crate::domain::{
    FilterRules, FilterValue, PageItem, PageTarget, PagesOptions, Params, Row, RowCount,
    Selectable, SelectionScope, SortParams, SortState,
};
use crate::error::{CallbackError, Result};
use crate::handlers::{
    Event, FilterHandler, PageHandler, SearchHandler, SelectHandler, SortHandler, TriggerHandler,
};
use crate::i18n::{I18nOverrides, Internationalization};
use crate::observable::{Derived, Store};
use crate::state::State;

pub struct DataHandler<R: Row> {
    context: Rc<Context<R>>,
    trigger_handler: TriggerHandler<R>,
    sort_handler: SortHandler<R>,
    select_handler: SelectHandler<R>,
    page_handler: PageHandler<R>,
    search_handler: SearchHandler<R>,
    filter_handler: FilterHandler<R>,
}

impl<R: Row> DataHandler<R> {
    pub fn new(rows: Vec<R>, mut params: Params) -> Self {
        if params.rows_per_page == Some(0) {
            tracing::warn!("rows_per_page = 0 is not a page size, showing all rows");
            params.rows_per_page = None;
        }

        let context = Rc::new(Context::new(rows, &params));
        Self {
            trigger_handler: TriggerHandler::new(Rc::clone(&context)),
            sort_handler: SortHandler::new(Rc::clone(&context)),
            select_handler: SelectHandler::new(Rc::clone(&context)),
            page_handler: PageHandler::new(Rc::clone(&context)),
            search_handler: SearchHandler::new(Rc::clone(&context)),
            filter_handler: FilterHandler::new(Rc::clone(&context)),
            context,
        }
    }

    /// Handler with default parameters (5 rows per page)
    pub fn with_defaults(rows: Vec<R>) -> Self {
        Self::new(rows, Params::default())
    }

    // ==================== Rows ====================

    /// Replace every row; the page number is kept
    pub fn set_rows(&mut self, rows: Vec<R>) -> Result<()> {
        let context = Rc::clone(&self.context);
        self.trigger_handler
            .run_with(Event::SetRows, || context.rows.set(rows))
    }

    /// Override the row count used for pagination; the page number is kept
    pub fn set_total_rows(&mut self, total_rows: Option<usize>) -> Result<()> {
        let context = Rc::clone(&self.context);
        self.trigger_handler
            .run_with(Event::SetTotalRows, || context.total_rows.set(total_rows))
    }

    pub fn rows(&self) -> Store<Vec<R>> {
        self.context.rows.clone()
    }

    pub fn filtered_rows(&self) -> Derived<Vec<R>> {
        self.context.filtered_rows.clone()
    }

    pub fn sorted_rows(&self) -> Derived<Vec<R>> {
        self.context.sorted_rows.clone()
    }

    /// Rows on the current page, after filtering, search and sorting
    pub fn paged_rows(&self) -> Derived<Vec<R>> {
        self.context.paged_rows.clone()
    }

    // ==================== Selection ====================

    pub fn select(&mut self, value: impl Into<Selectable<R>>) -> Result<()> {
        self.select_handler.select(value.into());
        self.trigger_handler.run(Event::Select)
    }

    pub fn selected(&self) -> Derived<Vec<Selectable<R>>> {
        self.context.selected.clone()
    }

    /// Select every row in scope, reduced to the `select_by` field when given;
    /// clears the scope instead when everything is already selected
    pub fn select_all(&mut self, select_by: Option<&str>) -> Result<()> {
        self.select_handler.select_all(select_by);
        self.trigger_handler.run(Event::SelectAll)
    }

    pub fn clear_selection(&mut self) -> Result<()> {
        self.select_handler.clear();
        self.trigger_handler.run(Event::Select)
    }

    pub fn is_all_selected(&self) -> Derived<bool> {
        self.context.is_all_selected.clone()
    }

    pub fn set_selection_scope(&mut self, scope: SelectionScope) {
        self.select_handler.set_scope(scope);
    }

    // ==================== Sorting ====================

    pub fn sort(&mut self, order_by: &str) -> Result<()> {
        self.sort_handler.sort(order_by);
        self.trigger_handler.run(Event::Sort)
    }

    pub fn sort_asc(&mut self, order_by: &str) -> Result<()> {
        self.sort_handler.sort_asc(order_by);
        self.trigger_handler.run(Event::Sort)
    }

    pub fn sort_desc(&mut self, order_by: &str) -> Result<()> {
        self.sort_handler.sort_desc(order_by);
        self.trigger_handler.run(Event::Sort)
    }

    pub fn apply_sorting(&mut self, params: Option<SortParams>) -> Result<()> {
        self.sort_handler.apply_sorting(params);
        self.trigger_handler.run(Event::Sort)
    }

    pub fn clear_sort(&mut self) -> Result<()> {
        self.sort_handler.clear();
        self.trigger_handler.run(Event::Sort)
    }

    pub fn sorted(&self) -> Store<SortState> {
        self.context.sorted.clone()
    }

    // ==================== Search & Filters ====================

    pub fn search(&mut self, term: &str) -> Result<()> {
        self.search_handler.set(term);
        self.trigger_handler.run(Event::Search)
    }

    pub fn clear_search(&mut self) -> Result<()> {
        self.search_handler.remove();
        self.trigger_handler.run(Event::ClearSearch)
    }

    pub fn search_term(&self) -> Store<String> {
        self.context.search.clone()
    }

    pub fn filter(&mut self, value: impl Into<FilterValue>, filter_by: &str) -> Result<()> {
        self.filter_handler.set(value.into(), filter_by);
        self.trigger_handler.run(Event::Filter)
    }

    pub fn remove_filter(&mut self, filter_by: &str) -> Result<()> {
        self.filter_handler.remove_one(filter_by);
        self.trigger_handler.run(Event::Filter)
    }

    pub fn clear_filters(&mut self) -> Result<()> {
        self.filter_handler.remove();
        self.trigger_handler.run(Event::ClearFilters)
    }

    pub fn filters(&self) -> Store<FilterRules> {
        self.context.filters.clone()
    }

    // ==================== Pagination ====================

    pub fn pages(&self, options: PagesOptions) -> Derived<Vec<PageItem>> {
        self.page_handler.pages(options)
    }

    pub fn page_count(&self) -> Derived<usize> {
        self.context.page_count.clone()
    }

    pub fn page_number(&self) -> Store<usize> {
        self.context.page_number.clone()
    }

    /// Navigate to a page. Out-of-range requests are ignored: no state change and
    /// no `SetPage` event.
    pub fn set_page(&mut self, target: impl Into<PageTarget>) -> Result<()> {
        let accepted = match target.into() {
            PageTarget::Number(number) => self.page_handler.goto(number),
            PageTarget::Previous => self.page_handler.previous(),
            PageTarget::Next => self.page_handler.next(),
        };
        if !accepted {
            return Ok(());
        }
        self.trigger_handler.run(Event::SetPage)
    }

    pub fn rows_per_page(&self) -> Store<Option<usize>> {
        self.context.rows_per_page.clone()
    }

    /// Change the page size and go back to page 1
    pub fn set_rows_per_page(&mut self, rows_per_page: Option<usize>) -> Result<()> {
        self.context.rows_per_page.set(rows_per_page.filter(|rpp| *rpp > 0));
        self.refresh_rows_per_page()
    }

    /// Settle after the `rows_per_page` store was written directly: go back to
    /// page 1 and fire `SetRowsPerPage`
    pub fn refresh_rows_per_page(&mut self) -> Result<()> {
        crate::handlers::reset_to_first_page(&self.context);
        self.trigger_handler.run(Event::SetRowsPerPage)
    }

    pub fn row_count(&self) -> Derived<RowCount> {
        self.page_handler.row_count()
    }

    /// Row-count sentence for the current page, e.g. "Showing 1 to 5 of 12 entries"
    pub fn row_count_text(&self) -> String {
        self.context
            .row_count
            .get()
            .describe(&self.context.i18n.borrow())
    }

    // ==================== Events & State ====================

    /// Register the callback for `event`; a later registration replaces it
    pub fn on(
        &mut self,
        event: Event,
        callback: impl FnMut(&State) -> std::result::Result<(), CallbackError> + 'static,
    ) {
        self.trigger_handler.set_action(event, callback);
    }

    pub fn state(&self) -> State {
        self.context.state()
    }

    pub fn i18n(&self) -> Internationalization {
        self.context.i18n.borrow().clone()
    }

    /// Apply string overrides on top of the current strings
    pub fn translate(&mut self, overrides: &I18nOverrides) -> Internationalization {
        let mut i18n = self.context.i18n.borrow_mut();
        i18n.merge(overrides);
        i18n.clone()
    }
}
