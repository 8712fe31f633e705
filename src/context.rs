//! Context - Shared Table State
//!
//! Single source of truth for one data handler. Holds the writable stores and
//! defines every derived view as a pure function of them:
//!
//! ```text
//! rows, filters, search ──► filtered_rows ──► sorted_rows ──► paged_rows
//!                                    sorted ──┘      │
//!              total_rows, rows_per_page ──► page_count ──► pages, pages_with_ellipsis
//!                     page_number ──► row_count, selected ──► is_all_selected
//! ```
//!
//! The context has no behavior of its own; handlers mutate it.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::rc::Rc;

use crate::domain::page;
use crate::domain::{
    Direction, FilterRules, PageItem, Params, Row, RowCount, Selectable, Selection,
    SelectionBucket, SelectionScope, SortState, Value,
};
use crate::i18n::Internationalization;
use crate::observable::{Derived, Store};
use crate::state::State;

pub struct Context<R: Row> {
    pub rows: Store<Vec<R>>,
    pub rows_per_page: Store<Option<usize>>,
    pub page_number: Store<usize>,
    pub total_rows: Store<Option<usize>>,
    pub sorted: Store<SortState>,
    pub filters: Store<FilterRules>,
    pub search: Store<String>,
    pub selection: Store<Selection<R>>,
    pub selection_scope: Rc<Cell<SelectionScope>>,
    pub i18n: RefCell<Internationalization>,

    pub filtered_rows: Derived<Vec<R>>,
    pub sorted_rows: Derived<Vec<R>>,
    pub paged_rows: Derived<Vec<R>>,
    /// `total_rows` when set, else the number of visible rows
    pub effective_total: Derived<usize>,
    pub page_count: Derived<usize>,
    pub pages: Derived<Vec<PageItem>>,
    pub pages_with_ellipsis: Derived<Vec<PageItem>>,
    pub row_count: Derived<RowCount>,
    /// Entries of the selection bucket in scope
    pub selected: Derived<Vec<Selectable<R>>>,
    pub is_all_selected: Derived<bool>,
}

impl<R: Row> Context<R> {
    pub fn new(rows: Vec<R>, params: &Params) -> Self {
        let rows = Store::new(rows);
        let rows_per_page = Store::new(params.rows_per_page);
        let page_number = Store::new(1usize);
        let total_rows = Store::new(params.total_rows);
        let sorted = Store::new(SortState::default());
        let filters = Store::new(FilterRules::default());
        let search = Store::new(String::new());
        let selection = Store::new(Selection::new());
        let selection_scope = Rc::new(Cell::new(params.selection_scope));
        let i18n = RefCell::new(Internationalization::translate(params.i18n.as_ref()));

        let filtered_rows = {
            let (all, rules, term) = (rows.clone(), filters.clone(), search.clone());
            Derived::new(&[&rows, &filters, &search], move || {
                let needle = term.with(|s| s.to_lowercase());
                rules.with(|rules| all.with(|all| filter_rows(all, rules, &needle)))
            })
        };

        let sorted_rows = {
            let (filtered, sort) = (filtered_rows.clone(), sorted.clone());
            Derived::new(&[&filtered_rows, &sorted], move || {
                let rows = filtered.get();
                sort.with(|sort| sort_rows(rows, sort))
            })
        };

        let effective_total = {
            let (visible, external) = (sorted_rows.clone(), total_rows.clone());
            Derived::new(&[&sorted_rows, &total_rows], move || {
                external.get().unwrap_or_else(|| visible.with(Vec::len))
            })
        };

        let page_count = {
            let (total, rpp) = (effective_total.clone(), rows_per_page.clone());
            Derived::new(&[&effective_total, &rows_per_page], move || {
                page::page_count(total.get(), rpp.get())
            })
        };

        let paged_rows = {
            let (visible, current, rpp) =
                (sorted_rows.clone(), page_number.clone(), rows_per_page.clone());
            Derived::new(&[&sorted_rows, &page_number, &rows_per_page], move || {
                visible.with(|rows| {
                    let (start, end) = page::page_range(rows.len(), current.get(), rpp.get());
                    rows[start..end].to_vec()
                })
            })
        };

        let pages = {
            let count = page_count.clone();
            Derived::new(&[&page_count], move || page::pages(count.get()))
        };

        let pages_with_ellipsis = {
            let (count, current) = (page_count.clone(), page_number.clone());
            Derived::new(&[&page_count, &page_number], move || {
                page::pages_with_ellipsis(count.get(), current.get())
            })
        };

        let row_count = {
            let (total, current, rpp) =
                (effective_total.clone(), page_number.clone(), rows_per_page.clone());
            Derived::new(&[&effective_total, &page_number, &rows_per_page], move || {
                RowCount::compute(total.get(), current.get(), rpp.get())
            })
        };

        let selected = {
            let (buckets, current, scope) =
                (selection.clone(), page_number.clone(), Rc::clone(&selection_scope));
            Derived::new(&[&selection, &page_number], move || {
                let bucket = SelectionBucket::for_scope(scope.get(), current.get());
                buckets.with(|s| s.bucket(bucket).to_vec())
            })
        };

        // Follows the page through `selected` only, so navigation recomputes it once.
        let is_all_selected = {
            let (buckets, visible, current, rpp, scope) = (
                selection.clone(),
                sorted_rows.clone(),
                page_number.clone(),
                rows_per_page.clone(),
                Rc::clone(&selection_scope),
            );
            Derived::new(&[&selected, &sorted_rows, &rows_per_page], move || {
                let (scope, current) = (scope.get(), current.get());
                let bucket = SelectionBucket::for_scope(scope, current);
                visible.with(|rows| {
                    let rows = match scope {
                        SelectionScope::CurrentPage => {
                            let (start, end) = page::page_range(rows.len(), current, rpp.get());
                            &rows[start..end]
                        }
                        SelectionScope::AcrossPages => rows.as_slice(),
                    };
                    buckets.with(|selection| selection.covers(bucket, rows))
                })
            })
        };

        Self {
            rows,
            rows_per_page,
            page_number,
            total_rows,
            sorted,
            filters,
            search,
            selection,
            selection_scope,
            i18n,
            filtered_rows,
            sorted_rows,
            paged_rows,
            effective_total,
            page_count,
            pages,
            pages_with_ellipsis,
            row_count,
            selected,
            is_all_selected,
        }
    }

    pub fn selection_scope(&self) -> SelectionScope {
        self.selection_scope.get()
    }

    /// Bucket that selection operations currently act on
    pub fn selection_bucket(&self) -> SelectionBucket {
        SelectionBucket::for_scope(self.selection_scope(), self.page_number.get())
    }

    /// Rows `select_all` and `is_all_selected` consider
    pub fn scope_rows(&self) -> Vec<R> {
        match self.selection_scope() {
            SelectionScope::CurrentPage => self.paged_rows.get(),
            SelectionScope::AcrossPages => self.sorted_rows.get(),
        }
    }

    /// Whether a page bound is enforceable: rows per page set and a non-zero total
    pub fn has_known_bounds(&self) -> bool {
        self.rows_per_page.get().is_some_and(|rpp| rpp > 0) && self.effective_total.get() > 0
    }

    /// Snapshot of the settings a trigger callback or a remote backend needs
    pub fn state(&self) -> State {
        let page_number = self.page_number.get();
        let rows_per_page = self.rows_per_page.get();
        State {
            page_number,
            rows_per_page,
            offset: rows_per_page
                .map_or(0, |rpp| page_number.saturating_sub(1).saturating_mul(rpp)),
            search: self.search.get(),
            sort: self.sorted.get(),
            filters: self.filters.with(FilterRules::to_rules),
            total_rows: self.total_rows.get(),
            selection_scope: self.selection_scope(),
            i18n: self.i18n.borrow().clone(),
        }
    }
}

/// Rows passing every filter rule and the lowercase search `needle`
pub fn filter_rows<R: Row>(rows: &[R], filters: &FilterRules, needle: &str) -> Vec<R> {
    rows.iter()
        .filter(|row| filters.matches(*row) && matches_search(*row, needle))
        .cloned()
        .collect()
}

/// A row passes the search if any field value contains the needle
pub fn matches_search<R: Row>(row: &R, needle: &str) -> bool {
    needle.is_empty() || row.values().iter().any(|v| v.contains_ignore_case(needle))
}

/// Stable single-field sort; missing and null values go last in both directions
pub fn sort_rows<R: Row>(rows: Vec<R>, sort: &SortState) -> Vec<R> {
    let Some(key) = sort.identifier.as_deref() else {
        return rows;
    };
    let descending = sort.direction == Some(Direction::Desc);

    let mut keyed: Vec<(Value, R)> = rows
        .into_iter()
        .map(|row| (row.field(key).unwrap_or_default(), row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if descending => b.sort_cmp(a),
        (false, false) => a.sort_cmp(b),
    });

    keyed.into_iter().map(|(_, row)| row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value as Json, json};

    fn people() -> Vec<Json> {
        vec![
            json!({ "name": "Alice", "age": 30 }),
            json!({ "name": "Bob", "age": null }),
            json!({ "name": "Anna", "age": 25 }),
            json!({ "name": "carl", "age": 41 }),
        ]
    }

    fn names(rows: &[Json]) -> Vec<&str> {
        rows.iter().filter_map(|r| r["name"].as_str()).collect()
    }

    #[test]
    fn search_keeps_original_relative_order() {
        let rows = vec![json!({ "n": "Alice" }), json!({ "n": "Bob" }), json!({ "n": "Anna" })];
        let context = Context::new(rows, &Params::default());
        context.search.set("a".to_string());

        let filtered = context.filtered_rows.get();
        assert_eq!(filtered, vec![json!({ "n": "Alice" }), json!({ "n": "Anna" })]);
    }

    #[test]
    fn nulls_sort_last_in_both_directions() {
        let asc = sort_rows(people(), &SortState::new("age", Direction::Asc));
        assert_eq!(names(&asc), vec!["Anna", "Alice", "carl", "Bob"]);

        let desc = sort_rows(people(), &SortState::new("age", Direction::Desc));
        assert_eq!(names(&desc), vec!["carl", "Alice", "Anna", "Bob"]);
    }

    #[test]
    fn unsorted_keeps_input_order() {
        let rows = sort_rows(people(), &SortState::unsorted());
        assert_eq!(rows, people());
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let rows = vec![
            json!({ "id": 1, "team": "b" }),
            json!({ "id": 2, "team": "a" }),
            json!({ "id": 3, "team": "b" }),
            json!({ "id": 4, "team": "a" }),
        ];
        let sorted = sort_rows(rows, &SortState::new("team", Direction::Asc));
        let ids: Vec<_> = sorted.iter().filter_map(|r| r["id"].as_i64()).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn derived_views_follow_every_store() {
        let rows: Vec<Json> = (1..=12).map(|i| json!({ "id": i })).collect();
        let context = Context::new(rows, &Params::default());

        assert_eq!(context.page_count.get(), 3);
        assert_eq!(context.paged_rows.with(Vec::len), 5);

        context.page_number.set(3);
        assert_eq!(context.paged_rows.with(Vec::len), 2);
        assert_eq!(context.row_count.get(), RowCount { total: 12, start: 11, end: 12 });

        context.total_rows.set(Some(100));
        assert_eq!(context.page_count.get(), 20);
        assert_eq!(context.row_count.get().total, 100);

        context.rows_per_page.set(None);
        assert_eq!(context.page_count.get(), 1);
        assert_eq!(context.pages.get(), vec![PageItem::Page(1)]);
    }

    #[test]
    fn sorted_rows_is_a_permutation_of_filtered_rows() {
        let context = Context::new(people(), &Params::unpaginated());
        context.filters.update(|f| f.upsert("name", "a".into()));
        context.sorted.set(SortState::new("name", Direction::Desc));

        let mut filtered = names(&context.filtered_rows.get())
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let mut sorted = names(&context.sorted_rows.get())
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        assert_eq!(sorted, vec!["carl", "Anna", "Alice"]);

        filtered.sort();
        sorted.sort();
        assert_eq!(filtered, sorted);
    }

    #[test]
    fn navigation_settles_is_all_selected_in_one_step() {
        let rows: Vec<Json> = (1..=12).map(|i| json!({ "id": i })).collect();
        let context = Context::new(rows.clone(), &Params::default());
        context.selection.update(|selection| {
            let page = |range: std::ops::Range<usize>| {
                rows[range].iter().cloned().map(Selectable::Row).collect()
            };
            selection.replace(SelectionBucket::Page(1), page(0..5));
            selection.replace(SelectionBucket::Page(2), page(5..10));
        });
        assert!(context.is_all_selected.get());

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = context
            .is_all_selected
            .subscribe(move |all| sink.borrow_mut().push(*all));

        context.page_number.set(2);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn state_snapshot_reports_offset() {
        let context: Context<Json> = Context::new(Vec::new(), &Params::default().rows_per_page(10));
        context.page_number.set(3);
        let state = context.state();
        assert_eq!(state.offset, 20);
        assert_eq!(state.page_number, 3);
        assert_eq!(state.rows_per_page, Some(10));
    }
}
