//! Page - Pagination Arithmetic
//!
//! Pure functions behind the page-related derived views.

use serde::{Deserialize, Serialize};

use crate::i18n::Internationalization;

/// One entry of a page list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageItem {
    Page(usize),
    /// Stands in for a run of hidden pages
    Ellipsis,
}

impl PageItem {
    pub fn number(&self) -> Option<usize> {
        match self {
            PageItem::Page(n) => Some(*n),
            PageItem::Ellipsis => None,
        }
    }
}

/// Where `set_page` should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    Number(usize),
    Previous,
    Next,
}

impl From<usize> for PageTarget {
    fn from(n: usize) -> Self {
        PageTarget::Number(n)
    }
}

/// Options for `pages`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagesOptions {
    pub ellipsis: bool,
}

/// 1-based inclusive range of rows shown on the current page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCount {
    pub total: usize,
    pub start: usize,
    pub end: usize,
}

impl RowCount {
    pub fn compute(total: usize, page_number: usize, rows_per_page: Option<usize>) -> Self {
        if total == 0 {
            return Self::default();
        }
        match rows_per_page {
            Some(rpp) if rpp > 0 => {
                let offset = page_number.saturating_sub(1).saturating_mul(rpp);
                // A page past the last row shows nothing.
                if offset >= total {
                    return Self { total, start: 0, end: 0 };
                }
                let end = offset.saturating_add(rpp).min(total);
                Self { total, start: offset + 1, end }
            }
            _ => Self {
                total,
                start: 1,
                end: total,
            },
        }
    }

    /// Render the `row_count` template, or `no_rows` when there is nothing to show
    pub fn describe(&self, i18n: &Internationalization) -> String {
        if self.total == 0 {
            return i18n.no_rows.clone();
        }
        i18n.format(
            &i18n.row_count,
            &[
                ("start", &self.start.to_string()),
                ("end", &self.end.to_string()),
                ("total", &self.total.to_string()),
            ],
        )
    }
}

/// `ceil(total / rows_per_page)`, or 1 when unpaginated
pub fn page_count(total: usize, rows_per_page: Option<usize>) -> usize {
    match rows_per_page {
        Some(rpp) if rpp > 0 => total.div_ceil(rpp),
        _ => 1,
    }
}

/// Every page number from 1 to `count`
pub fn pages(count: usize) -> Vec<PageItem> {
    (1..=count).map(PageItem::Page).collect()
}

/// Page list keeping first, last, current and its neighbours.
///
/// A run of two or more hidden pages collapses into one [`PageItem::Ellipsis`];
/// a single hidden page is kept, since the marker would not save any room.
pub fn pages_with_ellipsis(count: usize, current: usize) -> Vec<PageItem> {
    let visible = |n: usize| n == 1 || n == count || n.abs_diff(current) <= 1;

    let mut items = Vec::new();
    let mut hidden = Vec::new();
    for n in 1..=count {
        if visible(n) {
            flush_hidden(&mut items, &mut hidden);
            items.push(PageItem::Page(n));
        } else {
            hidden.push(n);
        }
    }
    flush_hidden(&mut items, &mut hidden);
    items
}

fn flush_hidden(items: &mut Vec<PageItem>, hidden: &mut Vec<usize>) {
    match hidden.as_slice() {
        [] => {}
        [single] => items.push(PageItem::Page(*single)),
        _ => items.push(PageItem::Ellipsis),
    }
    hidden.clear();
}

/// Index range of `page_number` inside a list of `len` rows
pub fn page_range(len: usize, page_number: usize, rows_per_page: Option<usize>) -> (usize, usize) {
    match rows_per_page {
        Some(rpp) if rpp > 0 => {
            let start = page_number.saturating_sub(1).saturating_mul(rpp).min(len);
            let end = start.saturating_add(rpp).min(len);
            (start, end)
        }
        _ => (0, len),
    }
}
