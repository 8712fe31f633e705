//! i18n - Table Strings
//!
//! Default user-facing strings for a data table, overridable key by key.

use serde::{Deserialize, Serialize};

/// Strings a table UI shows around the data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internationalization {
    pub search: String,
    pub show: String,
    pub entries: String,
    pub filter: String,
    /// Template with `{start}`, `{end}` and `{total}` placeholders
    pub row_count: String,
    pub no_rows: String,
    pub previous: String,
    pub next: String,
}

impl Default for Internationalization {
    fn default() -> Self {
        Self {
            search: "Search...".to_string(),
            show: "Show".to_string(),
            entries: "entries".to_string(),
            filter: "Filter".to_string(),
            row_count: "Showing {start} to {end} of {total} entries".to_string(),
            no_rows: "No entries found".to_string(),
            previous: "Previous".to_string(),
            next: "Next".to_string(),
        }
    }
}

/// Partial set of strings; every `Some` replaces the default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct I18nOverrides {
    pub search: Option<String>,
    pub show: Option<String>,
    pub entries: Option<String>,
    pub filter: Option<String>,
    pub row_count: Option<String>,
    pub no_rows: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl Internationalization {
    /// Defaults with `overrides` applied on top
    pub fn translate(overrides: Option<&I18nOverrides>) -> Self {
        let mut i18n = Self::default();
        if let Some(overrides) = overrides {
            i18n.merge(overrides);
        }
        i18n
    }

    /// Replace every string the overrides provide
    pub fn merge(&mut self, overrides: &I18nOverrides) {
        let pairs = [
            (&mut self.search, &overrides.search),
            (&mut self.show, &overrides.show),
            (&mut self.entries, &overrides.entries),
            (&mut self.filter, &overrides.filter),
            (&mut self.row_count, &overrides.row_count),
            (&mut self.no_rows, &overrides.no_rows),
            (&mut self.previous, &overrides.previous),
            (&mut self.next, &overrides.next),
        ];
        for (target, value) in pairs {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }
    }

    /// Substitute `{name}` placeholders in `template`
    ///
    /// # Example
    /// ```
    /// use data_handler::i18n::Internationalization;
    ///
    /// let i18n = Internationalization::default();
    /// let text = i18n.format("{count} rows", &[("count", "42")]);
    /// assert_eq!(text, "42 rows");
    /// ```
    pub fn format(&self, template: &str, args: &[(&str, &str)]) -> String {
        let mut result = template.to_string();
        for (name, value) in args {
            result = result.replace(&format!("{{{name}}}"), value);
        }
        result
    }
}
