//! Config - Data Handler Construction Parameters

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{InvalidSnafu, Result};
use crate::i18n::I18nOverrides;

use super::selection::SelectionScope;

/// Parameters accepted by `DataHandler::new`
///
/// ```toml
/// rows_per_page = 10
/// selection_scope = "acrossPages"
///
/// [i18n]
/// noRows = "Nothing here"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Rows per page; `None` shows every row on a single page
    pub rows_per_page: Option<usize>,
    /// Externally known row count, overriding the number of visible rows
    pub total_rows: Option<usize>,
    /// Overrides for the default table strings
    pub i18n: Option<I18nOverrides>,
    /// Whether selection is kept per page or across pages
    pub selection_scope: SelectionScope,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            rows_per_page: Some(5),
            total_rows: None,
            i18n: None,
            selection_scope: SelectionScope::default(),
        }
    }
}

impl Params {
    /// Parameters for a table without pagination
    pub fn unpaginated() -> Self {
        Self {
            rows_per_page: None,
            ..Self::default()
        }
    }

    pub fn rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = Some(rows_per_page);
        self
    }

    pub fn total_rows(mut self, total_rows: usize) -> Self {
        self.total_rows = Some(total_rows);
        self
    }

    pub fn i18n(mut self, overrides: I18nOverrides) -> Self {
        self.i18n = Some(overrides);
        self
    }

    pub fn selection_scope(mut self, scope: SelectionScope) -> Self {
        self.selection_scope = scope;
        self
    }

    /// Parse and validate parameters from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let params: Params = toml::from_str(content)?;
        params.validate()?;
        Ok(params)
    }

    /// Load parameters from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.rows_per_page != Some(0),
            InvalidSnafu {
                message: "rows_per_page must be positive or omitted",
            }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn defaults_to_five_rows_per_page() {
        let params = Params::default();
        assert_eq!(params.rows_per_page, Some(5));
        assert_eq!(params.selection_scope, SelectionScope::CurrentPage);
    }

    #[test]
    fn parses_toml_with_i18n_overrides() {
        let params = Params::from_toml_str(
            r#"
            rows_per_page = 10
            total_rows = 250
            selection_scope = "acrossPages"

            [i18n]
            noRows = "Nothing here"
            "#,
        )
        .expect("valid params");

        assert_eq!(params.rows_per_page, Some(10));
        assert_eq!(params.total_rows, Some(250));
        assert_eq!(params.selection_scope, SelectionScope::AcrossPages);
        let i18n = params.i18n.expect("i18n section");
        assert_eq!(i18n.no_rows.as_deref(), Some("Nothing here"));
        assert_eq!(i18n.search, None);
    }

    #[test]
    fn rejects_zero_rows_per_page() {
        let result = Params::from_toml_str("rows_per_page = 0");
        assert!(matches!(result, Err(Error::Invalid { .. })));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Params::from_toml_str("rows_per_page = \"ten\"");
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }
}
