//! Table configuration

use serde::{Deserialize, Serialize};

/// Configuration for table pagination.
///
/// # Example
///
/// ```
/// use lectern_lib::table::TableConfig;
///
/// let config = TableConfig::default().with_page_delta(1);
/// assert_eq!(config.max_full_pages, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Pages shown either side of the current page.
    ///
    /// Default: 2
    pub page_delta: u32,

    /// Up to this many pages, every page number is shown.
    ///
    /// Default: 7
    pub max_full_pages: u32,

    /// Upper bound for content-fitted column widths in text output.
    ///
    /// Default: 40
    pub max_column_width: u16,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_delta: 2,
            max_full_pages: 7,
            max_column_width: 40,
        }
    }
}

impl TableConfig {
    /// Creates a new table config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page window delta.
    pub fn with_page_delta(mut self, delta: u32) -> Self {
        self.page_delta = delta;
        self
    }

    /// Sets the show-all threshold.
    pub fn with_max_full_pages(mut self, pages: u32) -> Self {
        self.max_full_pages = pages;
        self
    }

    /// Sets the maximum fitted column width.
    pub fn with_max_column_width(mut self, width: u16) -> Self {
        self.max_column_width = width;
        self
    }
}
