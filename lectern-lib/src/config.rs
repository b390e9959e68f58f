//! Application configuration

use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::state::ThemeMode;
use crate::table::{Labels, TableConfig};
use crate::tree::TreeConfig;

/// Top-level configuration, read from a JSON file.
///
/// Every field is optional in the file; anything left out takes its default.
///
/// # Example
///
/// ```
/// use lectern_lib::config::LecternConfig;
/// use lectern_lib::state::ThemeMode;
///
/// let config: LecternConfig = serde_json::from_str(
///     r#"{"theme": "dark", "table": {"page_delta": 1}}"#,
/// ).unwrap();
/// assert_eq!(config.theme, ThemeMode::Dark);
/// assert_eq!(config.table.page_delta, 1);
/// assert_eq!(config.table.max_full_pages, 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LecternConfig {
    /// User-facing strings and value formatting.
    pub labels: Labels,

    pub table: TableConfig,

    pub tree: TreeConfig,

    /// Default: system
    pub theme: ThemeMode,

    /// Default: false
    pub sidebar_collapsed: bool,

    /// Country preselected in the header, as an alpha-2 code.
    ///
    /// Default: none
    pub default_country: Option<String>,
}

impl LecternConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_table(mut self, table: TableConfig) -> Self {
        self.table = table;
        self
    }

    pub fn with_tree(mut self, tree: TreeConfig) -> Self {
        self.tree = tree;
        self
    }

    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_sidebar_collapsed(mut self, collapsed: bool) -> Self {
        self.sidebar_collapsed = collapsed;
        self
    }

    pub fn with_default_country(mut self, code: impl Into<String>) -> Self {
        self.default_country = Some(code.into());
        self
    }
}
