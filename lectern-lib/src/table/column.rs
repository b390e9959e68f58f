//! Column definitions.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::row::TableRow;
use crate::model::Value;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Custom cell renderer: receives the resolved value (if any) and the row.
pub type CellRenderer<T> = Arc<dyn Fn(Option<&Value>, &T) -> String + Send + Sync>;

/// Column configuration.
///
/// Columns define the structure of the table: which row field to show,
/// header text, width, alignment, and whether the column is sortable.
/// They hold no state and are cheap to rebuild for every render.
///
/// # Examples
///
/// ```
/// use lectern_lib::model::Record;
/// use lectern_lib::table::{Alignment, Column};
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::new("id", "ID").width(6),
///     Column::new("title", "Title").sortable(),
///     Column::new("author.name", "Author"),
///     Column::new("views", "Views").align(Alignment::Right),
/// ];
/// ```
pub struct Column<T> {
    /// Row field to display; may be a dotted path like `"author.name"`.
    pub key: String,
    /// Column header text.
    pub title: String,
    /// Whether clicking the header requests a sort.
    pub sortable: bool,
    /// Fixed width in terminal columns, or `None` to fit content.
    pub width: Option<u16>,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Replaces default formatting when set.
    pub render: Option<CellRenderer<T>>,
}

impl<T: TableRow> Column<T> {
    /// Create a new column for the given key and header text.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            width: None,
            align: Alignment::Left,
            render: None,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a fixed width for this column.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Render cells with a custom function instead of default formatting.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Option<&Value>, &T) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            sortable: self.sortable,
            width: self.width,
            align: self.align,
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// A column described in configuration or on the command line.
///
/// Parses `key`, `key:Title`, and `key:Title:right` forms. A trailing `*` on
/// the key marks the column sortable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub width: Option<u16>,
    #[serde(default)]
    pub align: Alignment,
}

impl ColumnSpec {
    pub fn parse(spec: &str) -> Self {
        let mut parts = spec.splitn(3, ':');
        let raw_key = parts.next().unwrap_or_default().trim();
        let (key, sortable) = match raw_key.strip_suffix('*') {
            Some(key) => (key, true),
            None => (raw_key, false),
        };
        let title = parts
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| title_case(key));
        let align = match parts.next().map(str::trim) {
            Some("right") => Alignment::Right,
            Some("center") => Alignment::Center,
            _ => Alignment::Left,
        };
        Self {
            key: key.to_string(),
            title,
            sortable,
            width: None,
            align,
        }
    }

    pub fn to_column<T: TableRow>(&self) -> Column<T> {
        let mut column = Column::new(self.key.clone(), self.title.clone()).align(self.align);
        column.sortable = self.sortable;
        column.width = self.width;
        column
    }
}

/// `"author.first_name"` becomes `"Author First Name"`.
fn title_case(key: &str) -> String {
    key.split(['.', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
