//! Device-independent render model produced by [`DataTable::render`](super::DataTable::render).

use super::column::Alignment;
use super::config::TableConfig;
use super::pagination::{PageItem, Pagination};
use super::selection::CheckState;
use super::sort::SortIndicator;
use crate::icons::Icon;

/// A fully resolved table, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<K> {
    /// Header checkbox, present when rows are selectable.
    pub select_all: Option<CheckState>,
    pub headers: Vec<HeaderCell>,
    pub body: Body<K>,
    /// Present only when there is more than one page.
    pub pagination: Option<PaginationBar>,
}

impl<K> TableView<K> {
    /// Number of grid columns a spanning row covers, checkbox included.
    pub fn span(&self) -> usize {
        self.headers.len() + usize::from(self.select_all.is_some())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub indicator: SortIndicator,
    pub width: Option<u16>,
    pub align: Alignment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body<K> {
    /// A single row spanning every column.
    Loading { message: String },
    /// A single row spanning every column.
    Empty { icon: Icon, message: String },
    Rows(Vec<RowView<K>>),
}

impl<K> Body<K> {
    /// Number of body rows that will be drawn.
    pub fn row_count(&self) -> usize {
        match self {
            Body::Loading { .. } | Body::Empty { .. } => 1,
            Body::Rows(rows) => rows.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView<K> {
    pub key: K,
    /// Row checkbox, present when rows are selectable.
    pub checkbox: Option<CheckState>,
    pub depth: usize,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationBar {
    pub current_page: u32,
    pub last_page: u32,
    pub from: u64,
    pub to: u64,
    pub total: u64,
    pub previous: PageButton,
    pub next: PageButton,
    pub pages: Vec<PageItem>,
}

impl PaginationBar {
    /// Resolve the bar for a page state, windowing page numbers per `config`.
    pub fn new(page: &Pagination, config: &TableConfig) -> Self {
        Self {
            current_page: page.current_page,
            last_page: page.last_page,
            from: page.from(),
            to: page.to(),
            total: page.total,
            previous: PageButton {
                target: page.current_page.saturating_sub(1),
                enabled: page.has_previous(),
            },
            next: PageButton {
                target: page.current_page.saturating_add(1),
                enabled: page.has_next(),
            },
            pages: page.window(config.page_delta, config.max_full_pages),
        }
    }
}

/// A previous/next button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// Page requested on click.
    pub target: u32,
    pub enabled: bool,
}
