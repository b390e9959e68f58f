//! DataTable - a generic presentational table.
//!
//! Columns resolve values from rows by (dotted) key, headers request sorts,
//! a checkbox column tracks a tri-state selection, and a numbered pagination
//! bar collapses long page ranges with ellipses. The table is fully
//! controlled: every change is requested through a [`TableEvent`] and
//! applied by the owner.
//!
//! # Example
//!
//! ```
//! use lectern_lib::model::Record;
//! use lectern_lib::table::{Column, DataTable, Labels, Pagination, TableConfig, render_text};
//!
//! let rows: Vec<Record> = serde_json::from_str(
//!     r#"[{"id": 1, "title": "Cells", "author": {"name": "Rosalind"}}]"#,
//! ).unwrap();
//! let columns = vec![
//!     Column::new("title", "Title").sortable(),
//!     Column::new("author.name", "Author"),
//! ];
//! let page = Pagination::new(1, 5, 1, 5);
//!
//! let view = DataTable::new(&rows, &columns).pagination(&page).render();
//! let text = render_text(&view, &TableConfig::default(), &Labels::default());
//! assert!(text.contains("Rosalind"));
//! assert!(text.contains("[1] 2 3 4 5"));
//! ```

mod column;
mod config;
mod data_table;
mod events;
mod format;
mod pagination;
mod response;
mod row;
pub mod selection;
mod sort;
mod text;
mod view;

pub use column::{Alignment, CellRenderer, Column, ColumnSpec};
pub use config::TableConfig;
pub use data_table::DataTable;
pub use events::{TableEvent, next_sort};
pub use format::{Labels, format_value};
pub use pagination::{PageItem, Pagination, page_window};
pub use response::{ListResponse, PagedList};
pub use row::TableRow;
pub use selection::CheckState;
pub use sort::{SortIndicator, SortOrder};
pub use text::{align_to_width, pagination_line, render_text, truncate_to_width};
pub use view::{Body, HeaderCell, PageButton, PaginationBar, RowView, TableView};
