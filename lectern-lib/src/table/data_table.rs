//! The DataTable component.

use std::borrow::Cow;

use log::trace;

use super::column::Column;
use super::config::TableConfig;
use super::events::TableEvent;
use super::format::{Labels, format_value};
use super::pagination::Pagination;
use super::row::TableRow;
use super::selection::{self, CheckState};
use super::sort::{SortIndicator, SortOrder};
use super::view::{Body, HeaderCell, PaginationBar, RowView, TableView};

/// A controlled, presentation-only table.
///
/// `DataTable` borrows everything it shows (rows, columns, pagination,
/// sort and selection) from its owner for one render and keeps nothing
/// afterwards. Interaction methods such as [`click_header`](Self::click_header)
/// return the [`TableEvent`] the owner should apply, and also pass it to the
/// callback set with [`on_event`](Self::on_event). The table never reorders
/// rows, never fetches, and never validates page numbers.
///
/// # Example
///
/// ```
/// use lectern_lib::model::Category;
/// use lectern_lib::table::{Body, Column, DataTable, TableEvent};
///
/// let rows = vec![
///     Category::new(1, None).with("name", "Science"),
///     Category::new(2, None).with("name", "History"),
/// ];
/// let columns = vec![Column::new("name", "Name").sortable()];
/// let selected = vec![rows[0].clone()];
///
/// let table = DataTable::new(&rows, &columns).selectable(&selected);
/// let view = table.render();
/// assert!(matches!(view.body, Body::Rows(ref r) if r.len() == 2));
///
/// // Indeterminate header: clicking selects every visible row.
/// assert_eq!(
///     table.click_select_all(),
///     Some(TableEvent::SelectionChanged(rows.clone()))
/// );
/// ```
pub struct DataTable<'a, T: TableRow> {
    rows: &'a [T],
    columns: &'a [Column<T>],
    loading: bool,
    pagination: Option<&'a Pagination>,
    sort_by: Option<&'a str>,
    sort_order: SortOrder,
    /// `Some` when rows are selectable.
    selected: Option<&'a [T]>,
    labels: Cow<'a, Labels>,
    config: TableConfig,
    on_event: Option<&'a dyn Fn(&TableEvent<T>)>,
}

impl<'a, T: TableRow> DataTable<'a, T> {
    /// Create a table over the given rows and columns.
    pub fn new(rows: &'a [T], columns: &'a [Column<T>]) -> Self {
        Self {
            rows,
            columns,
            loading: false,
            pagination: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            selected: None,
            labels: Cow::Owned(Labels::default()),
            config: TableConfig::default(),
            on_event: None,
        }
    }

    /// Show the loading row instead of the data.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Show a pagination bar for this state.
    pub fn pagination(mut self, pagination: &'a Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Mark the active sort column and direction.
    pub fn sort(mut self, sort_by: &'a str, order: SortOrder) -> Self {
        self.sort_by = Some(sort_by);
        self.sort_order = order;
        self
    }

    /// Enable the checkbox column with the given selection.
    pub fn selectable(mut self, selected: &'a [T]) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Use custom labels.
    pub fn labels(mut self, labels: &'a Labels) -> Self {
        self.labels = Cow::Borrowed(labels);
        self
    }

    /// Use a custom table config.
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Callback invoked with every requested event.
    pub fn on_event(mut self, callback: &'a dyn Fn(&TableEvent<T>)) -> Self {
        self.on_event = Some(callback);
        self
    }

    pub fn rows(&self) -> &'a [T] {
        self.rows
    }

    pub fn columns(&self) -> &'a [Column<T>] {
        self.columns
    }

    pub fn is_selectable(&self) -> bool {
        self.selected.is_some()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Resolve and format one cell.
    pub fn cell_text(&self, row: &T, column: &Column<T>) -> String {
        let value = row.value(&column.key);
        match &column.render {
            Some(render) => render(value.as_ref(), row),
            None => format_value(value.as_ref(), &self.labels),
        }
    }

    /// State of the header checkbox.
    pub fn select_all_state(&self) -> Option<CheckState> {
        self.selected
            .map(|selected| selection::header_state(self.rows.len(), selected.len()))
    }

    /// Build the render model for the current props.
    pub fn render(&self) -> TableView<T::Key> {
        let headers = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                indicator: SortIndicator::for_column(
                    column.sortable,
                    &column.key,
                    self.sort_by,
                    self.sort_order,
                ),
                width: column.width,
                align: column.align,
            })
            .collect();

        let body = if self.loading {
            Body::Loading {
                message: self.labels.loading.clone(),
            }
        } else if self.rows.is_empty() {
            Body::Empty {
                icon: self.labels.empty_icon,
                message: self.labels.empty_message.clone(),
            }
        } else {
            Body::Rows(self.rows.iter().map(|row| self.render_row(row)).collect())
        };

        TableView {
            select_all: self.select_all_state(),
            headers,
            body,
            pagination: self.pagination_bar(),
        }
    }

    fn render_row(&self, row: &T) -> RowView<T::Key> {
        RowView {
            key: row.key(),
            checkbox: self
                .selected
                .map(|selected| CheckState::from(selection::is_selected(selected, row))),
            depth: row.depth(),
            cells: self
                .columns
                .iter()
                .map(|column| self.cell_text(row, column))
                .collect(),
        }
    }

    fn pagination_bar(&self) -> Option<PaginationBar> {
        let page = self.pagination.filter(|p| p.is_paginated())?;
        Some(PaginationBar::new(page, &self.config))
    }

    // -------------------------------------------------------------------------
    // Interaction
    // -------------------------------------------------------------------------

    fn emit(&self, event: TableEvent<T>) -> Option<TableEvent<T>> {
        trace!("table event: {}", event_name(&event));
        if let Some(callback) = self.on_event {
            callback(&event);
        }
        Some(event)
    }

    /// Header click. Requests a sort if the column is sortable.
    pub fn click_header(&self, key: &str) -> Option<TableEvent<T>> {
        let column = self.columns.iter().find(|c| c.key == key)?;
        if !column.sortable {
            return None;
        }
        self.emit(TableEvent::SortRequested(column.key.clone()))
    }

    /// Header checkbox click.
    ///
    /// Clears a full selection, otherwise selects exactly the visible rows.
    pub fn click_select_all(&self) -> Option<TableEvent<T>> {
        let selected = self.selected?;
        self.emit(TableEvent::SelectionChanged(selection::toggle_all(
            self.rows, selected,
        )))
    }

    /// Row checkbox click, by row key.
    pub fn click_row(&self, key: &T::Key) -> Option<TableEvent<T>> {
        let selected = self.selected?;
        let row = self.rows.iter().find(|row| &row.key() == key)?;
        self.emit(TableEvent::SelectionChanged(selection::toggle_row(
            selected, row,
        )))
    }

    /// Numbered page click. The page is passed through unchecked.
    pub fn click_page(&self, page: u32) -> Option<TableEvent<T>> {
        self.pagination.filter(|p| p.is_paginated())?;
        self.emit(TableEvent::PageRequested(page))
    }

    /// Previous button click; `None` while disabled.
    pub fn click_previous(&self) -> Option<TableEvent<T>> {
        let bar = self.pagination_bar()?;
        if !bar.previous.enabled {
            return None;
        }
        self.emit(TableEvent::PageRequested(bar.previous.target))
    }

    /// Next button click; `None` while disabled.
    pub fn click_next(&self) -> Option<TableEvent<T>> {
        let bar = self.pagination_bar()?;
        if !bar.next.enabled {
            return None;
        }
        self.emit(TableEvent::PageRequested(bar.next.target))
    }
}

fn event_name<T>(event: &TableEvent<T>) -> String {
    match event {
        TableEvent::SortRequested(key) => format!("sort {}", key),
        TableEvent::PageRequested(page) => format!("page {}", page),
        TableEvent::SelectionChanged(rows) => format!("select {} rows", rows.len()),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::model::{Category, Record, Value};

    fn categories() -> Vec<Category> {
        vec![
            Category::new(1, None).with("name", "Science").with("is_active", true),
            Category::new(2, None).with("name", "History").with("is_active", false),
        ]
    }

    fn columns() -> Vec<Column<Category>> {
        vec![
            Column::new("name", "Name").sortable(),
            Column::new("is_active", "Active"),
        ]
    }

    #[test]
    fn test_rows_render_with_default_formatting() {
        let rows = categories();
        let columns = columns();
        let view = DataTable::new(&rows, &columns).render();

        let Body::Rows(rendered) = view.body else {
            panic!("expected rows");
        };
        assert_eq!(rendered[0].cells, vec!["Science", "Yes"]);
        assert_eq!(rendered[1].cells, vec!["History", "No"]);
        assert_eq!(rendered[0].checkbox, None);
        assert_eq!(view.select_all, None);
    }

    #[test]
    fn test_loading_overrides_rows() {
        let rows = categories();
        let columns = columns();
        let view = DataTable::new(&rows, &columns).loading(true).render();
        assert!(matches!(view.body, Body::Loading { .. }));
        assert_eq!(view.body.row_count(), 1);
    }

    #[test]
    fn test_empty_state_spans_all_columns() {
        let rows: Vec<Category> = Vec::new();
        let columns = columns();
        let selected: Vec<Category> = Vec::new();
        let view = DataTable::new(&rows, &columns).selectable(&selected).render();
        assert!(matches!(view.body, Body::Empty { .. }));
        assert_eq!(view.body.row_count(), 1);
        assert_eq!(view.span(), 3);
        assert_eq!(view.select_all, Some(CheckState::Unchecked));
    }

    #[test]
    fn test_custom_render_receives_value_and_row() {
        let rows = categories();
        let columns = vec![Column::new("name", "Name").render(|value, row: &Category| {
            format!("{}#{}", value.map(Value::to_string).unwrap_or_default(), row.id())
        })];
        let view = DataTable::new(&rows, &columns).render();
        let Body::Rows(rendered) = view.body else {
            panic!("expected rows");
        };
        assert_eq!(rendered[1].cells, vec!["History#2"]);
    }

    #[test]
    fn test_unresolvable_path_renders_placeholder() {
        let rows = vec![Record::new().set("id", 1i64)];
        let columns = vec![Column::new("x.y.z", "Deep")];
        let view = DataTable::new(&rows, &columns).render();
        let Body::Rows(rendered) = view.body else {
            panic!("expected rows");
        };
        assert_eq!(rendered[0].cells, vec!["-"]);
    }

    #[test]
    fn test_sort_indicators_and_requests() {
        let rows = categories();
        let columns = columns();
        let table = DataTable::new(&rows, &columns).sort("name", SortOrder::Desc);
        let view = table.render();
        assert_eq!(view.headers[0].indicator, SortIndicator::Active(SortOrder::Desc));
        assert_eq!(view.headers[1].indicator, SortIndicator::None);

        assert_eq!(
            table.click_header("name"),
            Some(TableEvent::SortRequested("name".to_string()))
        );
        assert_eq!(table.click_header("is_active"), None);
        assert_eq!(table.click_header("unknown"), None);
    }

    #[test]
    fn test_sort_request_does_not_reorder() {
        let rows = categories();
        let columns = columns();
        let table = DataTable::new(&rows, &columns).sort("name", SortOrder::Asc);
        let Body::Rows(rendered) = table.render().body else {
            panic!("expected rows");
        };
        let keys: Vec<i64> = rendered.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn test_selection_clicks() {
        let rows = categories();
        let columns = columns();
        let all = rows.clone();
        let table = DataTable::new(&rows, &columns).selectable(&all);
        assert_eq!(table.select_all_state(), Some(CheckState::Checked));
        assert_eq!(table.click_select_all(), Some(TableEvent::SelectionChanged(vec![])));
        assert_eq!(
            table.click_row(&1),
            Some(TableEvent::SelectionChanged(vec![rows[1].clone()]))
        );
        assert_eq!(table.click_row(&99), None);
    }

    #[test]
    fn test_selection_ignored_when_not_selectable() {
        let rows = categories();
        let columns = columns();
        let table = DataTable::new(&rows, &columns);
        assert_eq!(table.click_select_all(), None);
        assert_eq!(table.click_row(&1), None);
    }

    #[test]
    fn test_pagination_bar_only_with_multiple_pages() {
        let rows = categories();
        let columns = columns();
        let single = Pagination::new(1, 1, 10, 2);
        assert!(DataTable::new(&rows, &columns).pagination(&single).render().pagination.is_none());

        let many = Pagination::new(1, 3, 2, 6);
        let table = DataTable::new(&rows, &columns).pagination(&many);
        let bar = table.render().pagination.unwrap();
        assert!(!bar.previous.enabled);
        assert!(bar.next.enabled);
        assert_eq!((bar.from, bar.to, bar.total), (1, 2, 6));
        assert_eq!(table.click_previous(), None);
        assert_eq!(table.click_next(), Some(TableEvent::PageRequested(2)));
        // Out-of-range requests pass through.
        assert_eq!(table.click_page(42), Some(TableEvent::PageRequested(42)));
    }

    #[test]
    fn test_callback_sees_every_event() {
        let rows = categories();
        let columns = columns();
        let page = Pagination::new(3, 3, 2, 6);
        let seen = RefCell::new(Vec::new());
        let record = |event: &TableEvent<Category>| seen.borrow_mut().push(event.clone());
        {
            let table = DataTable::new(&rows, &columns)
                .pagination(&page)
                .on_event(&record);

            table.click_previous();
            table.click_next();
            table.click_header("name");
        }
        assert_eq!(
            seen.into_inner(),
            vec![
                TableEvent::PageRequested(2),
                TableEvent::SortRequested("name".to_string())
            ]
        );
    }
}
