//! Events a table requests from its owner.

use super::row::TableRow;
use super::sort::SortOrder;

/// A state change requested by user interaction.
///
/// The table applies none of these itself. The owner updates its state
/// (re-fetching if needed) and renders the table again.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent<T> {
    /// Sort by the given column key.
    SortRequested(String),
    /// Go to the given page. Not bounds-checked.
    PageRequested(u32),
    /// Replace the selection with these rows.
    SelectionChanged(Vec<T>),
}

impl<T: TableRow> TableEvent<T> {
    /// Keys of the rows in a selection change.
    pub fn selected_keys(&self) -> Option<Vec<T::Key>> {
        match self {
            TableEvent::SelectionChanged(rows) => Some(rows.iter().map(TableRow::key).collect()),
            _ => None,
        }
    }
}

/// Next sort state after a sort request, the way list screens usually apply it:
/// the same key flips direction, a new key starts ascending.
pub fn next_sort(current: Option<(&str, SortOrder)>, requested: &str) -> (String, SortOrder) {
    match current {
        Some((key, order)) if key == requested => (requested.to_string(), order.reversed()),
        _ => (requested.to_string(), SortOrder::Asc),
    }
}
