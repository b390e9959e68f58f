//! Row selection for tables with a checkbox column.
//!
//! Selections are plain row lists matched by [`TableRow::key`]. The table
//! never prunes rows that are no longer displayed; callers reset the
//! selection when they load a different page if they need to.

use super::row::TableRow;

/// State of a checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Unchecked,
    /// Some but not all rows are selected.
    Indeterminate,
    Checked,
}

impl CheckState {
    /// Terminal rendering of the checkbox.
    pub fn symbol(self) -> &'static str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::Indeterminate => "[-]",
            CheckState::Checked => "[x]",
        }
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// Header checkbox state derived from row and selection counts.
pub fn header_state(row_count: usize, selected_count: usize) -> CheckState {
    if row_count > 0 && selected_count == row_count {
        CheckState::Checked
    } else if selected_count > 0 && selected_count < row_count {
        CheckState::Indeterminate
    } else {
        CheckState::Unchecked
    }
}

/// Returns `true` if `row` is in `selected`, compared by key.
pub fn is_selected<T: TableRow>(selected: &[T], row: &T) -> bool {
    let key = row.key();
    selected.iter().any(|s| s.key() == key)
}

/// Selection requested by clicking the header checkbox.
///
/// A full selection clears; anything else selects exactly the visible rows.
pub fn toggle_all<T: TableRow>(rows: &[T], selected: &[T]) -> Vec<T> {
    match header_state(rows.len(), selected.len()) {
        CheckState::Checked => Vec::new(),
        _ => rows.to_vec(),
    }
}

/// Selection requested by clicking one row's checkbox.
///
/// Removes every entry with the row's key if present, otherwise appends it.
pub fn toggle_row<T: TableRow>(selected: &[T], row: &T) -> Vec<T> {
    let key = row.key();
    if selected.iter().any(|s| s.key() == key) {
        selected.iter().filter(|s| s.key() != key).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(row.clone());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn rows(ids: &[i64]) -> Vec<Category> {
        ids.iter().map(|&id| Category::new(id, None)).collect()
    }

    #[test]
    fn test_header_states() {
        assert_eq!(header_state(0, 0), CheckState::Unchecked);
        assert_eq!(header_state(3, 0), CheckState::Unchecked);
        assert_eq!(header_state(3, 1), CheckState::Indeterminate);
        assert_eq!(header_state(3, 3), CheckState::Checked);
    }

    #[test]
    fn test_toggle_all_from_partial_selects_all() {
        let visible = rows(&[1, 2]);
        let next = toggle_all(&visible, &rows(&[1]));
        assert_eq!(next, visible);
    }

    #[test]
    fn test_toggle_all_from_full_clears() {
        let visible = rows(&[1, 2]);
        assert!(toggle_all(&visible, &visible).is_empty());
    }

    #[test]
    fn test_toggle_all_replaces_offscreen_selection() {
        let visible = rows(&[3, 4]);
        let next = toggle_all(&visible, &rows(&[1]));
        assert_eq!(next, visible);
    }

    #[test]
    fn test_toggle_row_by_key() {
        let selected = rows(&[1, 2]);
        let row = Category::new(2, None).with("name", "changed payload");
        let next = toggle_row(&selected, &row);
        assert_eq!(next, rows(&[1]));

        let again = toggle_row(&next, &row);
        assert_eq!(again.len(), 2);
        assert!(is_selected(&again, &Category::new(2, None)));
    }
}
