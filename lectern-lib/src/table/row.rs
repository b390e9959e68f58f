//! TableRow trait for rows displayed by a [`DataTable`](super::DataTable).

use std::fmt;
use std::hash::Hash;

use crate::model::{Category, Record, Value};
use crate::tree::TreeNode;

/// Trait for rows that can be displayed in a table.
///
/// Rows are matched for selection by [`key`](TableRow::key) and expose their
/// cells through [`value`](TableRow::value), which takes a column key that
/// may be a dotted path into the row.
///
/// # Example
///
/// ```
/// use lectern_lib::model::Value;
/// use lectern_lib::table::TableRow;
///
/// #[derive(Clone)]
/// struct Login {
///     id: u64,
///     ip: String,
/// }
///
/// impl TableRow for Login {
///     type Key = u64;
///
///     fn key(&self) -> u64 {
///         self.id
///     }
///
///     fn value(&self, path: &str) -> Option<Value> {
///         match path {
///             "id" => Some(Value::Int(self.id as i64)),
///             "ip" => Some(Value::from(self.ip.as_str())),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone {
    /// The key type used to identify this row.
    type Key: Clone + Eq + Hash + fmt::Display + fmt::Debug;

    /// Return a unique key for this row.
    fn key(&self) -> Self::Key;

    /// Resolve a column key against this row.
    ///
    /// Must return `None` rather than fail when any step of the path is
    /// missing.
    fn value(&self, path: &str) -> Option<Value>;

    /// Indentation level of this row. Flat rows stay at 0.
    fn depth(&self) -> usize {
        0
    }
}

impl TableRow for Record {
    type Key = String;

    fn key(&self) -> String {
        self.get("id").map(Value::to_string).unwrap_or_default()
    }

    fn value(&self, path: &str) -> Option<Value> {
        self.resolve(path).cloned()
    }
}

impl TableRow for Category {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id()
    }

    fn value(&self, path: &str) -> Option<Value> {
        match path {
            "id" => Some(Value::Int(self.id())),
            "parent_id" => Some(Value::from(self.parent_id())),
            _ => self.record().resolve(path).cloned(),
        }
    }
}

/// Flattened tree rows add a `depth` pseudo-field.
impl<T: TableRow> TableRow for TreeNode<T> {
    type Key = T::Key;

    fn key(&self) -> T::Key {
        self.record.key()
    }

    fn value(&self, path: &str) -> Option<Value> {
        match path {
            "depth" => Some(Value::Int(self.depth as i64)),
            _ => self.record.value(path),
        }
    }

    fn depth(&self) -> usize {
        self.depth
    }
}
