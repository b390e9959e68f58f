//! TreeRecord trait for parent-pointer rows.

use std::fmt;
use std::hash::Hash;

use crate::model::{Category, Record, Value};

/// Trait for rows that point at their parent by id.
///
/// Implement this trait to feed any row type through
/// [`build_forest`](super::build_forest).
///
/// # Example
///
/// ```
/// use lectern_lib::tree::TreeRecord;
///
/// #[derive(Clone)]
/// struct Folder {
///     id: u32,
///     parent: Option<u32>,
/// }
///
/// impl TreeRecord for Folder {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn parent_id(&self) -> Option<u32> {
///         self.parent
///     }
/// }
/// ```
pub trait TreeRecord: Clone {
    /// The id type linking children to parents.
    type Id: Clone + Eq + Hash + fmt::Display + fmt::Debug;

    /// Unique identifier for this row.
    fn id(&self) -> Self::Id;

    /// Identifier of the parent row, or `None` for a root.
    fn parent_id(&self) -> Option<Self::Id>;
}

impl TreeRecord for Category {
    type Id = i64;

    fn id(&self) -> i64 {
        Category::id(self)
    }

    fn parent_id(&self) -> Option<i64> {
        Category::parent_id(self)
    }
}

/// Generic records are keyed by the string form of their `id` field.
///
/// A missing or null `parent_id` marks a root.
impl TreeRecord for Record {
    type Id = String;

    fn id(&self) -> String {
        self.get("id").map(Value::to_string).unwrap_or_default()
    }

    fn parent_id(&self) -> Option<String> {
        match self.get("parent_id") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.to_string()),
        }
    }
}
