//! Category rows

use serde::Deserialize;
use serde::Serialize;

use super::Record;
use super::Value;
use crate::error::FieldError;
use crate::icons::Icon;

/// A category row as delivered by the categories list endpoint.
///
/// Only `id` and `parent_id` matter for tree building; every other field is
/// carried along untouched in the underlying [`Record`].
///
/// # Example
///
/// ```
/// use lectern_lib::model::Category;
///
/// let json = r#"[{"id": 1, "name": "Science"}, {"id": 2, "parent_id": 1, "name": "Physics"}]"#;
/// let categories: Vec<Category> = serde_json::from_str(json).unwrap();
/// assert_eq!(categories[1].parent_id(), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Record", into = "Record")]
pub struct Category {
    id: i64,
    parent_id: Option<i64>,
    record: Record,
}

impl Category {
    /// Creates a category with the given id and parent.
    pub fn new(id: i64, parent_id: Option<i64>) -> Self {
        let record = Record::new()
            .set("id", id)
            .set("parent_id", parent_id);
        Self {
            id,
            parent_id,
            record,
        }
    }

    /// Sets a payload field (builder pattern).
    ///
    /// `id` and `parent_id` are owned by the category and cannot be
    /// overwritten through this method.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        if field != "id" && field != "parent_id" {
            self.record.insert(field, value);
        }
        self
    }

    /// Returns the category id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the parent id, if any.
    pub fn parent_id(&self) -> Option<i64> {
        self.parent_id
    }

    /// Returns the display name, if present.
    pub fn name(&self) -> Option<&str> {
        self.record.get_string("name").ok().flatten()
    }

    /// Returns the active flag. Missing or malformed flags read as active.
    pub fn is_active(&self) -> bool {
        self.record
            .get_bool("is_active")
            .or_else(|_| self.record.get_bool("active"))
            .ok()
            .flatten()
            .unwrap_or(true)
    }

    /// Returns the icon named by the `icon` field.
    pub fn icon(&self) -> Option<Icon> {
        self.record
            .get_string("icon")
            .ok()
            .flatten()
            .map(Icon::from_name)
    }

    /// Returns the underlying record.
    pub fn record(&self) -> &Record {
        &self.record
    }
}

impl TryFrom<Record> for Category {
    type Error = FieldError;

    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let id = record
            .get_int("id")?
            .ok_or_else(|| FieldError::missing("id"))?;
        let parent_id = match record.get_int("parent_id") {
            Ok(parent) => parent,
            Err(FieldError::Missing { .. }) => None,
            Err(e) => return Err(e),
        };
        Ok(Self {
            id,
            parent_id,
            record,
        })
    }
}

impl From<Category> for Record {
    fn from(category: Category) -> Self {
        category.record
    }
}
