//! Default cell formatting and display labels.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::icons::Icon;
use crate::model::Value;

/// User-facing strings and formats used when a column has no custom renderer.
///
/// # Example
///
/// ```
/// use lectern_lib::table::Labels;
///
/// let labels = Labels::default().with_yes_no("Oui", "Non");
/// assert_eq!(labels.yes, "Oui");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Shown for null or unresolvable cells.
    ///
    /// Default: `-`
    pub placeholder: String,
    /// Shown for `true`.
    pub yes: String,
    /// Shown for `false`.
    pub no: String,
    /// Separator between array items.
    pub list_separator: String,
    /// `chrono` format string for dates.
    pub date_format: String,
    /// Format dates in the local timezone instead of UTC.
    pub local_time: bool,
    /// Body text while rows are loading.
    pub loading: String,
    /// Body text when there are no rows.
    pub empty_message: String,
    /// Icon shown next to the empty message.
    pub empty_icon: Icon,
    /// Pagination summary; `{from}`, `{to}` and `{total}` are substituted.
    pub showing: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            placeholder: "-".to_string(),
            yes: "Yes".to_string(),
            no: "No".to_string(),
            list_separator: ", ".to_string(),
            date_format: "%Y-%m-%d %H:%M".to_string(),
            local_time: false,
            loading: "Loading...".to_string(),
            empty_message: "No data found".to_string(),
            empty_icon: Icon::Folder,
            showing: "Showing {from} to {to} of {total} results".to_string(),
        }
    }
}

impl Labels {
    /// Sets the yes/no labels.
    pub fn with_yes_no(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.yes = yes.into();
        self.no = no.into();
        self
    }

    /// Sets the placeholder for missing values.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the empty-state icon and message.
    pub fn with_empty(mut self, icon: Icon, message: impl Into<String>) -> Self {
        self.empty_icon = icon;
        self.empty_message = message.into();
        self
    }

    /// Sets the date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Fills in the pagination summary template.
    pub fn showing(&self, from: u64, to: u64, total: u64) -> String {
        self.showing
            .replace("{from}", &from.to_string())
            .replace("{to}", &to.to_string())
            .replace("{total}", &total.to_string())
    }
}

/// Format a resolved cell value for display.
///
/// - missing or null: the placeholder
/// - array: items joined with the list separator
/// - bool: yes/no label
/// - date: formatted with `date_format`
/// - number or string: as-is
/// - nested object: its JSON form
pub fn format_value(value: Option<&Value>, labels: &Labels) -> String {
    match value {
        None | Some(Value::Null) => labels.placeholder.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(&labels.list_separator),
        Some(Value::Bool(true)) => labels.yes.clone(),
        Some(Value::Bool(false)) => labels.no.clone(),
        Some(Value::DateTime(dt)) => {
            if labels.local_time {
                dt.with_timezone(&Local).format(&labels.date_format).to_string()
            } else {
                dt.format(&labels.date_format).to_string()
            }
        }
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::model::Record;

    #[test]
    fn test_missing_and_null_use_placeholder() {
        let labels = Labels::default();
        assert_eq!(format_value(None, &labels), "-");
        assert_eq!(format_value(Some(&Value::Null), &labels), "-");
    }

    #[test]
    fn test_arrays_join() {
        let labels = Labels::default();
        let tags = Value::from(vec!["math", "algebra"]);
        assert_eq!(format_value(Some(&tags), &labels), "math, algebra");
        assert_eq!(format_value(Some(&Value::Array(vec![])), &labels), "");
    }

    #[test]
    fn test_bool_labels() {
        let labels = Labels::default().with_yes_no("Evet", "Hayır");
        assert_eq!(format_value(Some(&Value::Bool(true)), &labels), "Evet");
        assert_eq!(format_value(Some(&Value::Bool(false)), &labels), "Hayır");
    }

    #[test]
    fn test_dates() {
        let labels = Labels::default().with_date_format("%d.%m.%Y");
        let dt = Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap();
        assert_eq!(format_value(Some(&Value::DateTime(dt)), &labels), "01.09.2024");
    }

    #[test]
    fn test_primitives_and_objects() {
        let labels = Labels::default();
        assert_eq!(format_value(Some(&Value::Int(42)), &labels), "42");
        assert_eq!(format_value(Some(&Value::from("hi")), &labels), "hi");
        let nested = Value::from(Record::new().set("a", 1i64));
        assert_eq!(format_value(Some(&nested), &labels), r#"{"a":1}"#);
    }

    #[test]
    fn test_showing_template() {
        assert_eq!(
            Labels::default().showing(11, 20, 95),
            "Showing 11 to 20 of 95 results"
        );
    }
}
