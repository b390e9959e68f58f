//! Sort direction and header sort affordances.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort direction requested from the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order '{}'", other)),
        }
    }
}

/// What a header cell shows about sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Not sortable.
    None,
    /// Sortable but not the active sort; revealed on hover.
    Neutral,
    /// Active sort column.
    Active(SortOrder),
}

impl SortIndicator {
    /// Indicator for a column given the table's current sort.
    pub fn for_column(sortable: bool, key: &str, sort_by: Option<&str>, order: SortOrder) -> Self {
        if !sortable {
            SortIndicator::None
        } else if sort_by == Some(key) {
            SortIndicator::Active(order)
        } else {
            SortIndicator::Neutral
        }
    }

    pub fn symbol(self) -> Option<&'static str> {
        match self {
            SortIndicator::None => None,
            SortIndicator::Neutral => Some("↕"),
            SortIndicator::Active(SortOrder::Asc) => Some("▲"),
            SortIndicator::Active(SortOrder::Desc) => Some("▼"),
        }
    }
}
