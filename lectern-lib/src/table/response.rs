//! Envelopes for paginated list responses.

use serde::Deserialize;

use super::pagination::Pagination;

/// A list payload as returned by a REST index endpoint.
///
/// Accepts a bare JSON array, or an object with a `data` array and page
/// metadata either at the top level or under `meta`.
///
/// # Example
///
/// ```
/// use lectern_lib::model::Record;
/// use lectern_lib::table::ListResponse;
///
/// let json = r#"{
///     "data": [{"id": 1}],
///     "current_page": 2, "last_page": 4, "per_page": 1, "total": 4
/// }"#;
/// let response: ListResponse<Record> = serde_json::from_str(json).unwrap();
/// let (rows, page) = response.into_parts();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(page.map(|p| p.current_page), Some(2));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paged(PagedList<T>),
    Bare(Vec<T>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagedList<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<Pagination>,
    #[serde(flatten)]
    pub top_level: Option<Pagination>,
}

impl<T> ListResponse<T> {
    /// Rows and page metadata, if the payload carried any.
    pub fn into_parts(self) -> (Vec<T>, Option<Pagination>) {
        match self {
            ListResponse::Bare(rows) => (rows, None),
            ListResponse::Paged(list) => {
                let page = list.meta.or(list.top_level);
                (list.data, page)
            }
        }
    }
}
