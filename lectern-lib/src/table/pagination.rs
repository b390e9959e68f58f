//! Page-based pagination state and page-number windows.

use serde::{Deserialize, Serialize};

/// Pagination metadata from a page-based list response.
///
/// Mirrors `{current_page, last_page, per_page, total, from, to}`. `from` and
/// `to` are optional; when absent they are derived from the other fields.
///
/// # Example
///
/// ```
/// use lectern_lib::table::Pagination;
///
/// let json = r#"{"current_page": 3, "last_page": 10, "per_page": 15, "total": 140}"#;
/// let page: Pagination = serde_json::from_str(json).unwrap();
/// assert_eq!(page.from(), 31);
/// assert_eq!(page.to(), 45);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u64,
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u64>,
}

impl Pagination {
    /// Creates pagination state without explicit `from`/`to`.
    pub fn new(current_page: u32, last_page: u32, per_page: u64, total: u64) -> Self {
        Self {
            current_page,
            last_page,
            per_page,
            total,
            from: None,
            to: None,
        }
    }

    /// Computes pagination state for `total` items split into `per_page` pages.
    pub fn for_total(current_page: u32, per_page: u64, total: u64) -> Self {
        let last_page = if per_page == 0 {
            1
        } else {
            total.div_ceil(per_page).max(1)
        };
        let last_page = u32::try_from(last_page).unwrap_or(u32::MAX);
        Self::new(current_page.clamp(1, last_page), last_page, per_page, total)
    }

    /// Index of the first item on this page (1-based).
    pub fn from(&self) -> u64 {
        self.from.unwrap_or_else(|| {
            u64::from(self.current_page.saturating_sub(1)) * self.per_page + 1
        })
    }

    /// Index of the last item on this page (1-based, inclusive).
    pub fn to(&self) -> u64 {
        self.to
            .unwrap_or_else(|| (u64::from(self.current_page) * self.per_page).min(self.total))
    }

    /// Returns `true` if there is a page before the current one.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Returns `true` if there is a page after the current one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// Returns `true` if page controls should be shown at all.
    pub fn is_paginated(&self) -> bool {
        self.last_page > 1
    }

    /// Clamp a requested page into `1..=last_page`.
    ///
    /// Tables pass page requests through unchecked; callers that want to
    /// keep invalid requests away from the data layer use this.
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.last_page.max(1))
    }

    /// Page numbers to display, with ellipses.
    pub fn window(&self, delta: u32, max_full: u32) -> Vec<PageItem> {
        page_window(self.current_page, self.last_page, delta, max_full)
    }
}

/// One entry in the page-number bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(u32),
    /// A collapsed run of pages.
    Ellipsis,
}

impl PageItem {
    /// The page number, if this is not an ellipsis.
    pub fn page(self) -> Option<u32> {
        match self {
            PageItem::Page(n) => Some(n),
            PageItem::Ellipsis => None,
        }
    }
}

/// Choose which page numbers to show so the bar width stays bounded.
///
/// Up to `max_full` pages are all shown. Beyond that the first and last page
/// are always shown, with a window of `delta` pages either side of `current`
/// and an ellipsis wherever pages are skipped. With `delta = 2` at most
/// seven page numbers and two ellipses are produced.
///
/// # Example
///
/// ```
/// use lectern_lib::table::{PageItem, page_window};
///
/// let items = page_window(10, 20, 2, 7);
/// assert_eq!(items.first(), Some(&PageItem::Page(1)));
/// assert_eq!(items[1], PageItem::Ellipsis);
/// assert_eq!(items.last(), Some(&PageItem::Page(20)));
/// ```
pub fn page_window(current: u32, last: u32, delta: u32, max_full: u32) -> Vec<PageItem> {
    if last <= max_full {
        return (1..=last).map(PageItem::Page).collect();
    }

    let mut items = Vec::with_capacity(2 * delta as usize + 5);
    items.push(PageItem::Page(1));

    if current > delta + 2 {
        items.push(PageItem::Ellipsis);
    }

    let start = current.saturating_sub(delta).max(2);
    let end = current.saturating_add(delta).min(last - 1);
    items.extend((start..=end).map(PageItem::Page));

    if current < last.saturating_sub(delta + 1) {
        items.push(PageItem::Ellipsis);
    }

    items.push(PageItem::Page(last));
    items
}
