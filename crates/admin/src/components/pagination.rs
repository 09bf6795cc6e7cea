//! Pagination control.
//!
//! Renders previous/next buttons, the collapsed page-number list and the
//! per-page selector. No bounds checking beyond disabling "previous" on
//! page 1 and "next" on the last page.

use askama::Template;
use storeview_core::view::{PER_PAGE_OPTIONS, PageItem, Pagination};

/// One entry in the rendered page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// `None` renders an ellipsis.
    pub number: Option<u32>,
    pub is_current: bool,
}

/// One option in the per-page selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerPageOption {
    pub value: u32,
    pub selected: bool,
}

/// Pagination control template.
#[derive(Debug, Template)]
#[template(path = "components/pagination.html")]
pub struct PaginationControl {
    pub table_id: String,
    pub total_items: u32,
    pub first: u32,
    pub last: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page: u32,
    pub next_page: u32,
    pub pages: Vec<PageLink>,
    pub per_page_options: Vec<PerPageOption>,
}

impl PaginationControl {
    /// Build the control for a table.
    #[must_use]
    pub fn new(table_id: &str, pagination: &Pagination) -> Self {
        let (first, last) = pagination.showing_range();
        let pages = pagination
            .items()
            .into_iter()
            .map(|item| PageLink {
                number: item.number(),
                is_current: item == PageItem::Page(pagination.page),
            })
            .collect();
        let per_page_options = PER_PAGE_OPTIONS
            .iter()
            .map(|&value| PerPageOption {
                value,
                selected: value == pagination.per_page,
            })
            .collect();

        Self {
            table_id: table_id.to_string(),
            total_items: pagination.total_items,
            first,
            last,
            has_previous: pagination.has_previous(),
            has_next: pagination.has_next(),
            previous_page: pagination.page.saturating_sub(1).max(1),
            next_page: pagination.page.saturating_add(1),
            pages,
            per_page_options,
        }
    }
}
