//! Admin views.
//!
//! Each view borrows parent-owned data, renders it, and emits intents. None
//! of them filter, sort or paginate the items they are given.

pub mod orders;
pub mod products;

pub use orders::{OrderDetailView, OrdersTable};
pub use products::ProductsList;

use storeview_core::view::SortDirection;

use crate::components::{TableColumn, TableFilter};

/// Display format for timestamps in admin tables.
pub(crate) const DATE_TIME_FORMAT: &str = "%-d %b %Y, %H:%M";

/// Table header cell with its sort indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub numeric: bool,
    /// Value for `aria-sort`.
    pub aria_sort: &'static str,
}

impl HeaderCell {
    /// Header cells for `columns` with `active` (if any) marked sorted.
    pub(crate) fn from_columns(
        columns: &[TableColumn],
        active: Option<&str>,
        direction: SortDirection,
    ) -> Vec<Self> {
        columns
            .iter()
            .map(|column| {
                let aria_sort = match (active == Some(column.key), direction) {
                    (true, SortDirection::Asc) => "ascending",
                    (true, SortDirection::Desc) => "descending",
                    (false, _) => "none",
                };
                Self {
                    key: column.key,
                    label: column.label,
                    sortable: column.sortable,
                    numeric: column.numeric,
                    aria_sort,
                }
            })
            .collect()
    }
}

/// An `<option>` in a filter select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    /// Options of `filter` with `current` selected (`""` selects "All").
    pub(crate) fn for_filter(filter: Option<&TableFilter>, current: &str) -> Vec<Self> {
        filter
            .map(|f| {
                f.options
                    .iter()
                    .map(|o| Self {
                        value: o.value.clone(),
                        label: o.label.clone(),
                        selected: o.value == current,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
