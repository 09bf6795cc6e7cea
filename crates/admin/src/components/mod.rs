//! Reusable admin building blocks.

pub mod callbacks;
pub mod data_table;
pub mod pagination;

pub use callbacks::{Handler, ListCallbacks};
pub use data_table::{DataTableConfig, FilterOption, FilterType, TableColumn, TableFilter};
pub use pagination::PaginationControl;
pub use storeview_core::view::badge::{
    Badge, badge_for_key, order_status_badge, payment_status_badge, stock_badge,
};
