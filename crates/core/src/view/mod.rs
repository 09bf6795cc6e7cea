//! View-state contracts for list and detail components.
//!
//! The parent owns all of this state. Components read it, compute the next
//! value for a user interaction, and hand that value back through a callback.

pub mod badge;
pub mod filters;
pub mod pagination;
pub mod sort;
pub mod variant;

pub use badge::{Badge, badge_for_key, order_status_badge, payment_status_badge, stock_badge};
pub use filters::{
    DatePreset, DateRange, OrderFilterPatch, OrderFilters, ProductFilterPatch, ProductFilters,
};
pub use pagination::{PER_PAGE_OPTIONS, PageItem, Pagination, page_items};
pub use sort::{OrderSortField, ProductSortField, SortDirection, SortState};
pub use variant::VariantSelector;

/// A boxed intent handler. Emitting to an absent handler is a no-op.
pub type Handler<'a, T> = Box<dyn Fn(T) + 'a>;
