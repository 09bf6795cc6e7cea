//! Parent-side list state.
//!
//! The views never mutate anything. A [`ListController`] owns the records,
//! the filters and the page, applies the intents the views emit, and
//! derives the visible slice and pagination for the next render.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::Debug;

use storeview_core::catalog::Product;
use storeview_core::order::OrderRow;
use storeview_core::view::{
    OrderFilterPatch, OrderFilters, OrderSortField, Pagination, ProductFilterPatch,
    ProductFilters, ProductSortField, SortDirection, SortState,
};
use storeview_core::StockStatus;
use tracing::debug;

use crate::components::ListCallbacks;

/// Context a filter may need beyond the record itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub low_stock_threshold: u32,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            low_stock_threshold: StockStatus::DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// Filter state that knows how to select and order its records.
pub trait ListQuery: Clone + Default + Debug {
    type Record: Clone + Debug;
    type Patch: Debug;
    type Field: Copy + PartialEq + Debug;

    fn merged(self, patch: Self::Patch) -> Self;

    /// Whether applying `patch` changes the result set (and so the page).
    fn touches_filters(patch: &Self::Patch) -> bool;

    /// Patch that only changes the sort.
    fn sort_patch(sort: SortState<Self::Field>) -> Self::Patch;

    fn matches(&self, record: &Self::Record, options: &QueryOptions) -> bool;

    /// Ascending order for `field`.
    fn compare_by(field: Self::Field, a: &Self::Record, b: &Self::Record) -> Ordering;

    fn sort_state(&self) -> SortState<Self::Field>;
}

/// Owner of a list's records, filters and page.
#[derive(Debug, Clone)]
pub struct ListController<Q: ListQuery> {
    items: Vec<Q::Record>,
    filters: Q,
    page: u32,
    per_page: u32,
    options: QueryOptions,
}

pub type OrderListController = ListController<OrderFilters>;
pub type ProductListController = ListController<ProductFilters>;

impl<Q: ListQuery> ListController<Q> {
    #[must_use]
    pub fn new(items: Vec<Q::Record>, per_page: u32) -> Self {
        Self {
            items,
            filters: Q::default(),
            page: 1,
            per_page: per_page.max(1),
            options: QueryOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: QueryOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_filters(mut self, filters: Q) -> Self {
        self.filters = filters;
        self.page = 1;
        self
    }

    pub const fn filters(&self) -> &Q {
        &self.filters
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Replace the records, e.g. after a refetch. The page is clamped.
    pub fn replace_items(&mut self, items: Vec<Q::Record>) {
        self.items = items;
        self.page = self.page.min(self.pagination().total_pages.max(1));
    }

    /// Merge a filter patch. Any change to the result set returns to page 1;
    /// a sort-only patch keeps the current page.
    pub fn apply_filter_patch(&mut self, patch: Q::Patch) {
        let reset = Q::touches_filters(&patch);
        debug!(?patch, reset, "apply filter patch");
        self.filters = std::mem::take(&mut self.filters).merged(patch);
        if reset {
            self.page = 1;
        }
    }

    pub fn set_sort(&mut self, sort: SortState<Q::Field>) {
        self.apply_filter_patch(Q::sort_patch(sort));
    }

    /// Jump to `page`, clamped to the available pages.
    pub fn set_page(&mut self, page: u32) {
        let last = self.pagination().total_pages.max(1);
        self.page = page.clamp(1, last);
    }

    /// Change the page size and return to page 1.
    pub fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    /// Matching records in sort order.
    #[must_use]
    pub fn matching(&self) -> Vec<&Q::Record> {
        let mut rows: Vec<&Q::Record> = self
            .items
            .iter()
            .filter(|r| self.filters.matches(r, &self.options))
            .collect();
        let sort = self.filters.sort_state();
        if let Some(field) = sort.field {
            rows.sort_by(|a, b| {
                let ord = Q::compare_by(field, a, b);
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }
        rows
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        let total = u32::try_from(self.matching().len()).unwrap_or(u32::MAX);
        Pagination::for_total(self.page, self.per_page, total)
    }

    /// The current page of matching records.
    #[must_use]
    pub fn visible(&self) -> Vec<Q::Record> {
        let skip = usize::try_from((self.page.saturating_sub(1)).saturating_mul(self.per_page))
            .unwrap_or(usize::MAX);
        let take = usize::try_from(self.per_page).unwrap_or(usize::MAX);
        self.matching()
            .into_iter()
            .skip(skip)
            .take(take)
            .cloned()
            .collect()
    }

    /// Callbacks that feed a view's intents back into `cell`.
    ///
    /// The view must be rendered from a snapshot, not from a borrow of
    /// `cell`, since the handlers borrow it mutably.
    pub fn callbacks(cell: &RefCell<Self>) -> ListCallbacks<'_, Q::Patch, Q::Field> {
        ListCallbacks::new()
            .on_change_filters(move |patch| cell.borrow_mut().apply_filter_patch(patch))
            .on_change_page(move |page| cell.borrow_mut().set_page(page))
            .on_change_per_page(move |per_page| cell.borrow_mut().set_per_page(per_page))
            .on_sort_change(move |sort| cell.borrow_mut().set_sort(sort))
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Order numbers compare numerically when both carry digits (`#999 < #1000`).
fn compare_order_numbers(a: &str, b: &str) -> Ordering {
    let digits = |s: &str| {
        s.chars()
            .filter(char::is_ascii_digit)
            .collect::<String>()
            .parse::<u64>()
            .ok()
    };
    match (digits(a), digits(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

impl ListQuery for OrderFilters {
    type Record = OrderRow;
    type Patch = OrderFilterPatch;
    type Field = OrderSortField;

    fn merged(self, patch: OrderFilterPatch) -> Self {
        Self::merged(self, patch)
    }

    fn touches_filters(patch: &OrderFilterPatch) -> bool {
        patch.touches_filters()
    }

    fn sort_patch(sort: SortState<OrderSortField>) -> OrderFilterPatch {
        OrderFilterPatch::sort(sort)
    }

    fn matches(&self, row: &OrderRow, _options: &QueryOptions) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !contains_ci(&row.number, &needle)
            && !contains_ci(&row.customer_name, &needle)
            && !row.customer_email.as_deref().is_some_and(|e| contains_ci(e, &needle))
        {
            return false;
        }
        if self.status.is_some_and(|s| s != row.status) {
            return false;
        }
        if self.payment_status.is_some_and(|s| s != row.payment_status) {
            return false;
        }
        let placed = row.placed_at.date_naive();
        if self.date_from.is_some_and(|from| placed < from) {
            return false;
        }
        !self.date_to.is_some_and(|to| placed > to)
    }

    fn compare_by(field: OrderSortField, a: &OrderRow, b: &OrderRow) -> Ordering {
        match field {
            OrderSortField::PlacedAt => a.placed_at.cmp(&b.placed_at),
            OrderSortField::Number => compare_order_numbers(&a.number, &b.number),
            OrderSortField::Customer => a
                .customer_name
                .to_lowercase()
                .cmp(&b.customer_name.to_lowercase()),
            OrderSortField::Total => a.total.amount.cmp(&b.total.amount),
            OrderSortField::Status => a.status.cmp(&b.status),
        }
    }

    fn sort_state(&self) -> SortState<OrderSortField> {
        self.sort
    }
}

impl ListQuery for ProductFilters {
    type Record = Product;
    type Patch = ProductFilterPatch;
    type Field = ProductSortField;

    fn merged(self, patch: ProductFilterPatch) -> Self {
        Self::merged(self, patch)
    }

    fn touches_filters(patch: &ProductFilterPatch) -> bool {
        patch.touches_filters()
    }

    fn sort_patch(sort: SortState<ProductSortField>) -> ProductFilterPatch {
        ProductFilterPatch::sort(sort)
    }

    fn matches(&self, product: &Product, options: &QueryOptions) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !contains_ci(&product.title, &needle)
            && !contains_ci(&product.handle, &needle)
        {
            return false;
        }
        if let Some(category) = &self.category
            && product.category.as_ref() != Some(category)
        {
            return false;
        }
        if self
            .stock_status
            .is_some_and(|s| s != product.stock_status(options.low_stock_threshold))
        {
            return false;
        }
        !self.published.is_some_and(|p| p != product.is_published)
    }

    fn compare_by(field: ProductSortField, a: &Product, b: &Product) -> Ordering {
        match field {
            ProductSortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            ProductSortField::Price => a.price.amount.cmp(&b.price.amount),
            ProductSortField::Stock => a.stock.cmp(&b.stock),
            ProductSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }

    fn sort_state(&self) -> SortState<ProductSortField> {
        self.sort
    }
}
