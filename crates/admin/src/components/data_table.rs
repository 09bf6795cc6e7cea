//! Data table component configuration.
//!
//! Column, filter and empty-state definitions for the admin list views.
//! Sortable columns carry the key of the sort field they drive.

use serde::Serialize;
use storeview_core::view::{OrderSortField, ProductSortField};
use storeview_core::{OrderStatus, PaymentStatus, StockStatus};

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    /// Unique key for the column (the sort field key when sortable).
    pub key: &'static str,
    /// Header text.
    pub label: &'static str,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Right-align numeric columns.
    pub numeric: bool,
}

impl TableColumn {
    /// A plain, non-sortable column.
    #[must_use]
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            numeric: false,
        }
    }

    /// A sortable column.
    #[must_use]
    pub const fn sortable(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            numeric: false,
        }
    }

    /// Mark this column as numeric.
    #[must_use]
    pub const fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }
}

/// Filter control type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Free-text search box.
    Search,
    /// Single-select dropdown.
    Select,
    /// Preset chips plus from/to date pickers.
    DateRange,
}

/// Option for select filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Filter definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableFilter {
    /// Filter field key.
    pub key: &'static str,
    pub label: &'static str,
    pub filter_type: FilterType,
    /// Select options; the empty value means "all".
    pub options: Vec<FilterOption>,
}

impl TableFilter {
    #[must_use]
    pub const fn search(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            filter_type: FilterType::Search,
            options: Vec::new(),
        }
    }

    #[must_use]
    pub const fn select(key: &'static str, label: &'static str, options: Vec<FilterOption>) -> Self {
        Self {
            key,
            label,
            filter_type: FilterType::Select,
            options,
        }
    }

    #[must_use]
    pub const fn date_range(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            filter_type: FilterType::DateRange,
            options: Vec::new(),
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataTableConfig {
    /// Unique table identifier (used for DOM ids).
    pub table_id: &'static str,
    pub columns: Vec<TableColumn>,
    pub filters: Vec<TableFilter>,
    pub search_placeholder: &'static str,
    /// Title for the empty state.
    pub empty_title: &'static str,
    /// Secondary line for the empty state.
    pub empty_description: &'static str,
}

impl DataTableConfig {
    #[must_use]
    pub const fn new(table_id: &'static str) -> Self {
        Self {
            table_id,
            columns: Vec::new(),
            filters: Vec::new(),
            search_placeholder: "Search...",
            empty_title: "No results",
            empty_description: "Try adjusting your search or filters",
        }
    }

    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: TableFilter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub const fn search_placeholder(mut self, placeholder: &'static str) -> Self {
        self.search_placeholder = placeholder;
        self
    }

    #[must_use]
    pub const fn empty_state(mut self, title: &'static str, description: &'static str) -> Self {
        self.empty_title = title;
        self.empty_description = description;
        self
    }

    /// Look up a filter definition by key.
    #[must_use]
    pub fn filter_by_key(&self, key: &str) -> Option<&TableFilter> {
        self.filters.iter().find(|f| f.key == key)
    }
}

fn all_option() -> FilterOption {
    FilterOption::new("", "All")
}

/// Build the orders table configuration.
#[must_use]
pub fn orders_table_config() -> DataTableConfig {
    let status_options = std::iter::once(all_option())
        .chain(
            OrderStatus::ALL
                .iter()
                .map(|s| FilterOption::new(s.as_str(), s.label())),
        )
        .collect();
    let payment_options = std::iter::once(all_option())
        .chain(
            PaymentStatus::ALL
                .iter()
                .map(|s| FilterOption::new(s.as_str(), s.label())),
        )
        .collect();

    DataTableConfig::new("orders")
        .column(TableColumn::sortable(OrderSortField::Number.as_str(), "Order"))
        .column(TableColumn::sortable(OrderSortField::PlacedAt.as_str(), "Date"))
        .column(TableColumn::sortable(OrderSortField::Customer.as_str(), "Customer"))
        .column(TableColumn::new("payment", "Payment"))
        .column(TableColumn::sortable(OrderSortField::Status.as_str(), "Status"))
        .column(TableColumn::new("items", "Items").numeric())
        .column(TableColumn::sortable(OrderSortField::Total.as_str(), "Total").numeric())
        .filter(TableFilter::search("search", "Search"))
        .filter(TableFilter::select("status", "Status", status_options))
        .filter(TableFilter::select("payment_status", "Payment", payment_options))
        .filter(TableFilter::date_range("date", "Date"))
        .search_placeholder("Search by order number, customer or email...")
        .empty_state("No orders found", "Try adjusting your search or filters")
}

/// Build the products list configuration.
#[must_use]
pub fn products_table_config() -> DataTableConfig {
    let stock_options = std::iter::once(all_option())
        .chain(
            StockStatus::ALL
                .iter()
                .map(|s| FilterOption::new(s.as_str(), s.label())),
        )
        .collect();

    DataTableConfig::new("products")
        .column(TableColumn::sortable(ProductSortField::Title.as_str(), "Product"))
        .column(TableColumn::sortable(ProductSortField::Price.as_str(), "Price").numeric())
        .column(TableColumn::new("discount", "Discount").numeric())
        .column(TableColumn::sortable(ProductSortField::Stock.as_str(), "Stock").numeric())
        .column(TableColumn::new("published", "Published"))
        .column(TableColumn::sortable(ProductSortField::CreatedAt.as_str(), "Created"))
        .column(TableColumn::new("actions", ""))
        .filter(TableFilter::search("search", "Search"))
        .filter(TableFilter::select("stock_status", "Stock", stock_options))
        .filter(TableFilter::select(
            "published",
            "Published",
            vec![
                all_option(),
                FilterOption::new("true", "Published"),
                FilterOption::new("false", "Draft"),
            ],
        ))
        .search_placeholder("Search products by title or handle...")
        .empty_state("No products found", "Try adjusting your search or filters")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_sortable_columns_map_to_sort_fields() {
        let config = orders_table_config();
        for column in config.columns.iter().filter(|c| c.sortable) {
            assert!(
                column.key.parse::<OrderSortField>().is_ok(),
                "{} is not an order sort field",
                column.key
            );
        }
    }

    #[test]
    fn test_products_sortable_columns_map_to_sort_fields() {
        let config = products_table_config();
        for column in config.columns.iter().filter(|c| c.sortable) {
            assert!(column.key.parse::<ProductSortField>().is_ok());
        }
    }

    #[test]
    fn test_status_filter_lists_every_status() {
        let config = orders_table_config();
        let status = config.filter_by_key("status").unwrap();
        assert_eq!(status.options.len(), OrderStatus::ALL.len() + 1);
        assert_eq!(status.options.first().unwrap().value, "");
    }

    #[test]
    fn test_empty_state_copy() {
        assert_eq!(orders_table_config().empty_title, "No orders found");
        assert_eq!(products_table_config().empty_title, "No products found");
    }
}
