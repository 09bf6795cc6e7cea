//! Orders table.

use askama::Template;
use chrono::NaiveDate;
use storeview_core::OrderStatus;
use storeview_core::PaymentStatus;
use storeview_core::order::OrderRow;
use storeview_core::view::{
    DatePreset, OrderFilterPatch, OrderFilters, OrderSortField, Pagination,
};
use tracing::instrument;

use crate::components::data_table::orders_table_config;
use crate::components::{
    DataTableConfig, ListCallbacks, PaginationControl, order_status_badge, payment_status_badge,
};
use crate::error::AdminError;
use crate::views::{DATE_TIME_FORMAT, HeaderCell, SelectOption};

/// Order row prepared for the table template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRowView {
    pub id: String,
    pub number: String,
    pub placed_at: String,
    pub customer_name: String,
    pub customer_email: String,
    pub payment_label: &'static str,
    pub payment_class: &'static str,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub item_count: u32,
    pub total: String,
}

impl From<&OrderRow> for OrderRowView {
    fn from(row: &OrderRow) -> Self {
        let payment = payment_status_badge(row.payment_status);
        let status = order_status_badge(row.status);
        Self {
            id: row.id.to_string(),
            number: row.number.clone(),
            placed_at: row.placed_at.format(DATE_TIME_FORMAT).to_string(),
            customer_name: row.customer_name.clone(),
            customer_email: row.customer_email.clone().unwrap_or_default(),
            payment_label: payment.label,
            payment_class: payment.class,
            status_label: status.label,
            status_class: status.class,
            item_count: row.item_count,
            total: row.total.display(),
        }
    }
}

/// Orders table template.
#[derive(Debug, Template)]
#[template(path = "orders/table.html")]
pub struct OrdersTableTemplate {
    pub table_id: &'static str,
    pub search_placeholder: &'static str,
    pub search_value: String,
    pub headers: Vec<HeaderCell>,
    pub status_options: Vec<SelectOption>,
    pub payment_options: Vec<SelectOption>,
    pub preset_options: Vec<SelectOption>,
    pub show_custom_range: bool,
    pub date_from: String,
    pub date_to: String,
    pub active_filter_count: usize,
    pub rows: Vec<OrderRowView>,
    pub empty_title: &'static str,
    pub empty_description: &'static str,
    pub pagination_html: String,
}

/// Stateless orders table over parent-owned items, filters and pagination.
///
/// `items` are already filtered, sorted and paginated by the caller.
#[derive(Debug)]
pub struct OrdersTable<'a> {
    config: DataTableConfig,
    items: &'a [OrderRow],
    filters: &'a OrderFilters,
    pagination: Pagination,
    callbacks: ListCallbacks<'a, OrderFilterPatch, OrderSortField>,
}

impl<'a> OrdersTable<'a> {
    #[must_use]
    pub fn new(items: &'a [OrderRow], filters: &'a OrderFilters, pagination: Pagination) -> Self {
        Self {
            config: orders_table_config(),
            items,
            filters,
            pagination,
            callbacks: ListCallbacks::new(),
        }
    }

    /// Attach intent handlers.
    #[must_use]
    pub fn with_callbacks(
        mut self,
        callbacks: ListCallbacks<'a, OrderFilterPatch, OrderSortField>,
    ) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Header click: same column flips direction, a new column sorts ascending.
    pub fn click_sort(&self, field: OrderSortField) {
        self.callbacks.emit_sort_change(self.filters.sort.toggled(field));
    }

    /// Page-number click.
    pub fn click_page(&self, page: u32) {
        self.callbacks.emit_change_page(page);
    }

    /// "Previous" click; disabled on page 1.
    pub fn click_previous(&self) {
        if self.pagination.has_previous() {
            self.callbacks.emit_change_page(self.pagination.page - 1);
        }
    }

    /// "Next" click; disabled on the last page.
    pub fn click_next(&self) {
        if self.pagination.has_next() {
            self.callbacks.emit_change_page(self.pagination.page + 1);
        }
    }

    pub fn change_per_page(&self, per_page: u32) {
        self.callbacks.emit_change_per_page(per_page);
    }

    pub fn search(&self, text: &str) {
        self.callbacks
            .emit_change_filters(OrderFilterPatch::search(text));
    }

    pub fn select_status(&self, status: Option<OrderStatus>) {
        self.callbacks
            .emit_change_filters(OrderFilterPatch::status(status));
    }

    pub fn select_payment_status(&self, status: Option<PaymentStatus>) {
        self.callbacks
            .emit_change_filters(OrderFilterPatch::payment_status(status));
    }

    /// Preset chip click. Bounds are computed from `today` at click time.
    pub fn select_date_preset(&self, preset: DatePreset, today: NaiveDate) {
        self.callbacks
            .emit_change_filters(OrderFilterPatch::date_preset(preset, today));
    }

    /// Manual date-picker input.
    pub fn set_custom_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.callbacks
            .emit_change_filters(OrderFilterPatch::custom_range(from, to));
    }

    pub fn clear_filters(&self) {
        self.callbacks.emit_change_filters(OrderFilterPatch::clear());
    }

    /// Build the template context.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Render` if the pagination control fails to render.
    pub fn template(&self) -> Result<OrdersTableTemplate, AdminError> {
        let filters = self.filters;
        let active_sort = filters.sort.field.map(|f| f.as_str());
        let rows: Vec<OrderRowView> = self.items.iter().map(OrderRowView::from).collect();

        let pagination_html = if rows.is_empty() {
            String::new()
        } else {
            PaginationControl::new(self.config.table_id, &self.pagination).render()?
        };

        let preset_key = filters.date_preset.map_or("", |p| p.as_str());
        let preset_options = std::iter::once(SelectOption {
            value: String::new(),
            label: "Any time".to_string(),
            selected: preset_key.is_empty(),
        })
        .chain(DatePreset::ALL.iter().map(|p| SelectOption {
            value: p.as_str().to_string(),
            label: p.label().to_string(),
            selected: p.as_str() == preset_key,
        }))
        .collect();

        Ok(OrdersTableTemplate {
            table_id: self.config.table_id,
            search_placeholder: self.config.search_placeholder,
            search_value: filters.search.clone(),
            headers: HeaderCell::from_columns(
                &self.config.columns,
                active_sort,
                filters.sort.direction,
            ),
            status_options: SelectOption::for_filter(
                self.config.filter_by_key("status"),
                filters.status.map_or("", |s| s.as_str()),
            ),
            payment_options: SelectOption::for_filter(
                self.config.filter_by_key("payment_status"),
                filters.payment_status.map_or("", |s| s.as_str()),
            ),
            preset_options,
            show_custom_range: filters.date_preset == Some(DatePreset::Custom),
            date_from: filters.date_from.map(|d| d.to_string()).unwrap_or_default(),
            date_to: filters.date_to.map(|d| d.to_string()).unwrap_or_default(),
            active_filter_count: filters.active_count(),
            rows,
            empty_title: self.config.empty_title,
            empty_description: self.config.empty_description,
            pagination_html,
        })
    }

    /// Render the table to HTML.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Render` if the template fails to render.
    #[instrument(skip(self), fields(items = self.items.len(), page = self.pagination.page))]
    pub fn render(&self) -> Result<String, AdminError> {
        Ok(self.template()?.render()?)
    }
}
