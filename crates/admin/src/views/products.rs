//! Products list.

use askama::Template;
use storeview_core::catalog::Product;
use storeview_core::display::discount_percent;
use storeview_core::view::{Pagination, ProductFilterPatch, ProductFilters, ProductSortField};
use storeview_core::{CategoryId, ProductId, StockStatus};
use tracing::{debug, instrument};

use crate::components::data_table::products_table_config;
use crate::components::{DataTableConfig, Handler, ListCallbacks, PaginationControl, stock_badge};
use crate::error::AdminError;
use crate::views::{HeaderCell, SelectOption};

const DATE_FORMAT: &str = "%-d %b %Y";

/// Product row prepared for the list template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRowView {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub thumbnail: String,
    pub price: String,
    pub mrp: String,
    pub show_mrp: bool,
    pub discount_percent: u32,
    pub stock: u32,
    pub stock_label: &'static str,
    pub stock_class: &'static str,
    pub is_published: bool,
    pub created_at: String,
}

impl ProductRowView {
    fn new(product: &Product, low_stock_threshold: u32) -> Self {
        let badge = stock_badge(product.stock_status(low_stock_threshold));
        let discount = discount_percent(product.price, product.mrp);
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            handle: product.handle.clone(),
            thumbnail: product.thumbnail.clone().unwrap_or_default(),
            price: product.price.display(),
            mrp: product.mrp.display(),
            show_mrp: discount > 0,
            discount_percent: discount,
            stock: product.stock,
            stock_label: badge.label,
            stock_class: badge.class,
            is_published: product.is_published,
            created_at: product.created_at.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Products list template.
#[derive(Debug, Template)]
#[template(path = "products/list.html")]
pub struct ProductsListTemplate {
    pub table_id: &'static str,
    pub search_placeholder: &'static str,
    pub search_value: String,
    pub headers: Vec<HeaderCell>,
    pub category_options: Vec<SelectOption>,
    pub stock_options: Vec<SelectOption>,
    pub published_options: Vec<SelectOption>,
    pub active_filter_count: usize,
    pub rows: Vec<ProductRowView>,
    pub empty_title: &'static str,
    pub empty_description: &'static str,
    pub pagination_html: String,
}

/// Stateless products list over parent-owned items, filters and pagination.
pub struct ProductsList<'a> {
    config: DataTableConfig,
    items: &'a [Product],
    filters: &'a ProductFilters,
    pagination: Pagination,
    low_stock_threshold: u32,
    categories: Vec<(CategoryId, String)>,
    callbacks: ListCallbacks<'a, ProductFilterPatch, ProductSortField>,
    on_toggle_published: Option<Handler<'a, (ProductId, bool)>>,
    on_delete: Option<Handler<'a, ProductId>>,
}

impl std::fmt::Debug for ProductsList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductsList")
            .field("items", &self.items.len())
            .field("pagination", &self.pagination)
            .field("callbacks", &self.callbacks)
            .field("on_toggle_published", &self.on_toggle_published.is_some())
            .field("on_delete", &self.on_delete.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> ProductsList<'a> {
    #[must_use]
    pub fn new(items: &'a [Product], filters: &'a ProductFilters, pagination: Pagination) -> Self {
        Self {
            config: products_table_config(),
            items,
            filters,
            pagination,
            low_stock_threshold: StockStatus::DEFAULT_LOW_STOCK_THRESHOLD,
            categories: Vec::new(),
            callbacks: ListCallbacks::new(),
            on_toggle_published: None,
            on_delete: None,
        }
    }

    #[must_use]
    pub const fn low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    /// Categories offered in the category filter, as `(id, name)`.
    #[must_use]
    pub fn categories(mut self, categories: Vec<(CategoryId, String)>) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn with_callbacks(
        mut self,
        callbacks: ListCallbacks<'a, ProductFilterPatch, ProductSortField>,
    ) -> Self {
        self.callbacks = callbacks;
        self
    }

    #[must_use]
    pub fn on_toggle_published(mut self, handler: impl Fn((ProductId, bool)) + 'a) -> Self {
        self.on_toggle_published = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_delete(mut self, handler: impl Fn(ProductId) + 'a) -> Self {
        self.on_delete = Some(Box::new(handler));
        self
    }

    pub fn click_sort(&self, field: ProductSortField) {
        self.callbacks.emit_sort_change(self.filters.sort.toggled(field));
    }

    pub fn click_page(&self, page: u32) {
        self.callbacks.emit_change_page(page);
    }

    pub fn click_previous(&self) {
        if self.pagination.has_previous() {
            self.callbacks.emit_change_page(self.pagination.page - 1);
        }
    }

    pub fn click_next(&self) {
        if self.pagination.has_next() {
            self.callbacks.emit_change_page(self.pagination.page + 1);
        }
    }

    pub fn change_per_page(&self, per_page: u32) {
        self.callbacks.emit_change_per_page(per_page);
    }

    pub fn search(&self, text: &str) {
        self.callbacks.emit_change_filters(ProductFilterPatch::search(text));
    }

    pub fn select_category(&self, category: Option<CategoryId>) {
        self.callbacks.emit_change_filters(ProductFilterPatch::category(category));
    }

    pub fn select_stock_status(&self, status: Option<StockStatus>) {
        self.callbacks.emit_change_filters(ProductFilterPatch::stock_status(status));
    }

    pub fn select_published(&self, published: Option<bool>) {
        self.callbacks.emit_change_filters(ProductFilterPatch::published(published));
    }

    pub fn clear_filters(&self) {
        self.callbacks.emit_change_filters(ProductFilterPatch::clear());
    }

    /// Publish switch flipped. Emits the new value for the row.
    pub fn toggle_published(&self, id: &ProductId) {
        let Some(product) = self.items.iter().find(|p| &p.id == id) else {
            debug!(%id, "toggle_published for a product not on this page");
            return;
        };
        let next = !product.is_published;
        debug!(%id, published = next, "emit toggle_published");
        if let Some(handler) = &self.on_toggle_published {
            handler((id.clone(), next));
        }
    }

    /// Delete confirmed for a row.
    pub fn delete(&self, id: &ProductId) {
        debug!(%id, "emit delete");
        if let Some(handler) = &self.on_delete {
            handler(id.clone());
        }
    }

    /// Build the template context.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Render` if the pagination control fails to render.
    pub fn template(&self) -> Result<ProductsListTemplate, AdminError> {
        let filters = self.filters;
        let rows: Vec<ProductRowView> = self
            .items
            .iter()
            .map(|p| ProductRowView::new(p, self.low_stock_threshold))
            .collect();

        let pagination_html = if rows.is_empty() {
            String::new()
        } else {
            PaginationControl::new(self.config.table_id, &self.pagination).render()?
        };

        let current_category = filters.category.as_ref().map_or("", CategoryId::as_str);
        let category_options = if self.categories.is_empty() {
            Vec::new()
        } else {
            std::iter::once(SelectOption {
                value: String::new(),
                label: "All".to_string(),
                selected: current_category.is_empty(),
            })
            .chain(self.categories.iter().map(|(id, name)| SelectOption {
                value: id.to_string(),
                label: name.clone(),
                selected: id.as_str() == current_category,
            }))
            .collect()
        };

        let published_key = match filters.published {
            Some(true) => "true",
            Some(false) => "false",
            None => "",
        };

        Ok(ProductsListTemplate {
            table_id: self.config.table_id,
            search_placeholder: self.config.search_placeholder,
            search_value: filters.search.clone(),
            headers: HeaderCell::from_columns(
                &self.config.columns,
                filters.sort.field.map(|f| f.as_str()),
                filters.sort.direction,
            ),
            category_options,
            stock_options: SelectOption::for_filter(
                self.config.filter_by_key("stock_status"),
                filters.stock_status.map_or("", |s| s.as_str()),
            ),
            published_options: SelectOption::for_filter(
                self.config.filter_by_key("published"),
                published_key,
            ),
            active_filter_count: filters.active_count(),
            rows,
            empty_title: self.config.empty_title,
            empty_description: self.config.empty_description,
            pagination_html,
        })
    }

    /// Render the list to HTML.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Render` if the template fails to render.
    #[instrument(skip(self), fields(items = self.items.len(), page = self.pagination.page))]
    pub fn render(&self) -> Result<String, AdminError> {
        Ok(self.template()?.render()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use chrono::{TimeZone, Utc};
    use storeview_core::view::{SortDirection, SortState};
    use storeview_core::{CurrencyCode, Money};

    use super::*;

    fn product(id: &str, stock: u32, published: bool) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Tee {id}"),
            handle: format!("tee-{id}"),
            category: None,
            price: Money::new(349_900, CurrencyCode::INR),
            mrp: Money::new(399_900, CurrencyCode::INR),
            stock,
            thumbnail: None,
            is_published: published,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_toggle_published_emits_flipped_value() {
        let items = vec![product("a", 10, true), product("b", 0, false)];
        let filters = ProductFilters::default();
        let toggles = RefCell::new(Vec::new());
        let list = ProductsList::new(&items, &filters, Pagination::for_total(1, 20, 2))
            .on_toggle_published(|t| toggles.borrow_mut().push(t));
        list.toggle_published(&ProductId::new("a"));
        list.toggle_published(&ProductId::new("b"));
        list.toggle_published(&ProductId::new("missing"));
        drop(list);
        assert_eq!(
            toggles.into_inner(),
            vec![(ProductId::new("a"), false), (ProductId::new("b"), true)]
        );
    }

    #[test]
    fn test_delete_emits_id() {
        let items = vec![product("a", 10, true)];
        let filters = ProductFilters::default();
        let deleted = RefCell::new(None);
        let list = ProductsList::new(&items, &filters, Pagination::for_total(1, 20, 1))
            .on_delete(|id| *deleted.borrow_mut() = Some(id));
        list.delete(&ProductId::new("a"));
        drop(list);
        assert_eq!(deleted.into_inner(), Some(ProductId::new("a")));
    }

    #[test]
    fn test_click_sort_on_new_column_is_ascending() {
        let filters = ProductFilters {
            sort: SortState::by(ProductSortField::Price, SortDirection::Desc),
            ..ProductFilters::default()
        };
        let sorts = RefCell::new(Vec::new());
        let list = ProductsList::new(&[], &filters, Pagination::for_total(1, 20, 0))
            .with_callbacks(ListCallbacks::new().on_sort_change(|s| sorts.borrow_mut().push(s)));
        list.click_sort(ProductSortField::Stock);
        list.click_sort(ProductSortField::Price);
        drop(list);
        assert_eq!(
            sorts.into_inner(),
            vec![
                SortState::by(ProductSortField::Stock, SortDirection::Asc),
                SortState::by(ProductSortField::Price, SortDirection::Asc),
            ]
        );
    }

    #[test]
    fn test_rows_show_discount_and_stock_badge() {
        let items = vec![product("a", 3, true)];
        let filters = ProductFilters::default();
        let template = ProductsList::new(&items, &filters, Pagination::for_total(1, 20, 1))
            .low_stock_threshold(5)
            .template()
            .unwrap();
        let row = template.rows.first().unwrap();
        assert_eq!(row.discount_percent, 13);
        assert_eq!(row.stock_label, "Low stock");
        assert!(row.show_mrp);
    }

    #[test]
    fn test_template_embeds_pagination_control() {
        let items = vec![product("a", 10, true)];
        let template = ProductsList::new(&items, &ProductFilters::default(), Pagination::for_total(1, 20, 1))
            .template()
            .unwrap();
        assert!(template.pagination_html.contains("Showing 1–1 of 1"));
        assert!(template.pagination_html.contains("pagination-prev"));
    }

    #[test]
    fn test_empty_list_renders_empty_state() {
        let filters = ProductFilters::default().merged(ProductFilterPatch::search("zzz"));
        let html = ProductsList::new(&[], &filters, Pagination::for_total(3, 20, 80))
            .render()
            .unwrap();
        assert!(html.contains("No products found"));
        assert!(!html.contains("pagination-prev"));
    }

    #[test]
    fn test_category_select_only_with_categories() {
        let filters = ProductFilters {
            category: Some(CategoryId::new("pcat_tees")),
            ..ProductFilters::default()
        };
        let bare = ProductsList::new(&[], &filters, Pagination::for_total(1, 20, 0))
            .template()
            .unwrap();
        assert!(bare.category_options.is_empty());

        let with = ProductsList::new(&[], &filters, Pagination::for_total(1, 20, 0))
            .categories(vec![
                (CategoryId::new("pcat_tees"), "Tees".to_string()),
                (CategoryId::new("pcat_caps"), "Caps".to_string()),
            ])
            .template()
            .unwrap();
        let selected: Vec<&str> = with
            .category_options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(selected, vec!["Tees"]);
    }
}
