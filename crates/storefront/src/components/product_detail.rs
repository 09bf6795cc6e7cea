//! Product detail page.
//!
//! Owns the shopper's local choices (attribute values, quantity and which
//! details section is open) and reports variant changes and add-to-cart
//! through optional callbacks.

use askama::Template;
use storeview_core::catalog::{ProductDetail, ProductVariant};
use storeview_core::display::discount_percent;
use storeview_core::view::{VariantSelector, stock_badge};
use storeview_core::{StockStatus, VariantId};
use tracing::{debug, instrument};

use super::Handler;
use crate::error::StorefrontError;

/// One selectable value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionValueView {
    pub value: String,
    pub color: String,
    pub selected: bool,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeView {
    pub name: String,
    pub values: Vec<OptionValueView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub index: usize,
    pub title: String,
    pub body: String,
    pub open: bool,
}

#[derive(Debug, Template)]
#[template(path = "product/detail.html")]
pub struct ProductDetailTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub price: String,
    pub mrp: String,
    pub discount_percent: u32,
    pub stock_label: &'static str,
    pub stock_class: &'static str,
    pub sku: String,
    pub attributes: Vec<AttributeView>,
    pub quantity: u32,
    pub can_add_to_cart: bool,
    pub sections: Vec<SectionView>,
}

/// Product detail with variant selection, quantity and an accordion.
pub struct ProductDetailView<'a> {
    product: &'a ProductDetail,
    selector: VariantSelector,
    quantity: u32,
    open_section: Option<usize>,
    low_stock_threshold: u32,
    on_variant_change: Option<Handler<'a, VariantId>>,
    on_add_to_cart: Option<Handler<'a, (VariantId, u32)>>,
}

impl std::fmt::Debug for ProductDetailView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductDetailView")
            .field("product", &self.product.product.id)
            .field("selector", &self.selector)
            .field("quantity", &self.quantity)
            .field("open_section", &self.open_section)
            .finish_non_exhaustive()
    }
}

impl<'a> ProductDetailView<'a> {
    /// Starts on the first variant with quantity 1 and every section closed.
    #[must_use]
    pub fn new(product: &'a ProductDetail) -> Self {
        Self {
            product,
            selector: VariantSelector::for_product(product),
            quantity: 1,
            open_section: None,
            low_stock_threshold: StockStatus::DEFAULT_LOW_STOCK_THRESHOLD,
            on_variant_change: None,
            on_add_to_cart: None,
        }
    }

    #[must_use]
    pub const fn low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    #[must_use]
    pub fn on_variant_change(mut self, handler: impl Fn(VariantId) + 'a) -> Self {
        self.on_variant_change = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_add_to_cart(mut self, handler: impl Fn((VariantId, u32)) + 'a) -> Self {
        self.on_add_to_cart = Some(Box::new(handler));
        self
    }

    pub fn selected_variant(&self) -> Option<&'a ProductVariant> {
        self.selector.selected_variant(&self.product.variants)
    }

    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    pub const fn open_section(&self) -> Option<usize> {
        self.open_section
    }

    fn max_quantity(&self) -> u32 {
        self.selected_variant().map_or(1, |v| v.stock.max(1))
    }

    /// Pick an attribute value. Fires `on_variant_change` only when the
    /// resolved variant is a different one.
    pub fn select_attribute(&mut self, attribute: &str, value: &str) {
        if !self.selector.select(attribute, value, &self.product.variants) {
            return;
        }
        self.quantity = self.quantity.min(self.max_quantity());
        if let Some(id) = self.selector.selected.clone() {
            debug!(%id, "emit variant_change");
            if let Some(handler) = &self.on_variant_change {
                handler(id);
            }
        }
    }

    /// Clamped to `1..=stock` of the selected variant.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(1, self.max_quantity());
    }

    pub fn increment_quantity(&mut self) {
        self.set_quantity(self.quantity.saturating_add(1));
    }

    pub fn decrement_quantity(&mut self) {
        self.set_quantity(self.quantity.saturating_sub(1));
    }

    /// Open section `index`, or close it if it is already open.
    pub fn toggle_section(&mut self, index: usize) {
        if index >= self.product.sections.len() {
            return;
        }
        self.open_section = if self.open_section == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Report the selected variant and quantity. Nothing happens when the
    /// variant is out of stock.
    pub fn add_to_cart(&self) {
        let Some(variant) = self.selected_variant().filter(|v| v.stock > 0) else {
            debug!(product = %self.product.product.id, "add_to_cart ignored, nothing in stock");
            return;
        };
        debug!(variant = %variant.id, quantity = self.quantity, "emit add_to_cart");
        if let Some(handler) = &self.on_add_to_cart {
            handler((variant.id.clone(), self.quantity));
        }
    }

    #[must_use]
    pub fn template(&self) -> ProductDetailTemplate {
        let product = self.product;
        let variant = self.selected_variant();
        let price = variant.map_or(product.product.price, |v| v.price);
        let mrp = variant.map_or(product.product.mrp, |v| v.mrp);
        let stock = variant.map_or(product.product.stock, |v| v.stock);
        let badge = stock_badge(StockStatus::from_stock(stock, self.low_stock_threshold));

        let attributes = product
            .attributes
            .iter()
            .map(|attribute| AttributeView {
                name: attribute.name.clone(),
                values: attribute
                    .values
                    .iter()
                    .map(|v| OptionValueView {
                        value: v.value().to_string(),
                        color: v.color().unwrap_or_default().to_string(),
                        selected: self.selector.is_selected(&attribute.name, v.value()),
                        available: self.selector.is_value_available(
                            &attribute.name,
                            v.value(),
                            &product.variants,
                        ),
                    })
                    .collect(),
            })
            .collect();

        let sections = product
            .sections
            .iter()
            .enumerate()
            .map(|(index, s)| SectionView {
                index,
                title: s.title.clone(),
                body: s.body.clone(),
                open: self.open_section == Some(index),
            })
            .collect();

        ProductDetailTemplate {
            id: product.product.id.to_string(),
            title: product.product.title.clone(),
            description: product.description.clone(),
            images: product.images.clone(),
            price: price.display(),
            mrp: mrp.display(),
            discount_percent: discount_percent(price, mrp),
            stock_label: badge.label,
            stock_class: badge.class,
            sku: variant.map(|v| v.sku.clone()).unwrap_or_default(),
            attributes,
            quantity: self.quantity,
            can_add_to_cart: stock > 0,
            sections,
        }
    }

    /// Render the product page to HTML.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Render` if the template fails to render.
    #[instrument(skip(self), fields(product = %self.product.product.id))]
    pub fn render(&self) -> Result<String, StorefrontError> {
        Ok(self.template().render()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    use chrono::Utc;
    use storeview_core::catalog::{AttributeValue, DetailSection, Product, ProductAttribute};
    use storeview_core::{CurrencyCode, Money, ProductId};

    use super::*;

    fn inr(amount: i64) -> Money {
        Money::new(amount, CurrencyCode::INR)
    }

    fn variant(size: &str, color: &str, stock: u32) -> ProductVariant {
        ProductVariant {
            id: VariantId::new(format!("{size}-{color}")),
            sku: format!("TEE-{size}-{color}"),
            options: BTreeMap::from([
                ("Color".to_string(), color.to_string()),
                ("Size".to_string(), size.to_string()),
            ]),
            price: inr(349_900),
            mrp: inr(399_900),
            stock,
        }
    }

    fn tee() -> ProductDetail {
        ProductDetail {
            product: Product {
                id: ProductId::new("prod_tee"),
                title: "Classic Tee".to_string(),
                handle: "classic-tee".to_string(),
                category: None,
                price: inr(349_900),
                mrp: inr(399_900),
                stock: 13,
                thumbnail: None,
                is_published: true,
                created_at: Utc::now(),
            },
            description: "Soft cotton".to_string(),
            images: vec!["/images/tee.jpg".to_string()],
            attributes: vec![
                ProductAttribute {
                    name: "Size".to_string(),
                    values: vec![AttributeValue::Plain("S".into()), AttributeValue::Plain("M".into())],
                },
                ProductAttribute {
                    name: "Color".to_string(),
                    values: vec![
                        AttributeValue::Swatch { value: "Red".into(), color: "#d32f2f".into() },
                        AttributeValue::Swatch { value: "Blue".into(), color: "#1e40af".into() },
                    ],
                },
            ],
            variants: vec![variant("S", "Red", 3), variant("M", "Red", 10), variant("S", "Blue", 0)],
            seo: storeview_core::catalog::Seo::default(),
            merchant_centre: storeview_core::catalog::MerchantCentre::default(),
            sections: vec![
                DetailSection { title: "Fabric".into(), body: "Cotton".into() },
                DetailSection { title: "Returns".into(), body: "15 days".into() },
            ],
        }
    }

    #[test]
    fn test_variant_change_fires_only_on_change() {
        let product = tee();
        let changes = RefCell::new(Vec::new());
        let mut view = ProductDetailView::new(&product).on_variant_change(|id| changes.borrow_mut().push(id));
        view.select_attribute("Size", "S");
        view.select_attribute("Size", "M");
        // M / Blue does not exist: M / Red stays selected
        view.select_attribute("Color", "Blue");
        drop(view);
        assert_eq!(changes.into_inner(), vec![VariantId::new("M-Red")]);
    }

    #[test]
    fn test_quantity_clamped_to_stock() {
        let product = tee();
        let mut view = ProductDetailView::new(&product);
        view.set_quantity(9);
        assert_eq!(view.quantity(), 3);
        view.set_quantity(0);
        assert_eq!(view.quantity(), 1);
        view.decrement_quantity();
        assert_eq!(view.quantity(), 1);
    }

    #[test]
    fn test_one_section_open_at_a_time() {
        let product = tee();
        let mut view = ProductDetailView::new(&product);
        view.toggle_section(0);
        assert_eq!(view.open_section(), Some(0));
        view.toggle_section(1);
        assert_eq!(view.open_section(), Some(1));
        view.toggle_section(1);
        assert_eq!(view.open_section(), None);
        view.toggle_section(7);
        assert_eq!(view.open_section(), None);
    }

    #[test]
    fn test_add_to_cart_skips_out_of_stock() {
        let mut product = tee();
        product.variants.rotate_left(2);
        let added = RefCell::new(Vec::new());
        let view = ProductDetailView::new(&product).on_add_to_cart(|a| added.borrow_mut().push(a));
        view.add_to_cart();
        drop(view);
        assert!(added.into_inner().is_empty());
    }

    #[test]
    fn test_add_to_cart_reports_quantity() {
        let product = tee();
        let added = RefCell::new(Vec::new());
        let mut view =
            ProductDetailView::new(&product).on_add_to_cart(|a| added.borrow_mut().push(a));
        view.select_attribute("Size", "M");
        view.set_quantity(4);
        view.add_to_cart();
        drop(view);
        assert_eq!(added.into_inner(), vec![(VariantId::new("M-Red"), 4)]);
    }

    #[test]
    fn test_render_marks_unavailable_values() {
        let product = tee();
        let view = ProductDetailView::new(&product);
        let template = view.template();
        let color = template.attributes.iter().find(|a| a.name == "Color").unwrap();
        let blue = color.values.iter().find(|v| v.value == "Blue").unwrap();
        assert!(!blue.available);
        assert_eq!(template.discount_percent, 13);
        assert_eq!(template.stock_class, "badge badge-warning");

        let html = view.render().unwrap();
        assert!(html.contains("₹3,499.00"));
        assert!(html.contains("13% off"));
        assert!(html.contains(r#"data-value="Blue" disabled"#));
    }
}
