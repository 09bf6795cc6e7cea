//! Cart page with order summary and coupon entry.

use askama::Template;
use storeview_core::{CurrencyCode, VariantId};
use storeview_core::cart::{CartItem, Coupon, OrderSummary, ShippingRule};
use storeview_core::display::discount_percent;
use tracing::{debug, instrument};

use super::Handler;
use crate::error::StorefrontError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub variant_id: String,
    pub title: String,
    pub variant_title: String,
    pub thumbnail: String,
    pub price: String,
    pub mrp: String,
    pub discount_percent: u32,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            variant_id: item.variant_id.to_string(),
            title: item.title.clone(),
            variant_title: item.variant_title.clone().unwrap_or_default(),
            thumbnail: item.thumbnail.clone().unwrap_or_default(),
            price: item.price.display(),
            mrp: item.mrp.display(),
            discount_percent: discount_percent(item.price, item.mrp),
            quantity: item.quantity,
            line_total: item.line_total().display(),
        }
    }
}

#[derive(Debug, Template)]
#[template(path = "cart/cart.html")]
pub struct CartTemplate {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
    pub savings: String,
    pub has_savings: bool,
    pub coupon_code: String,
    pub coupon_discount: String,
    pub coupon_applied: bool,
    pub coupon_error: String,
    pub shipping: String,
    pub free_shipping: bool,
    pub total: String,
}

/// Stateless cart over parent-owned items and coupon.
pub struct CartView<'a> {
    items: &'a [CartItem],
    coupon: Option<&'a Coupon>,
    shipping: ShippingRule,
    currency: CurrencyCode,
    on_update_quantity: Option<Handler<'a, (VariantId, u32)>>,
    on_remove_item: Option<Handler<'a, VariantId>>,
    on_apply_coupon: Option<Handler<'a, String>>,
    on_remove_coupon: Option<Handler<'a, ()>>,
    on_checkout: Option<Handler<'a, ()>>,
}

impl std::fmt::Debug for CartView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartView")
            .field("items", &self.items.len())
            .field("coupon", &self.coupon.map(|c| c.code.as_str()))
            .field("shipping", &self.shipping)
            .finish_non_exhaustive()
    }
}

impl<'a> CartView<'a> {
    #[must_use]
    pub fn new(items: &'a [CartItem], coupon: Option<&'a Coupon>, shipping: ShippingRule) -> Self {
        Self {
            items,
            coupon,
            shipping,
            currency: CurrencyCode::default(),
            on_update_quantity: None,
            on_remove_item: None,
            on_apply_coupon: None,
            on_remove_coupon: None,
            on_checkout: None,
        }
    }

    /// Currency shown while the cart is empty.
    #[must_use]
    pub const fn currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    #[must_use]
    pub fn on_update_quantity(mut self, handler: impl Fn((VariantId, u32)) + 'a) -> Self {
        self.on_update_quantity = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_remove_item(mut self, handler: impl Fn(VariantId) + 'a) -> Self {
        self.on_remove_item = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_apply_coupon(mut self, handler: impl Fn(String) + 'a) -> Self {
        self.on_apply_coupon = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_remove_coupon(mut self, handler: impl Fn(()) + 'a) -> Self {
        self.on_remove_coupon = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_checkout(mut self, handler: impl Fn(()) + 'a) -> Self {
        self.on_checkout = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::compute_in(self.items, self.coupon, self.shipping, self.currency)
    }

    fn item(&self, id: &VariantId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.variant_id == id)
    }

    fn emit_quantity(&self, id: &VariantId, quantity: u32) {
        debug!(variant = %id, quantity, "emit update_quantity");
        if let Some(handler) = &self.on_update_quantity {
            handler((id.clone(), quantity));
        }
    }

    pub fn increment(&self, id: &VariantId) {
        if let Some(item) = self.item(id) {
            self.emit_quantity(id, item.quantity.saturating_add(1));
        }
    }

    /// Decrementing a line at quantity 1 removes it.
    pub fn decrement(&self, id: &VariantId) {
        match self.item(id) {
            Some(item) if item.quantity > 1 => self.emit_quantity(id, item.quantity - 1),
            Some(_) => self.remove(id),
            None => {}
        }
    }

    pub fn remove(&self, id: &VariantId) {
        debug!(variant = %id, "emit remove_item");
        if let Some(handler) = &self.on_remove_item {
            handler(id.clone());
        }
    }

    /// Submit a coupon code. Codes are trimmed and uppercased; blank input is
    /// ignored.
    pub fn apply_coupon(&self, code: &str) {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return;
        }
        debug!(%code, "emit apply_coupon");
        if let Some(handler) = &self.on_apply_coupon {
            handler(code);
        }
    }

    pub fn remove_coupon(&self) {
        if self.coupon.is_none() {
            return;
        }
        debug!("emit remove_coupon");
        if let Some(handler) = &self.on_remove_coupon {
            handler(());
        }
    }

    /// Checkout is unavailable for an empty cart.
    pub fn checkout(&self) {
        if self.items.is_empty() {
            return;
        }
        debug!(items = self.items.len(), "emit checkout");
        if let Some(handler) = &self.on_checkout {
            handler(());
        }
    }

    #[must_use]
    pub fn template(&self) -> CartTemplate {
        let summary = self.summary();
        CartTemplate {
            items: self.items.iter().map(CartItemView::from).collect(),
            item_count: summary.item_count,
            subtotal: summary.subtotal.display(),
            savings: summary.savings.display(),
            has_savings: summary.savings.amount > 0,
            coupon_code: self.coupon.map(|c| c.code.clone()).unwrap_or_default(),
            coupon_discount: summary.coupon_discount.display(),
            coupon_applied: self.coupon.is_some() && summary.coupon_error.is_none(),
            coupon_error: summary
                .coupon_error
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            shipping: summary.shipping.display(),
            free_shipping: summary.has_free_shipping(),
            total: summary.total.display(),
        }
    }

    /// Render the cart to HTML.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Render` if the template fails to render.
    #[instrument(skip(self), fields(items = self.items.len()))]
    pub fn render(&self) -> Result<String, StorefrontError> {
        Ok(self.template().render()?)
    }
}
