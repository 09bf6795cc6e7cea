//! Order detail view.

use askama::Template;
use storeview_core::order::OrderDetail;
use storeview_core::{OrderId, OrderStatus};
use tracing::{debug, instrument};

use crate::components::{Handler, order_status_badge, payment_status_badge};
use crate::error::AdminError;
use crate::views::{DATE_TIME_FORMAT, SelectOption};

/// Order line prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItemView {
    pub title: String,
    pub variant_title: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Timeline entry prepared for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntryView {
    pub label: &'static str,
    pub class: &'static str,
    pub note: String,
    pub at: String,
}

/// Order detail template.
#[derive(Debug, Template)]
#[template(path = "orders/detail.html")]
pub struct OrderDetailTemplate {
    pub id: String,
    pub number: String,
    pub placed_at: String,
    pub customer_name: String,
    pub customer_email: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub status_options: Vec<SelectOption>,
    pub items: Vec<OrderItemView>,
    pub subtotal: String,
    pub discount: String,
    pub has_discount: bool,
    pub shipping: String,
    pub total: String,
    pub payment_method: &'static str,
    pub payment_label: &'static str,
    pub payment_class: &'static str,
    pub transaction_id: String,
    pub address_lines: Vec<String>,
    pub timeline: Vec<TimelineEntryView>,
    pub note: String,
}

/// Order detail with status-change and note intents.
pub struct OrderDetailView<'a> {
    order: &'a OrderDetail,
    on_update_status: Option<Handler<'a, (OrderId, OrderStatus)>>,
    on_add_note: Option<Handler<'a, (OrderId, String)>>,
}

impl std::fmt::Debug for OrderDetailView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderDetailView")
            .field("order", &self.order.row.id)
            .field("on_update_status", &self.on_update_status.is_some())
            .field("on_add_note", &self.on_add_note.is_some())
            .finish()
    }
}

impl<'a> OrderDetailView<'a> {
    #[must_use]
    pub const fn new(order: &'a OrderDetail) -> Self {
        Self {
            order,
            on_update_status: None,
            on_add_note: None,
        }
    }

    #[must_use]
    pub fn on_update_status(mut self, handler: impl Fn((OrderId, OrderStatus)) + 'a) -> Self {
        self.on_update_status = Some(Box::new(handler));
        self
    }

    #[must_use]
    pub fn on_add_note(mut self, handler: impl Fn((OrderId, String)) + 'a) -> Self {
        self.on_add_note = Some(Box::new(handler));
        self
    }

    /// Status select change. Re-selecting the current status emits nothing.
    pub fn update_status(&self, status: OrderStatus) {
        if status == self.order.row.status {
            return;
        }
        debug!(order = %self.order.row.id, %status, "emit update_status");
        if let Some(handler) = &self.on_update_status {
            handler((self.order.row.id.clone(), status));
        }
    }

    /// Note form submit. Blank notes are ignored.
    pub fn add_note(&self, note: &str) {
        let note = note.trim();
        if note.is_empty() {
            return;
        }
        debug!(order = %self.order.row.id, "emit add_note");
        if let Some(handler) = &self.on_add_note {
            handler((self.order.row.id.clone(), note.to_string()));
        }
    }

    #[must_use]
    pub fn template(&self) -> OrderDetailTemplate {
        let order = self.order;
        let row = &order.row;
        let status = order_status_badge(row.status);
        let payment = payment_status_badge(order.payment.status);

        let items = order
            .items
            .iter()
            .map(|item| OrderItemView {
                title: item.title.clone(),
                variant_title: item.variant_title.clone().unwrap_or_default(),
                quantity: item.quantity,
                unit_price: item.unit_price.display(),
                line_total: item.line_total().display(),
            })
            .collect();

        let timeline = order
            .timeline_newest_first()
            .into_iter()
            .map(|event| {
                let badge = order_status_badge(event.status);
                TimelineEntryView {
                    label: badge.label,
                    class: badge.class,
                    note: event.note.clone().unwrap_or_default(),
                    at: event.at.format(DATE_TIME_FORMAT).to_string(),
                }
            })
            .collect();

        let status_options = OrderStatus::ALL
            .iter()
            .map(|s| SelectOption {
                value: s.as_str().to_string(),
                label: s.label().to_string(),
                selected: *s == row.status,
            })
            .collect();

        OrderDetailTemplate {
            id: row.id.to_string(),
            number: row.number.clone(),
            placed_at: row.placed_at.format(DATE_TIME_FORMAT).to_string(),
            customer_name: row.customer_name.clone(),
            customer_email: row.customer_email.clone().unwrap_or_default(),
            status_label: status.label,
            status_class: status.class,
            status_options,
            items,
            subtotal: order.subtotal.display(),
            discount: order.discount.display(),
            has_discount: order.discount.amount > 0,
            shipping: if order.shipping.amount == 0 {
                "Free".to_string()
            } else {
                order.shipping.display()
            },
            total: row.total.display(),
            payment_method: order.payment.method.label(),
            payment_label: payment.label,
            payment_class: payment.class,
            transaction_id: order.payment.transaction_id.clone().unwrap_or_default(),
            address_lines: order
                .shipping_address
                .as_ref()
                .map(storeview_core::order::Address::lines)
                .unwrap_or_default(),
            timeline,
            note: order.note.clone().unwrap_or_default(),
        }
    }

    /// Render the order detail to HTML.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Render` if the template fails to render.
    #[instrument(skip(self), fields(order = %self.order.row.id))]
    pub fn render(&self) -> Result<String, AdminError> {
        Ok(self.template().render()?)
    }
}
