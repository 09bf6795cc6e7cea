//! Customer account dashboard.

use askama::Template;
use chrono::{DateTime, Utc};
use storeview_core::OrderId;
use storeview_core::display::relative_time;
use storeview_core::order::OrderRow;
use storeview_core::view::order_status_badge;
use tracing::{debug, instrument};

use super::Handler;
use crate::error::StorefrontError;

/// Orders shown before "View all".
const RECENT_ORDERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentOrderView {
    pub id: String,
    pub number: String,
    pub placed: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub item_count: u32,
    pub total: String,
}

#[derive(Debug, Template)]
#[template(path = "account/dashboard.html")]
pub struct AccountDashboardTemplate {
    pub customer_name: String,
    pub orders: Vec<RecentOrderView>,
    pub has_more: bool,
}

/// Greeting plus the customer's most recent orders.
pub struct AccountDashboard<'a> {
    customer_name: &'a str,
    orders: &'a [OrderRow],
    now: DateTime<Utc>,
    on_view_order: Option<Handler<'a, OrderId>>,
}

impl std::fmt::Debug for AccountDashboard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountDashboard")
            .field("customer_name", &self.customer_name)
            .field("orders", &self.orders.len())
            .finish_non_exhaustive()
    }
}

impl<'a> AccountDashboard<'a> {
    /// `now` anchors the relative timestamps.
    #[must_use]
    pub const fn new(customer_name: &'a str, orders: &'a [OrderRow], now: DateTime<Utc>) -> Self {
        Self {
            customer_name,
            orders,
            now,
            on_view_order: None,
        }
    }

    #[must_use]
    pub fn on_view_order(mut self, handler: impl Fn(OrderId) + 'a) -> Self {
        self.on_view_order = Some(Box::new(handler));
        self
    }

    pub fn view_order(&self, id: &OrderId) {
        debug!(order = %id, "emit view_order");
        if let Some(handler) = &self.on_view_order {
            handler(id.clone());
        }
    }

    #[must_use]
    pub fn template(&self) -> AccountDashboardTemplate {
        let mut recent: Vec<&OrderRow> = self.orders.iter().collect();
        recent.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        let orders = recent
            .into_iter()
            .take(RECENT_ORDERS)
            .map(|o| {
                let badge = order_status_badge(o.status);
                RecentOrderView {
                    id: o.id.to_string(),
                    number: o.number.clone(),
                    placed: relative_time(o.placed_at, self.now),
                    status_label: badge.label,
                    status_class: badge.class,
                    item_count: o.item_count,
                    total: o.total.display(),
                }
            })
            .collect();

        let name = self.customer_name.trim();
        AccountDashboardTemplate {
            customer_name: if name.is_empty() { "there".to_string() } else { name.to_string() },
            orders,
            has_more: self.orders.len() > RECENT_ORDERS,
        }
    }

    /// Render the dashboard to HTML.
    ///
    /// # Errors
    ///
    /// Returns `StorefrontError::Render` if the template fails to render.
    #[instrument(skip(self), fields(orders = self.orders.len()))]
    pub fn render(&self) -> Result<String, StorefrontError> {
        Ok(self.template().render()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use chrono::{Duration, TimeZone};
    use storeview_core::{CurrencyCode, Money, OrderStatus, PaymentStatus};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn order(n: i64, hours_ago: i64) -> OrderRow {
        OrderRow {
            id: OrderId::new(format!("order_{n}")),
            number: format!("#{}", 1000 + n),
            customer_name: "Asha Rao".to_string(),
            customer_email: None,
            status: OrderStatus::Delivered,
            payment_status: PaymentStatus::Paid,
            item_count: 1,
            total: Money::new(99_900, CurrencyCode::INR),
            placed_at: now() - Duration::hours(hours_ago),
        }
    }

    #[test]
    fn test_recent_orders_newest_first_and_capped() {
        let orders: Vec<OrderRow> = (1..=7).map(|n| order(n, n * 30)).collect();
        let template = AccountDashboard::new("Asha", &orders, now()).template();
        assert_eq!(template.orders.len(), 5);
        assert!(template.has_more);
        assert_eq!(template.orders.first().unwrap().number, "#1001");
        assert_eq!(template.orders.first().unwrap().placed, "1 day ago");
    }

    #[test]
    fn test_view_order_emits_id() {
        let orders = vec![order(1, 2)];
        let viewed = RefCell::new(None);
        let dashboard = AccountDashboard::new("Asha", &orders, now())
            .on_view_order(|id| *viewed.borrow_mut() = Some(id));
        dashboard.view_order(&OrderId::new("order_1"));
        drop(dashboard);
        assert_eq!(viewed.into_inner(), Some(OrderId::new("order_1")));
    }

    #[test]
    fn test_render_empty_orders() {
        let html = AccountDashboard::new("", &[], now()).render().unwrap();
        assert!(html.contains("Hi there"));
        assert!(html.contains("No orders yet"));
    }

    #[test]
    fn test_render_orders() {
        let orders = vec![order(1, 3)];
        let html = AccountDashboard::new("Asha", &orders, now()).render().unwrap();
        assert!(html.contains("Hi Asha"));
        assert!(html.contains("3 hours ago"));
        assert!(html.contains(r#"<span class="badge badge-success">Delivered</span>"#));
    }
}
