//! Order display records.
//!
//! Status is a closed enum and there is no transition logic here:
//! transitions are requested via callbacks and applied by the order service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Money, OrderId, OrderStatus, PaymentStatus, ProductId, VariantId};

/// An order as listed in the admin table and the customer dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    pub id: OrderId,
    /// Human-facing order number, e.g. `#1001`.
    pub number: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub item_count: u32,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

/// A single order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub variant_id: Option<VariantId>,
    pub title: String,
    pub variant_title: Option<String>,
    pub quantity: u32,
    pub unit_price: Money,
}

impl OrderItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Payment method used for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Upi,
    NetBanking,
    Wallet,
    CashOnDelivery,
}

impl PaymentMethod {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Card => "Card",
            Self::Upi => "UPI",
            Self::NetBanking => "Net banking",
            Self::Wallet => "Wallet",
            Self::CashOnDelivery => "Cash on delivery",
        }
    }
}

/// Payment details as reported by the payment processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub method: PaymentMethod,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: String,
    pub country_code: String,
    pub phone: Option<String>,
}

impl Address {
    /// Non-empty lines for display.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone(), self.line1.clone()];
        if let Some(line2) = self.line2.as_ref().filter(|l| !l.is_empty()) {
            lines.push(line2.clone());
        }
        let region = match &self.state {
            Some(state) if !state.is_empty() => format!("{}, {state} {}", self.city, self.postal_code),
            _ => format!("{} {}", self.city, self.postal_code),
        };
        lines.push(region);
        lines.push(self.country_code.clone());
        lines.retain(|l| !l.trim().is_empty());
        lines
    }
}

/// One entry in an order's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub status: OrderStatus,
    pub note: Option<String>,
    pub at: DateTime<Utc>,
}

/// Full order record for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub row: OrderRow,
    pub items: Vec<OrderItem>,
    pub payment: PaymentInfo,
    pub shipping_address: Option<Address>,
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    pub subtotal: Money,
    pub discount: Money,
    pub shipping: Money,
    pub note: Option<String>,
}

impl OrderDetail {
    /// Timeline sorted newest first.
    #[must_use]
    pub fn timeline_newest_first(&self) -> Vec<&TimelineEvent> {
        let mut events: Vec<&TimelineEvent> = self.timeline.iter().collect();
        events.sort_by(|a, b| b.at.cmp(&a.at));
        events
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    #[test]
    fn test_line_total() {
        let item = OrderItem {
            product_id: ProductId::new("prod_1"),
            variant_id: None,
            title: "Tee".to_string(),
            variant_title: None,
            quantity: 3,
            unit_price: Money::new(49_900, CurrencyCode::INR),
        };
        assert_eq!(item.line_total().minor_units(), 149_700);
    }

    #[test]
    fn test_address_lines_skip_empty() {
        let address = Address {
            name: "Asha Rao".to_string(),
            line1: "12 MG Road".to_string(),
            line2: Some(String::new()),
            city: "Bengaluru".to_string(),
            state: Some("KA".to_string()),
            postal_code: "560001".to_string(),
            country_code: "IN".to_string(),
            phone: None,
        };
        assert_eq!(
            address.lines(),
            vec!["Asha Rao", "12 MG Road", "Bengaluru, KA 560001", "IN"]
        );
    }
}
