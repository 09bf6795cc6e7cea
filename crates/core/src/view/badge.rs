//! Status badges with semantic classes.
//!
//! Shared by the admin tables and the storefront. Unknown keys fall back to
//! a neutral style instead of failing.

use crate::types::{OrderStatus, PaymentStatus, StockStatus};

/// Badge label and CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

const SUCCESS: &str = "badge badge-success";
const INFO: &str = "badge badge-info";
const WARNING: &str = "badge badge-warning";
const DESTRUCTIVE: &str = "badge badge-destructive";
const NEUTRAL: &str = "badge badge-neutral";

/// Style used for any key missing from [`STATUS_STYLES`].
pub const DEFAULT_BADGE: Badge = Badge {
    label: "Unknown",
    class: NEUTRAL,
};

/// Class per status key, shared by order, payment and stock statuses.
const STATUS_STYLES: &[(&str, &str)] = &[
    ("pending", WARNING),
    ("confirmed", INFO),
    ("processing", INFO),
    ("shipped", INFO),
    ("delivered", SUCCESS),
    ("cancelled", DESTRUCTIVE),
    ("returned", "badge badge-return"),
    ("refunded", NEUTRAL),
    ("authorized", INFO),
    ("paid", SUCCESS),
    ("failed", DESTRUCTIVE),
    ("in_stock", SUCCESS),
    ("low_stock", WARNING),
    ("out_of_stock", DESTRUCTIVE),
];

fn class_for(key: &str) -> &'static str {
    STATUS_STYLES
        .iter()
        .find_map(|(k, class)| (*k == key).then_some(*class))
        .unwrap_or(DEFAULT_BADGE.class)
}

/// Badge for a raw status key, e.g. from a query string.
#[must_use]
pub fn badge_for_key(key: &str) -> Badge {
    key.parse::<OrderStatus>()
        .map(order_status_badge)
        .or_else(|_| key.parse::<PaymentStatus>().map(payment_status_badge))
        .or_else(|_| key.parse::<StockStatus>().map(stock_badge))
        .unwrap_or(DEFAULT_BADGE)
}

#[must_use]
pub fn order_status_badge(status: OrderStatus) -> Badge {
    Badge {
        label: status.label(),
        class: class_for(status.as_str()),
    }
}

#[must_use]
pub fn payment_status_badge(status: PaymentStatus) -> Badge {
    Badge {
        label: status.label(),
        class: class_for(status.as_str()),
    }
}

#[must_use]
pub fn stock_badge(status: StockStatus) -> Badge {
    Badge {
        label: status.label(),
        class: class_for(status.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_status_has_a_style() {
        for status in OrderStatus::ALL {
            assert_ne!(order_status_badge(*status).class, "", "{status}");
        }
        assert_eq!(order_status_badge(OrderStatus::Delivered).class, SUCCESS);
        assert_eq!(payment_status_badge(PaymentStatus::Failed).class, DESTRUCTIVE);
        assert_eq!(stock_badge(StockStatus::LowStock).class, WARNING);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(badge_for_key("on_the_moon"), DEFAULT_BADGE);
        assert_eq!(badge_for_key(""), DEFAULT_BADGE);
    }

    #[test]
    fn test_known_key() {
        assert_eq!(badge_for_key("paid").label, "Paid");
        assert_eq!(badge_for_key("shipped").class, INFO);
    }
}
