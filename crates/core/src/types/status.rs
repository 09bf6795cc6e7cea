//! Status enums for orders, payments and stock.
//!
//! These are closed enums. No transition rules live here: components only
//! display a status and request changes through callbacks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a known enum value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    /// Create a parse error for a value of the given kind.
    #[must_use]
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Implements `as_str`, `label`, `ALL`, `Display` and `FromStr` for a
/// unit-only enum from `(Variant, "key", "Label")` triples.
macro_rules! keyed_enum {
    ($name:ident, $kind:literal, [$(($variant:ident, $key:literal, $label:literal)),+ $(,)?]) => {
        impl $name {
            /// Every value, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable snake_case key (matches the serde representation).
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            /// Human-readable label.
            #[must_use]
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(Self::$variant),)+
                    _ => Err(ParseEnumError::new($kind, s)),
                }
            }
        }
    };
}

pub(crate) use keyed_enum;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
    Refunded,
}

keyed_enum!(OrderStatus, "order status", [
    (Pending, "pending", "Pending"),
    (Confirmed, "confirmed", "Confirmed"),
    (Processing, "processing", "Processing"),
    (Shipped, "shipped", "Shipped"),
    (Delivered, "delivered", "Delivered"),
    (Cancelled, "cancelled", "Cancelled"),
    (Returned, "returned", "Returned"),
    (Refunded, "refunded", "Refunded"),
]);

/// Payment status reported by the payment processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Authorized,
    Paid,
    Failed,
    Refunded,
}

keyed_enum!(PaymentStatus, "payment status", [
    (Pending, "pending", "Pending"),
    (Authorized, "authorized", "Authorized"),
    (Paid, "paid", "Paid"),
    (Failed, "failed", "Failed"),
    (Refunded, "refunded", "Refunded"),
]);

/// Stock availability derived from a unit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

keyed_enum!(StockStatus, "stock status", [
    (InStock, "in_stock", "In stock"),
    (LowStock, "low_stock", "Low stock"),
    (OutOfStock, "out_of_stock", "Out of stock"),
]);

impl StockStatus {
    /// Default threshold at or below which stock counts as low.
    pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

    /// Classify a stock count. Zero is out of stock; `1..=low_threshold` is low.
    #[must_use]
    pub const fn from_stock(stock: u32, low_threshold: u32) -> Self {
        if stock == 0 {
            Self::OutOfStock
        } else if stock <= low_threshold {
            Self::LowStock
        } else {
            Self::InStock
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_round_trips_through_str() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn test_serde_matches_as_str() {
        let json = serde_json::to_string(&PaymentStatus::Authorized).unwrap();
        assert_eq!(json, format!("\"{}\"", PaymentStatus::Authorized.as_str()));
    }

    #[test]
    fn test_invalid_status() {
        let err = "lost".parse::<OrderStatus>().unwrap_err();
        assert_eq!(err.to_string(), "invalid order status: lost");
    }

    #[test]
    fn test_stock_status_thresholds() {
        assert_eq!(StockStatus::from_stock(0, 5), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_stock(1, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_stock(5, 5), StockStatus::LowStock);
        assert_eq!(StockStatus::from_stock(6, 5), StockStatus::InStock);
    }
}
