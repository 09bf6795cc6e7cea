//! Integration tests for storeview.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storeview-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `admin_orders` - Orders table driven by its list controller
//! - `catalog_seed` - Demo catalog seeding and the products list
//! - `storefront` - Product detail and cart over seeded data
//!
//! Shared fixtures live here.

use chrono::{DateTime, Duration, TimeZone, Utc};
use storeview_admin::catalog::{InMemoryCatalog, SeedData, seed_catalog};
use storeview_core::catalog::ProductDetail;
use storeview_core::order::OrderRow;
use storeview_core::{CurrencyCode, Money, OrderId, OrderStatus, PaymentStatus};

/// Fixed clock for date-dependent assertions.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// `count` orders, one every 12 hours going back from [`fixed_now`].
///
/// Statuses cycle through every order status; totals grow by ₹100 per order.
#[must_use]
pub fn sample_orders(count: u32) -> Vec<OrderRow> {
    let customers = ["Asha Rao", "Vikram Shah", "Meera Iyer"];
    (0..count)
        .zip(customers.iter().cycle())
        .zip(OrderStatus::ALL.iter().cycle())
        .map(|((n, customer), status)| OrderRow {
            id: OrderId::new(format!("order_{n}")),
            number: format!("#{}", 1001 + n),
            customer_name: (*customer).to_string(),
            customer_email: Some(format!("customer{n}@example.com")),
            status: *status,
            payment_status: if n % 4 == 3 {
                PaymentStatus::Pending
            } else {
                PaymentStatus::Paid
            },
            item_count: n % 3 + 1,
            total: Money::new(i64::from(n + 1) * 10_000, CurrencyCode::INR),
            placed_at: fixed_now() - Duration::hours(i64::from(n) * 12),
        })
        .collect()
}

/// The bundled demo catalog seeded into a fresh in-memory catalog.
///
/// # Panics
///
/// Panics if the bundled fixture fails to parse or seed.
#[allow(clippy::unwrap_used)]
pub async fn seeded_demo_catalog() -> (InMemoryCatalog, Vec<ProductDetail>) {
    let catalog = InMemoryCatalog::new();
    seed_catalog(&catalog, &SeedData::demo().unwrap()).await.unwrap();
    let products = catalog.product_details().await;
    (catalog, products)
}
