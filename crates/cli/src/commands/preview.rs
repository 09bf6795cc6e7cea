//! Render components against demo data.
//!
//! The demo catalog is seeded into memory and a set of orders is generated
//! from it, then the requested component is rendered to a file.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use storeview_admin::catalog::{InMemoryCatalog, seed_catalog};
use storeview_admin::config::AdminConfig;
use storeview_admin::controller::{OrderListController, ProductListController, QueryOptions};
use storeview_admin::views::{OrdersTable, ProductsList};
use storeview_core::cart::{CartItem, Coupon, CouponKind};
use storeview_core::catalog::ProductDetail;
use storeview_core::order::OrderRow;
use storeview_core::{OrderId, OrderStatus, PaymentStatus};
use storeview_storefront::components::{CartView, ProductDetailView};
use storeview_storefront::config::StorefrontConfig;
use tracing::info;

const DEMO_ORDER_COUNT: u32 = 45;

const CUSTOMERS: &[(&str, &str)] = &[
    ("Asha Rao", "asha@example.com"),
    ("Vikram Shah", "vikram@example.com"),
    ("Meera Iyer", "meera@example.com"),
    ("Rohan Das", "rohan@example.com"),
    ("Priya Nair", "priya@example.com"),
];

async fn demo_catalog() -> Result<Vec<ProductDetail>, Box<dyn std::error::Error>> {
    let data = super::seed::load(None)?;
    let catalog = InMemoryCatalog::new();
    seed_catalog(&catalog, &data).await?;
    Ok(catalog.product_details().await)
}

/// Deterministic orders spread over the last few weeks.
fn demo_orders(products: &[ProductDetail], now: DateTime<Utc>) -> Vec<OrderRow> {
    let statuses = OrderStatus::ALL;
    let payments = [
        PaymentStatus::Paid,
        PaymentStatus::Paid,
        PaymentStatus::Pending,
        PaymentStatus::Refunded,
    ];
    (0..DEMO_ORDER_COUNT)
        .filter_map(|n| {
            let i = usize::try_from(n).ok()?;
            let product = products.get(i % products.len().max(1))?;
            let (name, email) = CUSTOMERS.get(i % CUSTOMERS.len())?;
            let quantity = n % 3 + 1;
            Some(OrderRow {
                id: OrderId::new(format!("order_demo_{n}")),
                number: format!("#{}", 1001 + n),
                customer_name: (*name).to_string(),
                customer_email: Some((*email).to_string()),
                status: *statuses.get(i % statuses.len())?,
                payment_status: *payments.get(i % payments.len())?,
                item_count: quantity,
                total: product.product.price.times(quantity),
                placed_at: now - Duration::hours(i64::from(n) * 11),
            })
        })
        .collect()
}

async fn write(out: &Path, html: &str) -> Result<(), Box<dyn std::error::Error>> {
    tokio::fs::write(out, html).await?;
    info!(path = %out.display(), bytes = html.len(), "Preview written");
    Ok(())
}

/// Render the admin orders table.
///
/// # Errors
///
/// Returns an error if configuration, rendering or writing fails.
pub async fn orders(out: &Path, page: u32) -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let products = demo_catalog().await?;
    let mut controller = OrderListController::new(demo_orders(&products, Utc::now()), config.per_page);
    controller.set_page(page);

    let items = controller.visible();
    let html = OrdersTable::new(&items, controller.filters(), controller.pagination()).render()?;
    write(out, &html).await
}

/// Render the admin products list.
///
/// # Errors
///
/// Returns an error if configuration, rendering or writing fails.
pub async fn products(out: &Path, page: u32) -> Result<(), Box<dyn std::error::Error>> {
    let config = AdminConfig::from_env()?;
    let products = demo_catalog().await?.into_iter().map(|p| p.product).collect();
    let mut controller = ProductListController::new(products, config.per_page).with_options(QueryOptions {
        low_stock_threshold: config.low_stock_threshold,
    });
    controller.set_page(page);

    let items = controller.visible();
    let html = ProductsList::new(&items, controller.filters(), controller.pagination())
        .low_stock_threshold(config.low_stock_threshold)
        .render()?;
    write(out, &html).await
}

/// Render the storefront page for the first demo product.
///
/// # Errors
///
/// Returns an error if the catalog is empty or rendering or writing fails.
pub async fn product(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let products = demo_catalog().await?;
    let detail = products.first().ok_or("demo catalog has no products")?;
    let html = ProductDetailView::new(detail).render()?;
    write(out, &html).await
}

/// Render a storefront cart holding two demo variants and a coupon.
///
/// # Errors
///
/// Returns an error if configuration, rendering or writing fails.
pub async fn cart(out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let products = demo_catalog().await?;
    let items: Vec<CartItem> = products
        .iter()
        .filter_map(|p| {
            let variant = p.variants.iter().find(|v| v.stock > 0)?;
            Some(CartItem {
                variant_id: variant.id.clone(),
                title: p.product.title.clone(),
                variant_title: Some(variant.title()).filter(|t| !t.is_empty()),
                thumbnail: p.product.thumbnail.clone(),
                price: variant.price,
                mrp: variant.mrp,
                quantity: 1,
            })
        })
        .take(2)
        .collect();
    let coupon = Coupon {
        code: "WELCOME10".to_string(),
        description: Some("10% off your first order".to_string()),
        kind: CouponKind::Percentage {
            percent: 10,
            max_discount: Some(20_000),
        },
        min_order_value: 50_000,
        is_applicable: true,
    };
    let html = CartView::new(&items, Some(&coupon), config.shipping)
        .currency(config.currency)
        .render()?;
    write(out, &html).await
}
