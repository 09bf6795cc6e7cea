//! Demo catalog seeding and the products list over the result.

#![allow(clippy::unwrap_used)]

use storeview_admin::catalog::{SeedData, SeedError, seed_catalog, InMemoryCatalog};
use storeview_admin::controller::{ProductListController, QueryOptions};
use storeview_admin::views::ProductsList;
use storeview_core::view::{ProductFilterPatch, ProductSortField, SortDirection, SortState};
use storeview_core::StockStatus;
use storeview_integration_tests::seeded_demo_catalog;

#[tokio::test]
async fn test_demo_catalog_seeds_every_record() {
    let data = SeedData::demo().unwrap();
    let (catalog, products) = seeded_demo_catalog().await;
    assert_eq!(products.len(), data.products.len());
    assert_eq!(catalog.regions().await.len(), data.regions.len());
    assert_eq!(catalog.categories().await.len(), data.categories.len());

    let variants: usize = products.iter().map(|p| p.variants.len()).sum();
    assert_eq!(variants, data.variant_count());
    for product in &products {
        let stock: u32 = product.variants.iter().map(|v| v.stock).sum();
        assert_eq!(product.product.stock, stock, "{}", product.product.handle);
    }
}

#[tokio::test]
async fn test_child_categories_point_at_parents() {
    let (catalog, _) = seeded_demo_catalog().await;
    let categories = catalog.categories().await;
    let apparel = categories.iter().find(|c| c.handle == "apparel").unwrap();
    let tees = categories.iter().find(|c| c.handle == "tees").unwrap();
    assert_eq!(tees.parent.as_ref(), Some(&apparel.id));
}

#[tokio::test]
async fn test_abort_leaves_partial_catalog() {
    let data = SeedData::demo().unwrap();
    let before_products = data.regions.len() + data.categories.len();
    // everything up to and including the first product succeeds
    let catalog = InMemoryCatalog::new().fail_after(before_products + 1);
    let err = seed_catalog(&catalog, &data).await.unwrap_err();
    assert!(matches!(err, SeedError::Step { .. }));
    assert_eq!(catalog.products().await.len(), 1);
    assert_eq!(catalog.categories().await.len(), data.categories.len());
}

#[tokio::test]
async fn test_products_list_over_seeded_catalog() {
    let (catalog, _) = seeded_demo_catalog().await;
    let mut controller = ProductListController::new(catalog.products().await, 20)
        .with_options(QueryOptions { low_stock_threshold: 5 });

    controller.apply_filter_patch(ProductFilterPatch::stock_status(Some(StockStatus::OutOfStock)));
    let visible = controller.visible();
    let handles: Vec<&str> = visible.iter().map(|p| p.handle.as_str()).collect();
    assert_eq!(handles, vec!["logo-cap"]);

    controller.apply_filter_patch(ProductFilterPatch::clear());
    controller.set_sort(SortState::by(ProductSortField::Price, SortDirection::Desc));
    let visible = controller.visible();
    assert_eq!(visible.first().unwrap().handle, "fleece-hoodie");

    let html = ProductsList::new(&visible, controller.filters(), controller.pagination())
        .render()
        .unwrap();
    assert!(html.contains("Fleece Hoodie"));
    assert!(html.contains("17% off"));
    assert!(html.contains(r#"data-sort="price" aria-sort="descending""#));
}
