//! Orders table wired to its list controller.
//!
//! The table only emits intents; the controller applies them and the next
//! render reflects the new state.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;

use storeview_admin::controller::OrderListController;
use storeview_admin::views::OrdersTable;
use storeview_core::view::{DatePreset, OrderFilterPatch, OrderSortField, SortDirection, SortState};
use storeview_core::OrderStatus;
use storeview_integration_tests::{fixed_now, sample_orders};

fn render(controller: &RefCell<OrderListController>) -> String {
    let snapshot = controller.borrow().clone();
    let items = snapshot.visible();
    OrdersTable::new(&items, snapshot.filters(), snapshot.pagination())
        .render()
        .unwrap()
}

#[test]
fn test_page_clicks_flow_back_into_render() {
    let controller = RefCell::new(OrderListController::new(sample_orders(45), 10));
    let snapshot = controller.borrow().clone();
    let items = snapshot.visible();
    let table = OrdersTable::new(&items, snapshot.filters(), snapshot.pagination())
        .with_callbacks(OrderListController::callbacks(&controller));

    table.click_next();
    table.click_next();
    assert_eq!(controller.borrow().page(), 2);

    table.click_page(5);
    assert_eq!(controller.borrow().page(), 5);
    drop(table);

    let html = render(&controller);
    assert!(html.contains("Showing 41–45 of 45"));
    assert!(html.contains(r#"class="pagination-next" disabled"#));
}

#[test]
fn test_sort_toggle_round_trip() {
    let controller = RefCell::new(OrderListController::new(sample_orders(12), 20));
    for _ in 0..2 {
        let snapshot = controller.borrow().clone();
        let items = snapshot.visible();
        OrdersTable::new(&items, snapshot.filters(), snapshot.pagination())
            .with_callbacks(OrderListController::callbacks(&controller))
            .click_sort(OrderSortField::Total);
    }
    assert_eq!(
        controller.borrow().filters().sort,
        SortState::by(OrderSortField::Total, SortDirection::Desc)
    );
    let html = render(&controller);
    assert!(html.contains(r#"data-sort="total" aria-sort="descending""#));
    let first = html.find("₹1,200.00").unwrap();
    let last = html.find("₹100.00").unwrap();
    assert!(first < last);
}

#[test]
fn test_filters_reset_page_and_show_empty_state() {
    let controller = RefCell::new(OrderListController::new(sample_orders(45), 10));
    controller.borrow_mut().set_page(3);

    let snapshot = controller.borrow().clone();
    let items = snapshot.visible();
    let table = OrdersTable::new(&items, snapshot.filters(), snapshot.pagination())
        .with_callbacks(OrderListController::callbacks(&controller));
    table.search("vikram");
    assert_eq!(controller.borrow().page(), 1);
    table.select_status(Some(OrderStatus::Refunded));
    table.select_date_preset(DatePreset::Today, fixed_now().date_naive());
    drop(table);

    let html = render(&controller);
    assert!(html.contains("No orders found"));
    assert!(html.contains("Clear filters (3)"));
    assert!(!html.contains("pagination-prev"));
}

#[test]
fn test_seven_day_preset_counts_inclusive_bounds() {
    let mut controller = OrderListController::new(sample_orders(45), 100);
    controller.apply_filter_patch(OrderFilterPatch::date_preset(
        DatePreset::Last7Days,
        fixed_now().date_naive(),
    ));
    // two orders a day, 8 June through 15 June
    assert_eq!(controller.pagination().total_items, 16);
}

#[test]
fn test_view_state_serializes_for_the_client() {
    let mut controller = OrderListController::new(sample_orders(45), 20);
    controller.set_page(2);
    controller.apply_filter_patch(OrderFilterPatch::sort(SortState::by(
        OrderSortField::Customer,
        SortDirection::Asc,
    )));

    let pagination = serde_json::to_value(controller.pagination()).unwrap();
    assert_eq!(
        pagination,
        serde_json::json!({ "page": 2, "perPage": 20, "totalItems": 45, "totalPages": 3 })
    );

    let filters = serde_json::to_value(controller.filters()).unwrap();
    assert_eq!(filters["sort"]["field"], "customer");
    assert_eq!(filters["sort"]["direction"], "asc");
    assert_eq!(filters["status"], serde_json::Value::Null);
}
