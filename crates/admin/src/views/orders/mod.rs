//! Order views: the admin orders table and the order detail page.

mod detail;
mod list;

pub use detail::{OrderDetailTemplate, OrderDetailView, OrderItemView, TimelineEntryView};
pub use list::{OrderRowView, OrdersTable, OrdersTableTemplate};
