//! Storefront components.

pub mod account;
pub mod cart;
pub mod product_detail;

pub use account::{AccountDashboard, AccountDashboardTemplate};
pub use cart::{CartTemplate, CartView};
pub use product_detail::{ProductDetailTemplate, ProductDetailView};

pub use storeview_core::view::Handler;
