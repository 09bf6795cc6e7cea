//! Storeview Core - display records and view-state rules.
//!
//! This crate provides the types shared by every storeview component crate:
//! - `storefront` - Customer-facing product, cart and account components
//! - `admin` - Back-office order and product list components
//! - `cli` - Seeding and preview tooling
//!
//! # Architecture
//!
//! The core crate contains only data shapes and pure functions - no I/O, no
//! rendering, no service access. Everything here is recomputed from inputs on
//! every render, so it is trivially unit testable.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, money, and status enums
//! - [`catalog`] - Product, variant and attribute records
//! - [`order`] - Order rows and order detail records
//! - [`cart`] - Cart items, coupons and the derived order summary
//! - [`view`] - Filter, sort, pagination and variant-selection state
//! - [`display`] - Derived display values (discount percent, relative time)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod display;
pub mod order;
pub mod types;
pub mod view;

pub use types::*;
