//! Storeview Storefront library.
//!
//! Shopper-facing components. Each takes its data plus optional callbacks,
//! renders HTML with Askama, and reports what the shopper did.
//!
//! # Modules
//!
//! - [`components`] - Product detail, cart and account dashboard
//! - [`config`] - Currency and shipping settings from the environment

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod components;
pub mod config;
pub mod error;

pub use error::StorefrontError;
