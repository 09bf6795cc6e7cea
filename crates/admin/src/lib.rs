//! Storeview Admin library.
//!
//! Back-office components rendered with Askama. Each component takes a data
//! payload plus a bundle of optional callbacks, renders HTML, and turns user
//! interactions into intents handed back to whoever owns the state.
//!
//! # Modules
//!
//! - [`components`] - Shared table config, callbacks, badges and pagination
//! - [`views`] - Orders table, order detail and products list
//! - [`controller`] - Parent-side list state that applies emitted intents
//! - [`catalog`] - Catalog service seam and the demo catalog seeder
//! - [`config`] - Admin UI settings loaded from the environment

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod views;

pub use error::AdminError;
