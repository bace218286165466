//! Herbal Store Core - Shared domain types.
//!
//! This crate provides the types used across the herbal store components:
//! - `storefront` - Catalog, filtering, cart, quiz and checkout state logic
//! - `cli` - Terminal front-end that renders storefront state
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no HTTP
//! clients, no persistence. This keeps it lightweight and usable anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product IDs, prices, ratings, categories, products and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
