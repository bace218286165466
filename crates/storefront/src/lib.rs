//! Herbal Store Storefront library.
//!
//! The state and transform layer behind the single-page storefront:
//!
//! - [`catalog`] - Loads the session catalog, falling back to built-in data
//! - [`filter`] - Search, category, price filters and sorting
//! - [`cart`] - Cart lines persisted to a local key-value store
//! - [`quiz`] - Three-question quiz and product recommendation
//! - [`checkout`] - Checkout form validation and simulated order placement
//! - [`detail`] - Product detail quantity picker
//! - [`state`] - Explicit container tying the stores together
//!
//! Rendering is left to the caller. Every entry point is a plain method or
//! function, and callers read state back after a mutation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod quiz;
pub mod state;
