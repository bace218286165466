//! Subcommand implementations.
//!
//! Each command drives the storefront state, then prints the resulting view.

pub mod cart;
pub mod checkout;
pub mod products;
pub mod quiz;
