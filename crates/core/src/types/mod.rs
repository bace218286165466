//! Core types for the herbal store.
//!
//! This module provides type-safe wrappers for catalog domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod rating;

pub use category::{Category, CategoryError};
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{Price, PriceError, format_amount};
pub use product::Product;
pub use rating::{Rating, RatingError};
