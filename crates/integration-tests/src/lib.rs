//! Integration tests for the herbal store.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p herbal-store-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_properties` - Filter, cart and recommendation behavior
//!   against the seeded catalog
//! - `cart_persistence` - Cart snapshots written to disk and restored in a
//!   later session
//! - `catalog_loading` - Catalog sources, fallback and session start-up
//!
//! No network access is needed; remote catalog sources are only exercised
//! through their failure path.
