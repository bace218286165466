//! Product detail view state.

use std::num::NonZeroU32;

use herbal_store_core::{Product, ProductId};

use crate::catalog::Catalog;

/// Quantity chosen in the product detail view before adding to the cart.
///
/// Starts at 1 and never drops below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityPicker(NonZeroU32);

impl Default for QuantityPicker {
    fn default() -> Self {
        Self(NonZeroU32::MIN)
    }
}

impl QuantityPicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increase(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// No-op at 1.
    pub fn decrease(&mut self) {
        if let Some(lower) = NonZeroU32::new(self.0.get() - 1) {
            self.0 = lower;
        }
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0.get()
    }
}

/// An open product detail view: the product plus its quantity picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail<'a> {
    pub product: &'a Product,
    pub quantity: QuantityPicker,
}

impl<'a> ProductDetail<'a> {
    /// Open the detail view for `id`, with the quantity reset to 1.
    ///
    /// Returns `None` for an id the catalog doesn't have.
    #[must_use]
    pub fn open(catalog: &'a Catalog, id: ProductId) -> Option<Self> {
        catalog.get(id).map(|product| Self {
            product,
            quantity: QuantityPicker::new(),
        })
    }
}
