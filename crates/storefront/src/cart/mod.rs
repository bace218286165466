//! Shopping cart.
//!
//! The cart is an ordered list of [`CartLine`]s, at most one per product id.
//! Lines hold a snapshot of the product taken when it was first added, so the
//! cart survives catalog changes between sessions.
//!
//! # Persistence
//!
//! Every mutation writes the full line list, as a JSON array, to the
//! configured [`KeyValueStore`] under [`CART_STORAGE_KEY`]. [`Cart::load`]
//! restores that snapshot and falls back to an empty cart when it is absent
//! or unreadable. Write failures are logged; they never fail a mutation.

mod storage;

use std::num::NonZeroU32;

use herbal_store_core::{Price, Product, ProductId};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::catalog::Catalog;

pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Key the cart snapshot is stored under.
pub const CART_STORAGE_KEY: &str = "herbalCart";

/// One product in the cart with its quantity.
///
/// Serialized as the product's fields plus `quantity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    quantity: NonZeroU32,
}

impl CartLine {
    fn new(product: Product, quantity: NonZeroU32) -> Self {
        Self { product, quantity }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// Always at least 1.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.product.price
    }

    /// Unit price times quantity, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * self.quantity.get()
    }
}

/// The session cart, written through to a [`KeyValueStore`].
#[derive(Debug)]
pub struct Cart<S> {
    lines: Vec<CartLine>,
    store: S,
}

impl<S: KeyValueStore> Cart<S> {
    /// Restore the cart from `store`, or start empty.
    #[instrument(skip(store))]
    pub fn load(store: S) -> Self {
        let lines = match store.get(CART_STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<CartLine>>(&json) {
                Ok(lines) => merge_duplicates(lines),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored cart is malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Stored cart is unreadable, starting empty");
                Vec::new()
            }
        };
        debug!(lines = lines.len(), "Cart restored");

        Self { lines, store }
    }

    /// Add `quantity` of a catalog product.
    ///
    /// Increments the existing line or appends a new one holding a snapshot
    /// of the product. Unknown ids and a zero quantity change nothing.
    /// Returns whether the cart changed.
    #[instrument(skip(self, catalog))]
    pub fn add_item(&mut self, catalog: &Catalog, id: ProductId, quantity: u32) -> bool {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            debug!("Ignoring add with zero quantity");
            return false;
        };
        let Some(product) = catalog.get(id) else {
            debug!("Ignoring add for unknown product");
            return false;
        };

        if let Some(line) = self.line_mut(id) {
            line.quantity = line.quantity.saturating_add(quantity.get());
        } else {
            self.lines.push(CartLine::new(product.clone(), quantity));
        }
        tracing::info!(product = %product.name, "Added to cart");

        self.persist();
        true
    }

    /// Drop the line for `id`. Returns whether a line was removed.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.id() != id);
        if self.lines.len() == before {
            debug!("Ignoring remove for product not in cart");
            return false;
        }

        self.persist();
        true
    }

    /// Change a line's quantity by `delta`, removing it at zero or below.
    ///
    /// Returns whether the cart changed; a missing line or a zero delta
    /// changes nothing.
    #[instrument(skip(self))]
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> bool {
        if delta == 0 {
            return false;
        }
        let Some(line) = self.line_mut(id) else {
            debug!("Ignoring adjust for product not in cart");
            return false;
        };

        let updated = i64::from(line.quantity.get()).saturating_add(delta);
        match u32::try_from(updated).ok().and_then(NonZeroU32::new) {
            Some(quantity) => line.quantity = quantity,
            None if updated > 0 => line.quantity = NonZeroU32::MAX,
            None => return self.remove_item(id),
        }

        self.persist();
        true
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Sum of `price × quantity` over all lines, at full precision.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// [`Cart::total`] rounded to cents for display.
    #[must_use]
    pub fn display_total(&self) -> Decimal {
        self.total()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Lines in the order products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give up the cart, keeping its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "Failed to persist cart");
        }
    }

    fn save(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.lines)?;
        self.store.set(CART_STORAGE_KEY, &json)
    }
}

/// Fold repeated product ids from a hand-edited snapshot into one line.
fn merge_duplicates(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut merged: Vec<CartLine> = Vec::with_capacity(lines.len());
    for line in lines {
        match merged.iter_mut().find(|m| m.id() == line.id()) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity());
            }
            None => merged.push(line),
        }
    }
    merged
}
