//! Storefront state container.
//!
//! [`Storefront`] owns the session's catalog, cart and quiz progress and is
//! passed explicitly to whatever drives the UI. Mutating methods return
//! whether anything changed; callers re-read state afterwards to render.

use std::time::Duration;

use herbal_store_core::{Product, ProductId};
use tracing::instrument;

use crate::cart::{Cart, FileStore, KeyValueStore};
use crate::catalog::Catalog;
use crate::checkout::{self, CheckoutError, CheckoutForm, Order};
use crate::config::StorefrontConfig;
use crate::detail::ProductDetail;
use crate::filter::{self, FilterState};
use crate::quiz::{self, QuizAnswers, QuizSession};

/// All state for one storefront session.
#[derive(Debug)]
pub struct Storefront<S> {
    catalog: Catalog,
    cart: Cart<S>,
    quiz: QuizSession,
    checkout_delay: Duration,
}

impl Storefront<FileStore> {
    /// Load the catalog and restore the cart as configured.
    #[instrument(skip(config))]
    pub async fn open(config: &StorefrontConfig) -> Self {
        let catalog = Catalog::load(&config.catalog_source).await;
        let store = FileStore::new(&config.state_dir);
        Self::new(catalog, store, config.checkout_delay)
    }
}

impl<S: KeyValueStore> Storefront<S> {
    /// Assemble a session from an already loaded catalog; the cart is
    /// restored from `store`.
    pub fn new(catalog: Catalog, store: S, checkout_delay: Duration) -> Self {
        Self {
            catalog,
            cart: Cart::load(store),
            quiz: QuizSession::new(),
            checkout_delay,
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart<S> {
        &self.cart
    }

    /// Products matching `state`, sorted.
    #[must_use]
    pub fn apply_filters(&self, state: &FilterState) -> Vec<&Product> {
        filter::apply(self.catalog.products(), state)
    }

    /// Open the detail view for a product.
    #[must_use]
    pub fn product_detail(&self, id: ProductId) -> Option<ProductDetail<'_>> {
        ProductDetail::open(&self.catalog, id)
    }

    pub fn add_item(&mut self, id: ProductId, quantity: u32) -> bool {
        self.cart.add_item(&self.catalog, id, quantity)
    }

    pub fn remove_item(&mut self, id: ProductId) -> bool {
        self.cart.remove_item(id)
    }

    pub fn adjust_quantity(&mut self, id: ProductId, delta: i64) -> bool {
        self.cart.adjust_quantity(id, delta)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    #[must_use]
    pub const fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizSession {
        &mut self.quiz
    }

    /// Recommendation for the quiz answers recorded so far.
    #[must_use]
    pub fn recommend(&self) -> Option<&Product> {
        quiz::recommend(&self.catalog, self.quiz.answers())
    }

    /// Recommendation for an explicit answer set.
    #[must_use]
    pub fn recommend_for(&self, answers: &QuizAnswers) -> Option<&Product> {
        quiz::recommend(&self.catalog, answers)
    }

    /// Place an order for the current cart.
    ///
    /// # Errors
    ///
    /// See [`checkout::place_order`].
    pub async fn checkout(&mut self, form: &CheckoutForm) -> Result<Order, CheckoutError> {
        checkout::place_order(&mut self.cart, form, self.checkout_delay).await
    }
}
