//! Checkout form handling and simulated order placement.
//!
//! There is no payment or order backend. Placing an order validates the
//! contact details, waits a fixed processing delay, snapshots the cart into
//! an [`Order`] and empties the cart.

use std::time::Duration;

use chrono::{DateTime, Utc};
use herbal_store_core::{Email, EmailError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use uuid::Uuid;

use crate::cart::{Cart, CartLine, KeyValueStore};

/// Reasons an order cannot be placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// A required form field was left blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The email address failed validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Raw checkout form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

/// Validated contact and shipping details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: Email,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl CheckoutForm {
    /// Trim every field and check it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingField`] for the first blank field, or
    /// [`CheckoutError::InvalidEmail`] for a malformed address.
    pub fn validate(&self) -> Result<Customer, CheckoutError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let address = required("address", &self.address)?;
        let city = required("city", &self.city)?;
        let postal_code = required("postal_code", &self.postal_code)?;

        Ok(Customer {
            name,
            email: Email::parse(&email)?,
            address,
            city,
            postal_code,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, CheckoutError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CheckoutError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub reference: Uuid,
    pub customer: Customer,
    pub lines: Vec<CartLine>,
    /// Full-precision total of `lines`.
    pub total: Decimal,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity())).sum()
    }
}

/// Validate `form`, wait `delay`, then turn the cart into an [`Order`] and
/// clear it.
///
/// The cart is left untouched when validation fails.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] for an empty cart, or a validation
/// error from [`CheckoutForm::validate`].
#[instrument(skip(cart, form))]
pub async fn place_order<S: KeyValueStore>(
    cart: &mut Cart<S>,
    form: &CheckoutForm,
    delay: Duration,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let customer = form.validate()?;

    tokio::time::sleep(delay).await;

    let order = Order {
        reference: Uuid::new_v4(),
        customer,
        lines: cart.lines().to_vec(),
        total: cart.total(),
        placed_at: Utc::now(),
    };
    cart.clear();

    tracing::info!(
        reference = %order.reference,
        items = order.item_count(),
        total = %order.total,
        "Order placed"
    );
    Ok(order)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use herbal_store_core::ProductId;

    use super::*;
    use crate::cart::{CART_STORAGE_KEY, MemoryStore};
    use crate::catalog::Catalog;

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: " Ada Lovelace ".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Analytical Way".to_string(),
            city: "London".to_string(),
            postal_code: "N1 9GU".to_string(),
        }
    }

    fn filled_cart() -> Cart<MemoryStore> {
        let catalog = Catalog::fallback();
        let mut cart = Cart::load(MemoryStore::new());
        cart.add_item(&catalog, ProductId::new(1), 2);
        cart.add_item(&catalog, ProductId::new(6), 1);
        cart
    }

    #[test]
    fn test_validate_trims_fields() {
        let customer = form().validate().unwrap();
        assert_eq!(customer.name, "Ada Lovelace");
        assert_eq!(customer.email.as_str(), "ada@example.com");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let blank_city = CheckoutForm {
            city: "   ".to_string(),
            postal_code: String::new(),
            ..form()
        };
        assert_eq!(
            blank_city.validate(),
            Err(CheckoutError::MissingField("city"))
        );
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let bad = CheckoutForm {
            email: "ada-at-example".to_string(),
            ..form()
        };
        assert!(matches!(
            bad.validate(),
            Err(CheckoutError::InvalidEmail(_))
        ));
    }

    #[tokio::test]
    async fn test_place_order_snapshots_and_clears_cart() {
        let mut cart = filled_cart();
        let expected_lines = cart.lines().to_vec();

        let order = place_order(&mut cart, &form(), Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(order.lines, expected_lines);
        // 2 × 24.99 + 19.80
        assert_eq!(order.total, Decimal::new(6978, 2));
        assert_eq!(order.item_count(), 3);
        assert!(cart.is_empty());
        assert_eq!(
            cart.store().get(CART_STORAGE_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_place_order_on_empty_cart() {
        let mut cart = Cart::load(MemoryStore::new());
        let result = place_order(&mut cart, &form(), Duration::ZERO).await;
        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[tokio::test]
    async fn test_invalid_form_keeps_cart() {
        let mut cart = filled_cart();
        let bad = CheckoutForm {
            name: String::new(),
            ..form()
        };

        let result = place_order(&mut cart, &bad, Duration::ZERO).await;
        assert_eq!(result, Err(CheckoutError::MissingField("name")));
        assert_eq!(cart.item_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_waits_for_processing_delay() {
        let mut cart = filled_cart();
        let started = tokio::time::Instant::now();

        place_order(&mut cart, &form(), Duration::from_secs(1))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_secs(1));
    }
}
