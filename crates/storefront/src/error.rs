//! Unified error handling.
//!
//! Catalog and cart failures are recovered inside their stores and never
//! reach callers. What remains is configuration, checkout validation and
//! lookups on bad input, gathered here into one `AppError` for callers
//! that drive the storefront end to end.

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Checkout was refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad input from the user.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether the user can fix this by changing their input.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Checkout(_) | Self::NotFound(_) | Self::BadRequest(_)
        )
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 42".to_string());
        assert_eq!(err.to_string(), "Not found: product 42");

        let err = AppError::from(CheckoutError::EmptyCart);
        assert_eq!(err.to_string(), "Checkout error: cart is empty");
    }

    #[test]
    fn test_user_errors() {
        assert!(AppError::BadRequest("x".to_string()).is_user_error());
        assert!(AppError::from(CheckoutError::MissingField("city")).is_user_error());
        assert!(
            !AppError::from(ConfigError::InvalidEnvVar("A".to_string(), "b".to_string()))
                .is_user_error()
        );
    }
}
