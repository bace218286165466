//! Customer rating on a zero to five scale.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The value falls outside `0..=5`.
    #[error("rating must be between 0 and 5, got {0}")]
    OutOfRange(Decimal),
}

/// An average rating in `[0, 5]`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    /// Highest possible rating.
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] outside `0..=5`.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if value < Decimal::ZERO || value > Self::MAX {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Render as five star glyphs: one filled star per whole point, the
    /// remainder empty.
    ///
    /// ```
    /// use herbal_store_core::Rating;
    /// use rust_decimal::Decimal;
    ///
    /// let rating = Rating::new(Decimal::new(47, 1)).unwrap();
    /// assert_eq!(rating.stars(), "★★★★☆");
    /// ```
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = self.0.floor().to_usize().unwrap_or(0).min(5);
        let mut stars = "★".repeat(filled);
        stars.push_str(&"☆".repeat(5 - filled));
        stars
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
