//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId, Rating};

/// A purchasable product as described by the catalog document.
///
/// Field names match the catalog JSON shape. `image`, `benefits` and `usage`
/// may be omitted by a catalog and default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
    pub rating: Rating,
    /// Relative popularity score; higher sorts first by default.
    pub popularity: i64,
    /// Opaque image reference (URL or `data:` URI).
    #[serde(default)]
    pub image: String,
    pub description: String,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub usage: String,
}
