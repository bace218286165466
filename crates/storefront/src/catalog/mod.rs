//! Session catalog.
//!
//! # Loading
//!
//! The catalog is read once per session from a JSON document: an array of
//! product objects. The document may live behind an HTTP(S) URL or on the
//! local filesystem.
//!
//! Any failure (transport error, non-success status, malformed payload,
//! empty array, duplicate ids) is logged and replaced by the built-in
//! [fallback catalog](Catalog::fallback). There is no retry and the caller
//! never sees the error.
//!
//! # Example
//!
//! ```rust,ignore
//! use herbal_store_storefront::catalog::{Catalog, CatalogSource};
//!
//! let source = CatalogSource::parse("https://example.com/products.json")?;
//! let catalog = Catalog::load(&source).await;
//! let first = catalog.products().first();
//! ```

mod artwork;
mod fallback;

use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use herbal_store_core::{Product, ProductId};
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

pub use artwork::placeholder_image;

/// Errors that can occur while fetching or parsing a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog host answered with a non-success status.
    #[error("catalog request returned HTTP {0}")]
    Status(u16),

    /// Reading a local catalog file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but listed no products.
    #[error("catalog is empty")]
    Empty,

    /// Two products share an id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// The configured source string is not a usable URL.
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Where the catalog document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Fetched over HTTP(S).
    Url(Url),
    /// Read from a local file.
    File(PathBuf),
}

impl CatalogSource {
    /// Interpret a configuration string.
    ///
    /// Strings starting with `http://` or `https://` are URLs; anything else
    /// is a filesystem path.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] for a malformed HTTP(S) URL.
    pub fn parse(source: &str) -> Result<Self, CatalogError> {
        let trimmed = source.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Url(Url::parse(trimmed)?))
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The read-only product list for a session, in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an already validated product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list and
    /// [`CatalogError::DuplicateId`] when two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The built-in catalog of six products, one or more per category.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            products: fallback::products(),
        }
    }

    /// Load the catalog, substituting the fallback on any failure.
    #[instrument(fields(source = %source))]
    pub async fn load(source: &CatalogSource) -> Self {
        match Self::fetch(source).await {
            Ok(catalog) => {
                tracing::info!(products = catalog.len(), "Catalog loaded");
                catalog
            }
            Err(e) => {
                tracing::warn!(error = %e, "Catalog unavailable, using fallback products");
                Self::fallback()
            }
        }
    }

    /// Fetch and parse the catalog document without falling back.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the document cannot be read, is not a
    /// JSON array of products, is empty, or repeats a product id.
    #[instrument(fields(source = %source))]
    pub async fn fetch(source: &CatalogSource) -> Result<Self, CatalogError> {
        match source {
            CatalogSource::Url(url) => {
                let response = reqwest::get(url.clone()).await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(CatalogError::Status(status.as_u16()));
                }
                let products: Vec<Product> = response.json().await?;
                debug!(products = products.len(), "Catalog document received");
                Self::new(products)
            }
            CatalogSource::File(path) => {
                let body = tokio::fs::read_to_string(path).await?;
                debug!(bytes = body.len(), "Catalog document read");
                Self::from_json(&body)
            }
        }
    }

    /// Parse a catalog JSON document.
    ///
    /// # Errors
    ///
    /// See [`Catalog::fetch`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in load order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
