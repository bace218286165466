//! Product filtering and sorting.
//!
//! [`apply`] is a pure function of the catalog and a [`FilterState`]. The
//! search, category and price filters are conjunctive; the survivors are then
//! stably sorted, so products with equal keys keep their catalog order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use herbal_store_core::{Category, Product};
use rust_decimal::Decimal;

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Cheapest first.
    PriceLow,
    /// Most expensive first.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// Most popular first.
    #[default]
    Popularity,
}

impl SortKey {
    /// The identifier used by sort menus (`price-low`, `price-high`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Popularity => "popularity",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::Rating => b.rating.cmp(&a.rating),
            Self::Popularity => b.popularity.cmp(&a.popularity),
        }
    }
}

/// Unrecognised identifiers map to [`SortKey::Popularity`].
impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "price-low" => Self::PriceLow,
            "price-high" => Self::PriceHigh,
            "rating" => Self::Rating,
            _ => Self::Popularity,
        })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The filter controls as the presentation layer last saw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring; empty matches everything.
    pub search_query: String,
    /// Exact category, or `None` for all categories.
    pub category: Option<Category>,
    /// Inclusive upper price bound.
    pub max_price: Decimal,
    pub sort: SortKey,
}

impl Default for FilterState {
    /// No search, all categories, no price ceiling, most popular first.
    fn default() -> Self {
        Self {
            search_query: String::new(),
            category: None,
            max_price: Decimal::MAX,
            sort: SortKey::default(),
        }
    }
}

impl FilterState {
    fn matches(&self, product: &Product, needle: &str) -> bool {
        matches_search(product, needle)
            && self.category.is_none_or(|c| product.category == c)
            && product.price.amount() <= self.max_price
    }
}

/// Filter and sort `catalog` according to `state`.
///
/// The result borrows from `catalog`: every element is a catalog entry and
/// none appears twice.
#[must_use]
pub fn apply<'a>(catalog: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let needle = state.search_query.to_lowercase();

    let mut filtered: Vec<&Product> = catalog
        .iter()
        .filter(|p| state.matches(p, &needle))
        .collect();

    // `sort_by` is stable.
    filtered.sort_by(|a, b| state.sort.compare(a, b));
    filtered
}

/// `needle` must already be lowercase.
fn matches_search(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product
            .ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(needle))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use herbal_store_core::{Price, ProductId, Rating};

    use super::*;
    use crate::catalog::Catalog;

    fn product(id: u32, cents: u32, rating_tenths: i64, popularity: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_cents(cents),
            category: Category::Tea,
            rating: Rating::new(Decimal::new(rating_tenths, 1)).unwrap(),
            popularity,
            image: String::new(),
            description: String::new(),
            ingredients: Vec::new(),
            benefits: Vec::new(),
            usage: String::new(),
        }
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.as_u32()).collect()
    }

    #[test]
    fn test_default_state_returns_everything_by_popularity() {
        let catalog = Catalog::fallback();
        let result = apply(catalog.products(), &FilterState::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::fallback();
        let upper = FilterState {
            search_query: "GINSENG".to_string(),
            ..FilterState::default()
        };
        let lower = FilterState {
            search_query: "ginseng".to_string(),
            ..FilterState::default()
        };
        let a = apply(catalog.products(), &upper);
        assert_eq!(a, apply(catalog.products(), &lower));
        assert_eq!(ids(&a), vec![3]);
    }

    #[test]
    fn test_search_matches_description_and_ingredients() {
        let catalog = Catalog::fallback();
        let by_ingredient = FilterState {
            search_query: "lavender".to_string(),
            ..FilterState::default()
        };
        // Chamomile Dream Tea lists Lavender as an ingredient.
        assert_eq!(ids(&apply(catalog.products(), &by_ingredient)), vec![2, 4]);

        let by_description = FilterState {
            search_query: "aromatherapy".to_string(),
            ..FilterState::default()
        };
        assert_eq!(ids(&apply(catalog.products(), &by_description)), vec![4]);
    }

    #[test]
    fn test_max_price_is_inclusive() {
        let catalog = vec![product(1, 1000, 40, 1), product(2, 2000, 40, 2)];
        let state = FilterState {
            max_price: Decimal::new(10, 0),
            ..FilterState::default()
        };
        assert_eq!(ids(&apply(&catalog, &state)), vec![1]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let catalog = Catalog::fallback();
        let state = FilterState {
            search_query: "lavender".to_string(),
            category: Some(Category::Oil),
            max_price: Decimal::new(30, 0),
            sort: SortKey::PriceLow,
        };
        assert_eq!(ids(&apply(catalog.products(), &state)), vec![4]);
    }

    #[test]
    fn test_category_tea_under_twenty() {
        let catalog = Catalog::fallback();
        let state = FilterState {
            category: Some(Category::Tea),
            max_price: Decimal::new(20, 0),
            ..FilterState::default()
        };
        let result = apply(catalog.products(), &state);
        assert_eq!(ids(&result), vec![2, 6]);
        assert!(result.iter().all(|p| p.category == Category::Tea));
    }

    #[test]
    fn test_price_low_is_stable() {
        let catalog = vec![
            product(1, 1500, 40, 1),
            product(2, 500, 40, 1),
            product(3, 1500, 40, 1),
            product(4, 500, 40, 1),
        ];
        let state = FilterState {
            sort: SortKey::PriceLow,
            ..FilterState::default()
        };
        let result = apply(&catalog, &state);
        assert_eq!(ids(&result), vec![2, 4, 1, 3]);
        assert!(result.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_descending_sorts() {
        let catalog = vec![
            product(1, 100, 30, 10),
            product(2, 300, 50, 5),
            product(3, 200, 40, 20),
        ];
        let sorted = |sort| {
            let state = FilterState {
                sort,
                ..FilterState::default()
            };
            ids(&apply(&catalog, &state))
        };
        assert_eq!(sorted(SortKey::PriceHigh), vec![2, 3, 1]);
        assert_eq!(sorted(SortKey::Rating), vec![2, 3, 1]);
        assert_eq!(sorted(SortKey::Popularity), vec![3, 1, 2]);
    }

    #[test]
    fn test_unknown_sort_key_is_popularity() {
        assert_eq!("newest".parse::<SortKey>().unwrap(), SortKey::Popularity);
        assert_eq!("price-high".parse::<SortKey>().unwrap(), SortKey::PriceHigh);
        assert_eq!(" price-low ".parse::<SortKey>().unwrap(), SortKey::Popularity);
        assert_eq!("Rating".parse::<SortKey>().unwrap(), SortKey::Popularity);
    }

    #[test]
    fn test_output_is_subset_without_duplicates() {
        let catalog = Catalog::fallback();
        for sort in [
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Rating,
            SortKey::Popularity,
        ] {
            for query in ["", "tea", "root", "zzz"] {
                let state = FilterState {
                    search_query: query.to_string(),
                    sort,
                    max_price: Decimal::new(25, 0),
                    ..FilterState::default()
                };
                let result = apply(catalog.products(), &state);
                let mut seen = ids(&result);
                seen.sort_unstable();
                seen.dedup();
                assert_eq!(seen.len(), result.len());
                assert!(result.iter().all(|p| catalog.get(p.id) == Some(*p)));
                assert!(result.iter().all(|p| p.price.amount() <= state.max_price));
            }
        }
    }
}
