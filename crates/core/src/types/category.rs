//! Product categories.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string names no known category.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// The fixed set of catalog categories.
///
/// Serialized in lowercase (`"tea"`, `"supplement"`, ...), the form catalog
/// documents use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tea,
    Supplement,
    Oil,
    Powder,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Self; 4] = [Self::Tea, Self::Supplement, Self::Oil, Self::Powder];

    /// The identifier used in catalog documents and filter menus.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tea => "tea",
            Self::Supplement => "supplement",
            Self::Oil => "oil",
            Self::Powder => "powder",
        }
    }

    /// Human-readable label shown on product cards.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Tea => "Herbal Tea",
            Self::Supplement => "Supplement",
            Self::Oil => "Essential Oil",
            Self::Powder => "Powder",
        }
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
