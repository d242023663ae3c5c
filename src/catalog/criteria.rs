use crate::error::WayfareError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User-selected filter and sort choices for one listing view.
/// Owned and mutated by the presentation layer; the engine treats each
/// instance as a read-only input per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against name, description and
    /// location. Empty string means "match everything".
    pub search: String,
    pub category: CategorySelector,
    pub price: PriceBracket,
    pub sort: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategorySelector::All,
            price: PriceBracket::Unbounded,
            sort: SortKey::PopularityDesc,
        }
    }
}

impl FilterCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, tag: impl Into<String>) -> Self {
        self.category = CategorySelector::Tag(tag.into());
        self
    }

    pub fn with_price(mut self, price: PriceBracket) -> Self {
        self.price = price;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Either the wildcard "all" or exactly one category tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Tag(String),
}

impl CategorySelector {
    /// Tag comparison is case-insensitive; listing pages lowercase their
    /// category chips before comparing.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Tag(tag) => tag.eq_ignore_ascii_case(category),
        }
    }
}

/// Price interval, inclusive on both ends. A bracket with lower > upper
/// matches nothing rather than failing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum PriceBracket {
    Unbounded,
    /// Upper bound only, inclusive
    AtMost(f64),
    /// Lower bound only, inclusive
    AtLeast(f64),
    /// Closed interval `[min, max]`
    Between(f64, f64),
}

impl PriceBracket {
    pub fn contains(&self, price: f64) -> bool {
        match *self {
            PriceBracket::Unbounded => true,
            PriceBracket::AtMost(max) => price <= max,
            PriceBracket::AtLeast(min) => price >= min,
            PriceBracket::Between(min, max) => price >= min && price <= max,
        }
    }

    /// Build a bracket from optional endpoints, as supplied by query
    /// parameters or CLI flags.
    pub fn from_bounds(min: Option<f64>, max: Option<f64>) -> Self {
        match (min, max) {
            (None, None) => PriceBracket::Unbounded,
            (None, Some(max)) => PriceBracket::AtMost(max),
            (Some(min), None) => PriceBracket::AtLeast(min),
            (Some(min), Some(max)) => PriceBracket::Between(min, max),
        }
    }
}

/// Ordering applied to the retained items.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, async_graphql::Enum,
)]
pub enum SortKey {
    /// Most reviewed first (the default listing order)
    PopularityDesc,
    /// Highest rated first
    RatingDesc,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
}

impl FromStr for SortKey {
    type Err = WayfareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "popularity" | "popularity-desc" => Ok(SortKey::PopularityDesc),
            "rating" | "rating-desc" => Ok(SortKey::RatingDesc),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            other => Err(WayfareError::UnknownSortKey(other.to_string())),
        }
    }
}
