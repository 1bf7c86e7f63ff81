//! # Catalog Query
//!
//! Parameters shared by every upstream fetch of one request.

use serde::{Deserialize, Serialize};

/// Default lower price bound.
pub const DEFAULT_MIN_PRICE: f64 = 0.0;

/// Default upper price bound.
pub const DEFAULT_MAX_PRICE: f64 = 1_000_000.0;

/// Default per-company "top-N" limit.
pub const DEFAULT_LIMIT: u32 = 10;

/// Inclusive price filter forwarded to the upstream catalogs.
///
/// Bounds are passed through as given; upstream decides how to treat an
/// inverted range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl PriceRange {
    /// Creates a price range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE)
    }
}

/// A `(category, price range, limit)` request sent to each company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Product category (path segment upstream).
    pub category: String,
    /// Price filter.
    pub price_range: PriceRange,
    /// Number of top products requested from each company.
    pub limit: u32,
}

impl CatalogQuery {
    /// Creates a query with default price range and limit.
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            price_range: PriceRange::default(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the price range.
    #[must_use]
    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    /// Sets the per-company limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults() {
        let query = CatalogQuery::new("Laptop");
        assert_eq!(query.category, "Laptop");
        assert_eq!(query.limit, 10);
        assert_eq!(query.price_range, PriceRange::new(0.0, 1_000_000.0));
    }

    #[test]
    fn query_builder() {
        let query = CatalogQuery::new("Phone")
            .with_price_range(100.0, 500.0)
            .with_limit(3);
        assert_eq!(query.limit, 3);
        assert!((query.price_range.min - 100.0).abs() < f64::EPSILON);
        assert!((query.price_range.max - 500.0).abs() < f64::EPSILON);
    }
}
