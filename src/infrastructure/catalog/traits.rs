//! # Catalog Client Trait
//!
//! Port definition for upstream catalog integrations.
//!
//! The aggregator only depends on [`CatalogClient`], so the HTTP adapter
//! can be swapped for an in-memory one in tests.
//!
//! # Examples
//!
//! ```ignore
//! use product_aggregator::infrastructure::catalog::traits::CatalogClient;
//!
//! struct FixtureCatalog { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl CatalogClient for FixtureCatalog {
//!     // ... implement fetch_products
//! }
//! ```

use crate::domain::entities::RawProduct;
use crate::domain::value_objects::{CatalogQuery, CompanyId};
use crate::infrastructure::catalog::error::CatalogResult;
use async_trait::async_trait;
use std::fmt;

/// Fetches one company's top products for a query.
#[async_trait]
pub trait CatalogClient: Send + Sync + fmt::Debug {
    /// Fetches the raw products `company` lists for `query`.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if upstream is unreachable, answers with a
    /// non-2xx status or returns an undecodable body. Implementations do
    /// not retry.
    async fn fetch_products(
        &self,
        company: &CompanyId,
        query: &CatalogQuery,
    ) -> CatalogResult<Vec<RawProduct>>;

    /// Returns the adapter name, used in log fields.
    fn name(&self) -> &'static str;
}
