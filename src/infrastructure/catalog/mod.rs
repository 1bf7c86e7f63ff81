//! # Upstream Catalogs
//!
//! Adapters for the per-company upstream catalog service.
//!
//! - [`CatalogClient`]: the port the aggregator depends on
//! - [`HttpCatalogClient`]: HTTP implementation
//! - [`CatalogError`]: per-fetch failures

pub mod error;
pub mod http_catalog;
pub mod http_client;
pub mod traits;

pub use error::{CatalogError, CatalogResult};
pub use http_catalog::HttpCatalogClient;
pub use http_client::HttpClient;
pub use traits::CatalogClient;
