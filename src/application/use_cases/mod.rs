//! # Use Cases
//!
//! - [`TopProductsService`]: ranked, paginated products for a category

pub mod top_products;

pub use top_products::{TopProductsPage, TopProductsRequest, TopProductsService};
