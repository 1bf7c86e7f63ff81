//! # Domain Entities
//!
//! - [`RawProduct`]: a record as decoded from an upstream catalog
//! - [`Product`]: an enriched product, immutable once built

pub mod product;

pub use product::{Product, RawProduct};
