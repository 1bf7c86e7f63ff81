//! # Domain Layer
//!
//! Core product types and the pure transforms applied to them.
//!
//! - [`value_objects`]: identifiers, ranking keys and catalog queries
//! - [`entities`]: upstream and enriched products
//! - [`services`]: identifier generation and product enrichment

pub mod entities;
pub mod services;
pub mod value_objects;
