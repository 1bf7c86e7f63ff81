//! # Domain Services
//!
//! Stateless domain logic applied to upstream records.
//!
//! - [`IdGenerator`]: source of product identifiers
//! - [`ProductEnricher`]: turns raw records into enriched products

pub mod enricher;
pub mod id_generator;

pub use enricher::ProductEnricher;
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
