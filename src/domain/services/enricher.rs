//! # Product Enricher
//!
//! Stamps each upstream record with a fresh identifier and its source
//! company, and derives availability from the discount. One record in,
//! one product out; nothing is filtered.

use crate::domain::entities::{Product, RawProduct};
use crate::domain::services::id_generator::IdGenerator;
use crate::domain::value_objects::CompanyId;
use std::sync::Arc;

/// Enriches raw upstream records.
#[derive(Debug, Clone)]
pub struct ProductEnricher {
    id_generator: Arc<dyn IdGenerator>,
}

impl ProductEnricher {
    /// Creates an enricher drawing identifiers from `id_generator`.
    #[must_use]
    pub fn new(id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { id_generator }
    }

    /// Enriches every record fetched from `company`, preserving order.
    #[must_use]
    pub fn enrich(&self, raw_products: Vec<RawProduct>, company: &CompanyId) -> Vec<Product> {
        raw_products
            .into_iter()
            .map(|raw| Product::enrich(raw, self.id_generator.next_id(), company.clone()))
            .collect()
    }
}
