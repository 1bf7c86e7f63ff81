//! # Identifier Generation
//!
//! Pluggable source of [`ProductId`]s.
//!
//! Production uses [`UuidIdGenerator`] (random v4). [`SequentialIdGenerator`]
//! hands out `1, 2, 3, ...` encoded as UUIDs, which keeps test output
//! reproducible.

use crate::domain::value_objects::ProductId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Produces a fresh identifier per call.
pub trait IdGenerator: Send + Sync + fmt::Debug {
    /// Returns the next identifier.
    fn next_id(&self) -> ProductId;
}

/// Random 128-bit identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    /// Creates a new UUID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> ProductId {
        ProductId::new_v4()
    }
}

/// Monotonic identifiers starting at 1.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> ProductId {
        let value = self.next.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        ProductId::from_u128(u128::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_starts_at_one() {
        let generator = SequentialIdGenerator::new();
        assert_eq!(generator.next_id(), ProductId::from_u128(1));
        assert_eq!(generator.next_id(), ProductId::from_u128(2));
    }

    #[test]
    fn uuid_generator_does_not_repeat() {
        let generator = UuidIdGenerator::new();
        let ids: HashSet<ProductId> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
