//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ProductId`]: UUID-based product identifier, unique per response
//! - [`CompanyId`]: String-based upstream company code
//!
//! ## Domain Enums
//!
//! - [`Availability`]: derived stock flag
//! - [`SortKey`], [`SortOrder`]: the caller-chosen ranking key
//!
//! ## Queries
//!
//! - [`PriceRange`], [`CatalogQuery`]: parameters of one upstream fetch

pub mod enums;
pub mod ids;
pub mod query;

pub use enums::{Availability, ParseEnumError, RankingKey, SortKey, SortOrder};
pub use ids::{CompanyId, ProductId};
pub use query::{CatalogQuery, PriceRange};
