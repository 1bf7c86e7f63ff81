//! # Product Aggregator
//!
//! HTTP service answering "top products for a category" across several
//! upstream company catalogs.
//!
//! Each request runs one pipeline:
//!
//! ```text
//! fetch (per company, concurrent) → enrich → merge → rank → paginate
//! ```
//!
//! - Failed or slow companies are dropped from the candidate set; the
//!   request itself always succeeds.
//! - Per-company lists are merged in configured company order, and the
//!   ranking sort is stable, so identical upstream data always yields the
//!   same page.
//! - Nothing is cached or shared between requests.
//!
//! ## Layers
//!
//! - [`domain`]: products, identifiers, ranking keys, enrichment
//! - [`application`]: aggregation, ranking, pagination, the use case
//! - [`infrastructure`]: upstream HTTP client, configuration, telemetry
//! - [`api`]: axum router and handlers

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
