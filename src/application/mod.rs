//! # Application Layer
//!
//! Orchestration of domain logic over the catalog port.
//!
//! - [`services`]: aggregation, ranking and pagination stages
//! - [`use_cases`]: the top-products pipeline

pub mod services;
pub mod use_cases;
