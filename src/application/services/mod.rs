//! # Application Services
//!
//! The stages of the top-products pipeline:
//! - [`CatalogAggregator`]: concurrent fetch and enrichment per company
//! - [`RankingStrategy`]: merge and ordering of the candidate set
//! - [`Paginator`]: fixed-size page slicing

pub mod catalog_aggregation;
pub mod pagination;
pub mod ranking_strategy;

pub use catalog_aggregation::{
    AggregationConfig, CatalogAggregator, CompanyProducts, FetchFailure, FetchReport,
};
pub use pagination::{Page, Paginator};
pub use ranking_strategy::{FieldRanking, RankingStrategy, merge_candidates};
