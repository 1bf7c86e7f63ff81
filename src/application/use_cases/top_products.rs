//! # Top Products Use Case
//!
//! Runs fetch → enrich → merge → rank → paginate for one request.
//!
//! The use case has no failure path: upstream problems shrink the
//! candidate set, and the worst outcome is an empty page with zeroed
//! totals.

use crate::application::services::catalog_aggregation::CatalogAggregator;
use crate::application::services::pagination::{Page, Paginator};
use crate::application::services::ranking_strategy::{RankingStrategy, merge_candidates};
use crate::domain::entities::Product;
use crate::domain::value_objects::{CatalogQuery, RankingKey};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Parameters of one top-products request.
#[derive(Debug, Clone, PartialEq)]
pub struct TopProductsRequest {
    /// What to ask each company for.
    pub query: CatalogQuery,
    /// How to order the merged candidates.
    pub ranking: RankingKey,
    /// 1-indexed page to return.
    pub page: u32,
}

impl TopProductsRequest {
    /// Creates a request for the first page with default ranking.
    #[must_use]
    pub fn new(query: CatalogQuery) -> Self {
        Self {
            query,
            ranking: RankingKey::default(),
            page: 1,
        }
    }

    /// Sets the ranking key.
    #[must_use]
    pub fn with_ranking(mut self, ranking: RankingKey) -> Self {
        self.ranking = ranking;
        self
    }

    /// Sets the page.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

/// Result of one top-products request.
#[derive(Debug, Clone, PartialEq)]
pub struct TopProductsPage {
    /// The requested page of ranked products.
    pub page: Page<Product>,
    /// Companies queried.
    pub companies_queried: usize,
    /// Companies that contributed products.
    pub companies_responded: usize,
}

/// Top-products pipeline.
#[derive(Debug, Clone)]
pub struct TopProductsService {
    aggregator: CatalogAggregator,
    ranking: Arc<dyn RankingStrategy>,
    paginator: Paginator,
}

impl TopProductsService {
    /// Creates a new service.
    #[must_use]
    pub fn new(
        aggregator: CatalogAggregator,
        ranking: Arc<dyn RankingStrategy>,
        paginator: Paginator,
    ) -> Self {
        Self {
            aggregator,
            ranking,
            paginator,
        }
    }

    /// Returns the number of companies queried per request.
    #[must_use]
    pub fn company_count(&self) -> usize {
        self.aggregator.config().companies.len()
    }

    /// Returns the page size.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.paginator.page_size()
    }

    /// Executes the pipeline for `request`.
    #[instrument(skip(self), fields(category = %request.query.category, ranking = %request.ranking, page = request.page))]
    pub async fn execute(&self, request: &TopProductsRequest) -> TopProductsPage {
        let report = self.aggregator.gather_all(&request.query).await;
        let companies_queried = report.companies_queried();
        let companies_responded = report.companies_responded();

        let candidates = merge_candidates(report.into_lists());
        let ranked = self.ranking.rank(candidates, request.ranking);
        let page = self.paginator.paginate(ranked, request.page);

        debug!(
            strategy = self.ranking.name(),
            total_products = page.total_items,
            total_pages = page.total_pages,
            returned = page.items.len(),
            "top products ranked"
        );

        TopProductsPage {
            page,
            companies_queried,
            companies_responded,
        }
    }
}
