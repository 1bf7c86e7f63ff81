//! # REST Handlers
//!
//! Request parsing, state and response DTOs for the REST API.
//!
//! Query parameters never cause a rejection: anything missing or
//! unparseable falls back to its default, and a repeated key keeps its
//! first value.

use crate::application::services::catalog_aggregation::{AggregationConfig, CatalogAggregator};
use crate::application::services::pagination::Paginator;
use crate::application::services::ranking_strategy::FieldRanking;
use crate::application::use_cases::top_products::{
    TopProductsPage, TopProductsRequest, TopProductsService,
};
use crate::domain::entities::Product;
use crate::domain::services::{IdGenerator, ProductEnricher, UuidIdGenerator};
use crate::domain::value_objects::query::{DEFAULT_LIMIT, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use crate::domain::value_objects::{CatalogQuery, RankingKey, SortKey, SortOrder};
use crate::infrastructure::catalog::error::{CatalogError, CatalogResult};
use crate::infrastructure::catalog::http_catalog::HttpCatalogClient;
use crate::infrastructure::catalog::traits::CatalogClient;
use crate::infrastructure::config::AppConfig;
use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Serialize;
use std::sync::Arc;

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The top-products pipeline.
    pub service: Arc<TopProductsService>,
}

impl AppState {
    /// Wraps an existing service.
    #[must_use]
    pub fn new(service: TopProductsService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Assembles the pipeline from configuration with the HTTP catalog
    /// client and random identifiers.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the HTTP client cannot be built or the
    /// page size is zero.
    pub fn from_config(config: &AppConfig) -> CatalogResult<Self> {
        let client = HttpCatalogClient::new(&config.catalog.base_url, config.catalog.timeout_ms)?;
        Self::with_client(config, Arc::new(client), Arc::new(UuidIdGenerator::new()))
    }

    /// Assembles the pipeline from configuration around a given client and
    /// identifier source.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Internal` if the page size is zero.
    pub fn with_client(
        config: &AppConfig,
        client: Arc<dyn CatalogClient>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> CatalogResult<Self> {
        let paginator = Paginator::try_new(config.pagination.page_size)
            .ok_or_else(|| CatalogError::internal("page size must be positive"))?;

        let aggregation = AggregationConfig::with_companies(config.company_ids())
            .with_per_company_timeout(config.catalog.timeout_ms)
            .with_max_concurrent_fetches(config.catalog.max_concurrent_fetches);
        let aggregator =
            CatalogAggregator::new(client, ProductEnricher::new(id_generator), aggregation);

        Ok(Self::new(TopProductsService::new(
            aggregator,
            Arc::new(FieldRanking::new()),
            paginator,
        )))
    }
}

/// Raw query string of `GET /categories/{category}/products`.
///
/// Kept as strings so malformed values can fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopProductsParams {
    /// Lower price bound.
    pub min_price: Option<String>,
    /// Upper price bound.
    pub max_price: Option<String>,
    /// Per-company top-N limit.
    pub n: Option<String>,
    /// Ranking field.
    pub sort_by: Option<String>,
    /// Ranking direction.
    pub order: Option<String>,
    /// 1-indexed page.
    pub page: Option<String>,
}

impl TopProductsParams {
    /// Collects the recognised keys from decoded query pairs.
    ///
    /// The first occurrence of a key wins; unknown keys are ignored.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "minPrice" => &mut params.min_price,
                "maxPrice" => &mut params.max_price,
                "n" => &mut params.n,
                "sortBy" => &mut params.sort_by,
                "order" => &mut params.order,
                "page" => &mut params.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Resolves the parameters into a pipeline request.
    #[must_use]
    pub fn into_request(self, category: String) -> TopProductsRequest {
        let min_price = parse_price(self.min_price.as_deref(), DEFAULT_MIN_PRICE);
        let max_price = parse_price(self.max_price.as_deref(), DEFAULT_MAX_PRICE);
        let limit = parse_count(self.n.as_deref(), DEFAULT_LIMIT);
        let page = parse_count(self.page.as_deref(), 1);

        let sort_by = self
            .sort_by
            .as_deref()
            .map_or(SortKey::Price, SortKey::from_query);
        let order = self
            .order
            .as_deref()
            .map_or(SortOrder::Asc, SortOrder::from_query);

        TopProductsRequest::new(
            CatalogQuery::new(category)
                .with_price_range(min_price, max_price)
                .with_limit(limit),
        )
        .with_ranking(RankingKey::new(sort_by, order))
        .with_page(page)
    }
}

/// Parses a finite float, falling back to `default`.
fn parse_price(value: Option<&str>, default: f64) -> f64 {
    value
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Parses a non-negative integer, falling back to `default`.
fn parse_count(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

/// Body of `GET /categories/{category}/products`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    /// Products on this page.
    pub products: Vec<Product>,
    /// The 1-indexed page number.
    pub current_page: u32,
    /// Number of pages.
    pub total_pages: usize,
    /// Size of the ranked candidate set.
    pub total_products: usize,
    /// Page size.
    pub products_per_page: usize,
}

impl From<TopProductsPage> for ProductsResponse {
    fn from(result: TopProductsPage) -> Self {
        let page = result.page;
        Self {
            products: page.items,
            current_page: page.current_page,
            total_pages: page.total_pages,
            total_products: page.total_items,
            products_per_page: page.page_size,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: &'static str,
    /// Number of configured companies.
    pub companies: usize,
}

/// `GET /categories/{category}/products`
pub async fn list_top_products(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ProductsResponse> {
    let request = TopProductsParams::from_pairs(pairs).into_request(category);
    let result = state.service.execute(&request).await;
    Json(result.into())
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        companies: state.service.company_count(),
    })
}
