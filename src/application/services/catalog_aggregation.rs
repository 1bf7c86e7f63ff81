//! # Catalog Aggregation
//!
//! Fans a [`CatalogQuery`] out to every configured company and enriches
//! what comes back.
//!
//! Fetches run concurrently, at most `max_concurrent_fetches` at a time,
//! each under its own timeout. A company whose fetch fails, times out or
//! panics is left out of the result and logged; the aggregation as a whole
//! never fails. Results are always reported in company order, whatever
//! order the fetches complete in.

use crate::domain::entities::{Product, RawProduct};
use crate::domain::services::ProductEnricher;
use crate::domain::value_objects::{CatalogQuery, CompanyId};
use crate::infrastructure::catalog::error::{CatalogError, CatalogResult};
use crate::infrastructure::catalog::traits::CatalogClient;
use crate::infrastructure::config::{DEFAULT_COMPANIES, DEFAULT_TIMEOUT_MS};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Configuration for catalog aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationConfig {
    /// Companies queried, in merge order.
    pub companies: Vec<CompanyId>,
    /// Per-company timeout in milliseconds.
    pub per_company_timeout_ms: u64,
    /// Maximum number of fetches in flight.
    pub max_concurrent_fetches: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            companies: DEFAULT_COMPANIES.iter().map(|c| CompanyId::new(*c)).collect(),
            per_company_timeout_ms: DEFAULT_TIMEOUT_MS,
            max_concurrent_fetches: DEFAULT_COMPANIES.len(),
        }
    }
}

impl AggregationConfig {
    /// Creates a configuration for the given companies.
    #[must_use]
    pub fn with_companies(companies: Vec<CompanyId>) -> Self {
        let max_concurrent_fetches = companies.len().max(1);
        Self {
            companies,
            max_concurrent_fetches,
            ..Default::default()
        }
    }

    /// Sets the per-company timeout.
    #[must_use]
    pub fn with_per_company_timeout(mut self, timeout_ms: u64) -> Self {
        self.per_company_timeout_ms = timeout_ms;
        self
    }

    /// Sets the maximum number of concurrent fetches.
    #[must_use]
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max;
        self
    }
}

/// Products returned by one company.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProducts {
    /// Source company.
    pub company: CompanyId,
    /// Enriched products in upstream order.
    pub products: Vec<Product>,
}

/// A company left out of the candidate set.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    /// The company whose fetch failed.
    pub company: CompanyId,
    /// Why it failed.
    pub error: CatalogError,
}

/// Outcome of one aggregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
    /// Successful fetches, in company order.
    pub successes: Vec<CompanyProducts>,
    /// Failed fetches, in company order.
    pub failures: Vec<FetchFailure>,
}

impl FetchReport {
    /// Returns the number of companies queried.
    #[must_use]
    pub fn companies_queried(&self) -> usize {
        self.successes.len() + self.failures.len()
    }

    /// Returns the number of companies that answered usefully.
    #[must_use]
    pub fn companies_responded(&self) -> usize {
        self.successes.len()
    }

    /// Returns the total number of products gathered.
    #[must_use]
    pub fn total_products(&self) -> usize {
        self.successes.iter().map(|s| s.products.len()).sum()
    }

    /// Returns true if every company failed (or none was queried).
    #[must_use]
    pub fn all_failed(&self) -> bool {
        self.successes.is_empty()
    }

    /// Consumes the report, returning the per-company lists in order.
    #[must_use]
    pub fn into_lists(self) -> Vec<Vec<Product>> {
        self.successes.into_iter().map(|s| s.products).collect()
    }
}

/// Collects and enriches products from every configured company.
#[derive(Debug, Clone)]
pub struct CatalogAggregator {
    client: Arc<dyn CatalogClient>,
    enricher: ProductEnricher,
    config: AggregationConfig,
}

impl CatalogAggregator {
    /// Creates a new aggregator.
    #[must_use]
    pub fn new(
        client: Arc<dyn CatalogClient>,
        enricher: ProductEnricher,
        config: AggregationConfig,
    ) -> Self {
        Self {
            client,
            enricher,
            config,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Fetches from every company and enriches the successful results.
    ///
    /// The report lists companies in configuration order.
    pub async fn gather_all(&self, query: &CatalogQuery) -> FetchReport {
        let outcomes = self.fetch_from_companies(query).await;
        let mut report = FetchReport::default();

        for (company, outcome) in outcomes {
            match outcome {
                Ok(raw) => {
                    let products = self.enricher.enrich(raw, &company);
                    report.successes.push(CompanyProducts { company, products });
                }
                Err(error) => {
                    warn!(
                        company = %company,
                        category = %query.category,
                        error_kind = error.kind(),
                        error = %error,
                        "catalog fetch failed, excluding company"
                    );
                    report.failures.push(FetchFailure { company, error });
                }
            }
        }

        if report.all_failed() && !self.config.companies.is_empty() {
            warn!(
                category = %query.category,
                queried = report.companies_queried(),
                "no company returned products"
            );
        }

        debug!(
            category = %query.category,
            queried = report.companies_queried(),
            responded = report.companies_responded(),
            products = report.total_products(),
            "catalog aggregation finished"
        );

        report
    }

    /// Runs the fetches with bounded concurrency, yielding results in
    /// company order.
    async fn fetch_from_companies(
        &self,
        query: &CatalogQuery,
    ) -> Vec<(CompanyId, CatalogResult<Vec<RawProduct>>)> {
        let timeout_ms = self.config.per_company_timeout_ms;
        let budget = Duration::from_millis(timeout_ms);

        stream::iter(self.config.companies.iter().cloned())
            .map(|company| {
                let client = Arc::clone(&self.client);
                let query = query.clone();
                let task_company = company.clone();

                async move {
                    let handle = tokio::spawn(async move {
                        match timeout(budget, client.fetch_products(&task_company, &query)).await {
                            Ok(result) => result,
                            Err(_) => Err(CatalogError::timeout_with_duration(
                                "catalog fetch exceeded its time budget",
                                timeout_ms,
                            )),
                        }
                    });

                    let outcome = match handle.await {
                        Ok(result) => result,
                        Err(e) => Err(CatalogError::internal(format!("fetch task failed: {}", e))),
                    };
                    (company, outcome)
                }
            })
            .buffered(self.config.max_concurrent_fetches.max(1))
            .collect()
            .await
    }
}
