//! # HTTP Catalog Client
//!
//! [`CatalogClient`] adapter for the upstream catalog service.
//!
//! Each fetch is a single GET:
//!
//! ```text
//! {base}/{company}/categories/{category}/products/top-{n}?minPrice={min}&maxPrice={max}
//! ```
//!
//! Prices are rendered with two decimals. The body may be either
//! `{"products": [...]}` or a bare array; `"products": null` is an empty
//! list and `null` fields inside a record take their zero value.

use crate::domain::entities::RawProduct;
use crate::domain::entities::product::null_as_default;
use crate::domain::value_objects::{CatalogQuery, CompanyId};
use crate::infrastructure::catalog::error::{CatalogError, CatalogResult};
use crate::infrastructure::catalog::http_client::HttpClient;
use crate::infrastructure::catalog::traits::CatalogClient;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;
use tracing::trace;

/// Accepted upstream body shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProductsPayload {
    Wrapped {
        #[serde(deserialize_with = "null_as_default")]
        products: Vec<RawProduct>,
    },
    Bare(Vec<RawProduct>),
}

impl ProductsPayload {
    fn into_products(self) -> Vec<RawProduct> {
        match self {
            Self::Wrapped { products } | Self::Bare(products) => products,
        }
    }
}

/// Upstream catalog client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: HttpClient,
    base_url: Url,
}

impl HttpCatalogClient {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if `base_url` is not an absolute
    /// URL that can carry path segments, or `CatalogError::Internal` if the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout_ms: u64) -> CatalogResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::invalid_url(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::invalid_url(format!(
                "{} cannot be used as a base URL",
                base_url
            )));
        }

        Ok(Self {
            http: HttpClient::new(timeout_ms)?,
            base_url,
        })
    }

    /// Builds the request URL (without query string) for one company.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if the base URL cannot take path
    /// segments.
    pub fn products_url(&self, company: &CompanyId, query: &CatalogQuery) -> CatalogResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                CatalogError::invalid_url(format!("{} cannot be a base", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .push(company.as_str())
                .push("categories")
                .push(&query.category)
                .push("products")
                .push(&format!("top-{}", query.limit));
        }
        Ok(url)
    }

    /// Returns the `minPrice`/`maxPrice` query pairs.
    #[must_use]
    pub fn price_params(query: &CatalogQuery) -> [(&'static str, String); 2] {
        [
            ("minPrice", format!("{:.2}", query.price_range.min)),
            ("maxPrice", format!("{:.2}", query.price_range.max)),
        ]
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_products(
        &self,
        company: &CompanyId,
        query: &CatalogQuery,
    ) -> CatalogResult<Vec<RawProduct>> {
        let url = self.products_url(company, query)?;
        trace!(company = %company, url = %url, "fetching catalog");

        let payload: ProductsPayload = self
            .http
            .get_with_params(url, &Self::price_params(query))
            .await?;

        Ok(payload.into_products())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
