//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /categories/{category}/products?minPrice&maxPrice&n&sortBy&order&page` -
//!   ranked, paginated top products across all configured companies
//! - `GET /health` - liveness check
//!
//! Response shape of the products endpoint:
//!
//! ```text
//! {
//!   "products": [ { "id", "productName", "category", "company", "price",
//!                   "rating", "discount", "availability", "description" } ],
//!   "currentPage": 1,
//!   "totalPages": 2,
//!   "totalProducts": 15,
//!   "productsPerPage": 10
//! }
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use product_aggregator::api::rest::{create_router, AppState};
//! use product_aggregator::infrastructure::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! let router = create_router(AppState::from_config(&config)?);
//!
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, HealthResponse, ProductsResponse, TopProductsParams};
pub use routes::create_router;
