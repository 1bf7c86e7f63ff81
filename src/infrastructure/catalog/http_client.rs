//! # HTTP Client Utilities
//!
//! Thin reqwest wrapper shared by catalog adapters.
//!
//! Provides:
//! - A fixed per-request timeout
//! - JSON decoding into any `DeserializeOwned` type
//! - Mapping of transport, status and decoding failures to [`CatalogError`]
//!
//! No retries are performed.

use crate::infrastructure::catalog::error::{CatalogError, CatalogResult};
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Longest error body kept in a status error message.
const MAX_ERROR_BODY_LEN: usize = 256;

/// HTTP client wrapper for catalog adapters.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Internal` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| CatalogError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout_ms })
    }

    /// Makes a GET request with query parameters and deserializes the JSON
    /// response.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Timeout` or `CatalogError::Connection` if the
    /// request fails, `CatalogError::Status` on a non-2xx answer and
    /// `CatalogError::Malformed` if the body cannot be decoded.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: Url,
        params: &P,
    ) -> CatalogResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    /// Checks the status, then decodes the body as JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> CatalogResult<T> {
        let status = response.status();

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(self.map_status_error(status, &error_body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        serde_json::from_slice::<T>(&body)
            .map_err(|e| CatalogError::malformed(format!("Failed to parse response: {}", e)))
    }

    /// Maps a reqwest error to a CatalogError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> CatalogError {
        if error.is_timeout() {
            CatalogError::timeout_with_duration("Request timed out", self.timeout_ms)
        } else if error.is_connect() {
            CatalogError::connection(format!("Connection failed: {}", error))
        } else {
            CatalogError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a CatalogError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> CatalogError {
        let mut message: String = body.chars().take(MAX_ERROR_BODY_LEN).collect();
        if message.is_empty() {
            message = status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string();
        }
        CatalogError::status(status.as_u16(), message)
    }
}
