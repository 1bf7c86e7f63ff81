//! # Service Configuration
//!
//! Layered configuration for the service, lowest precedence first:
//!
//! 1. Built-in defaults (the reference deployment)
//! 2. An optional TOML file (`product-aggregator.toml`, or the path in
//!    `PRODUCT_AGGREGATOR_CONFIG`, which is then required)
//! 3. Environment variables prefixed `PRODUCT_AGGREGATOR_`, with `__`
//!    between nested keys
//!
//! ```text
//! PRODUCT_AGGREGATOR_SERVER__PORT=8080
//! PRODUCT_AGGREGATOR_CATALOG__COMPANIES=AMZ,FLP,SP
//! PRODUCT_AGGREGATOR_CATALOG__TIMEOUT_MS=750
//! ```

use crate::domain::value_objects::CompanyId;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "PRODUCT_AGGREGATOR";

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PRODUCT_AGGREGATOR_CONFIG";

/// Config file looked up when `PRODUCT_AGGREGATOR_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "product-aggregator.toml";

/// Default upstream catalog base URL.
pub const DEFAULT_BASE_URL: &str = "http://20.244.56.144/test/companies";

/// Default companies, in iteration order.
pub const DEFAULT_COMPANIES: [&str; 5] = ["AMZ", "FLP", "SP", "HYN", "AZO"];

/// Default per-fetch timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 9876;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values were read but are not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

/// Upstream catalog settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL; company paths are appended to it.
    pub base_url: String,
    /// Companies queried per request, in merge order.
    pub companies: Vec<String>,
    /// Per-fetch timeout in milliseconds.
    pub timeout_ms: u64,
    /// Upper bound on in-flight fetches per request.
    pub max_concurrent_fetches: usize,
}

/// Pagination settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Products per page.
    pub page_size: usize,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

/// Complete service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener.
    pub server: ServerConfig,
    /// Upstream catalogs.
    pub catalog: CatalogConfig,
    /// Pagination.
    pub pagination: PaginationConfig,
    /// Logging.
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
            },
            catalog: CatalogConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                companies: DEFAULT_COMPANIES.iter().map(|c| (*c).to_string()).collect(),
                timeout_ms: DEFAULT_TIMEOUT_MS,
                max_concurrent_fetches: DEFAULT_COMPANIES.len(),
            },
            pagination: PaginationConfig {
                page_size: DEFAULT_PAGE_SIZE,
            },
            log: LogConfig {
                level: "info".to_string(),
                format: LogFormat::Text,
            },
        }
    }
}

impl AppConfig {
    /// Loads configuration from defaults, the config file and the process
    /// environment, then validates it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is unreadable (including an
    /// explicitly named file that does not exist) and `ConfigError::Invalid`
    /// if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var(CONFIG_PATH_ENV).ok();
        let required = explicit.is_some();
        let path = explicit.unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        let builder = Self::defaults()?
            .add_source(File::with_name(&path).required(required))
            .add_source(Self::environment());

        Self::from_builder(builder)
    }

    /// Returns a builder seeded with the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a default cannot be set.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        let builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("catalog.base_url", defaults.catalog.base_url)?
            .set_default("catalog.companies", defaults.catalog.companies)?
            .set_default(
                "catalog.timeout_ms",
                i64::try_from(defaults.catalog.timeout_ms).unwrap_or(i64::MAX),
            )?
            .set_default(
                "catalog.max_concurrent_fetches",
                i64::try_from(defaults.catalog.max_concurrent_fetches).unwrap_or(i64::MAX),
            )?
            .set_default(
                "pagination.page_size",
                i64::try_from(defaults.pagination.page_size).unwrap_or(i64::MAX),
            )?
            .set_default("log.level", defaults.log.level)?
            .set_default("log.format", "text")?;
        Ok(builder)
    }

    /// Returns the environment source used by [`AppConfig::load`].
    #[must_use]
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("catalog.companies")
            .try_parsing(true)
    }

    /// Builds, deserializes and validates a configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` or `ConfigError::Invalid`.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let catalog = &self.catalog;

        if catalog.companies.is_empty() {
            return Err(ConfigError::invalid("catalog.companies must not be empty"));
        }
        let mut seen = HashSet::new();
        for company in &catalog.companies {
            if company.trim().is_empty() {
                return Err(ConfigError::invalid("catalog.companies contains a blank entry"));
            }
            if !seen.insert(company.as_str()) {
                return Err(ConfigError::invalid(format!(
                    "catalog.companies lists {} more than once",
                    company
                )));
            }
        }
        if catalog.timeout_ms == 0 {
            return Err(ConfigError::invalid("catalog.timeout_ms must be positive"));
        }
        if catalog.max_concurrent_fetches == 0 {
            return Err(ConfigError::invalid(
                "catalog.max_concurrent_fetches must be positive",
            ));
        }
        match Url::parse(&catalog.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::invalid(format!(
                    "catalog.base_url has unsupported scheme {}",
                    url.scheme()
                )));
            }
            Err(e) => {
                return Err(ConfigError::invalid(format!(
                    "catalog.base_url is not a valid URL: {}",
                    e
                )));
            }
        }
        if self.pagination.page_size == 0 {
            return Err(ConfigError::invalid("pagination.page_size must be positive"));
        }

        Ok(())
    }

    /// Returns the configured companies as identifiers, in order.
    #[must_use]
    pub fn company_ids(&self) -> Vec<CompanyId> {
        self.catalog
            .companies
            .iter()
            .map(|c| CompanyId::new(c.trim()))
            .collect()
    }

    /// Returns `host:port` for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::environment().source(Some(map))
    }

    #[test]
    fn defaults_match_reference_deployment() {
        let config = AppConfig::from_builder(AppConfig::defaults().unwrap()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:9876");
        assert_eq!(config.catalog.timeout_ms, 500);
        assert_eq!(config.pagination.page_size, 10);
        assert_eq!(
            config.company_ids(),
            vec![
                CompanyId::new("AMZ"),
                CompanyId::new("FLP"),
                CompanyId::new("SP"),
                CompanyId::new("HYN"),
                CompanyId::new("AZO"),
            ]
        );
    }

    #[test]
    fn environment_overrides_defaults() {
        let builder = AppConfig::defaults().unwrap().add_source(env(&[
            ("PRODUCT_AGGREGATOR_SERVER__PORT", "8080"),
            ("PRODUCT_AGGREGATOR_CATALOG__COMPANIES", "AMZ,SP"),
            ("PRODUCT_AGGREGATOR_CATALOG__TIMEOUT_MS", "750"),
            ("PRODUCT_AGGREGATOR_LOG__FORMAT", "json"),
        ]));

        let config = AppConfig::from_builder(builder).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.catalog.companies, vec!["AMZ", "SP"]);
        assert_eq!(config.catalog.timeout_ms, 750);
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn file_overrides_defaults() {
        let toml = r#"
            [catalog]
            base_url = "https://catalog.internal/companies"
            companies = ["HYN"]

            [pagination]
            page_size = 25
        "#;
        let builder = AppConfig::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml));

        let config = AppConfig::from_builder(builder).unwrap();
        assert_eq!(config.catalog.base_url, "https://catalog.internal/companies");
        assert_eq!(config.catalog.companies, vec!["HYN"]);
        assert_eq!(config.pagination.page_size, 25);
        assert_eq!(config.catalog.timeout_ms, 500);
    }

    #[test]
    fn rejects_empty_company_list() {
        let mut config = AppConfig::default();
        config.catalog.companies.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_duplicate_company() {
        let mut config = AppConfig::default();
        config.catalog.companies.push("AMZ".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("AMZ"));
    }

    #[test]
    fn rejects_zero_page_size() {
        let mut config = AppConfig::default();
        config.pagination.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_timeout_and_concurrency() {
        let mut config = AppConfig::default();
        config.catalog.timeout_ms = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.catalog.max_concurrent_fetches = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let mut config = AppConfig::default();
        config.catalog.base_url = "ftp://catalog.local".to_string();
        assert!(config.validate().is_err());

        config.catalog.base_url = "catalog.local".to_string();
        assert!(config.validate().is_err());
    }
}
