//! Layered configuration: built-in defaults, an optional TOML file, then
//! `RSHUB_`-prefixed environment variables.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Environment variable prefix, e.g. `RSHUB_ARXIV__MAX_RESULTS=10`
const ENV_PREFIX: &str = "RSHUB";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arxiv: ArxivConfig,
    pub catalog: CatalogConfig,
    pub metadata: MetadataConfig,
    pub http: HttpConfig,
}

/// Topic-search (arXiv) endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArxivConfig {
    /// Base query URL, without parameters
    pub base_url: String,
    /// Fixed page size requested from the feed
    pub max_results: u32,
}

impl Default for ArxivConfig {
    fn default() -> Self {
        Self {
            base_url: "http://export.arxiv.org/api/query".to_string(),
            max_results: 5,
        }
    }
}

/// Catalog-search (NASA CMR) endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    /// Fixed page size requested from the catalog
    pub page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cmr.earthdata.nasa.gov/search/collections.json".to_string(),
            page_size: 5,
        }
    }
}

/// Local metadata table settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Relative path to the delimited metadata file
    pub path: PathBuf,
    /// Number of data rows shown in the preview
    pub preview_rows: usize,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("hyperspectral_metadata/aviris_metadata.csv"),
            preview_rows: 5,
        }
    }
}

/// Shared HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string sent with every request
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!(
                "remote-sensing-hub/{} (Remote Sensing Catalog Tool)",
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl Config {
    /// Load configuration, layering an optional TOML file and environment
    /// variables over the defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            debug!("Loading configuration file: {}", path.display());
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate endpoint URLs and page sizes
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("arxiv.base_url", &self.arxiv.base_url),
            ("catalog.base_url", &self.catalog.base_url),
        ] {
            Url::parse(value).map_err(|e| Error::InvalidInput {
                field: field.to_string(),
                reason: format!("not a valid URL: {e}"),
            })?;
        }

        if self.arxiv.max_results == 0 {
            return Err(Error::InvalidInput {
                field: "arxiv.max_results".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.catalog.page_size == 0 {
            return Err(Error::InvalidInput {
                field: "catalog.page_size".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
