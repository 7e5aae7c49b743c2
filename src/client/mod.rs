pub mod arxiv;
pub mod cmr;
pub mod opentopo;

pub use arxiv::{ArxivClient, PaperResult};
pub use cmr::{CatalogResult, CmrClient};
pub use opentopo::global_dem_url;

use crate::config::HttpConfig;
use crate::{Error, Result};
use std::time::Duration;

/// Build the shared HTTP client used by all catalog adapters
pub fn build_http_client(config: &HttpConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(Error::Http)
}
