use crate::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Placeholder shown when a catalog entry carries no summary
pub const NO_DESCRIPTION: &str = "No description.";

/// A single dataset projected from the catalog search response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResult {
    pub title: String,
    pub summary: String,
    pub url: String,
}

/// Raw response shape: `{feed: {entry: [...]}}`. An absent `feed` or
/// `entry` deserializes to an empty entry list rather than an error.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    feed: CatalogFeed,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFeed {
    #[serde(default)]
    entry: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    // Required; a catalog entry without a short name is a hard error
    short_name: String,
    summary: Option<String>,
    #[serde(default)]
    links: Vec<CatalogLink>,
}

#[derive(Debug, Deserialize)]
struct CatalogLink {
    #[serde(default)]
    href: String,
}

impl From<CatalogEntry> for CatalogResult {
    fn from(entry: CatalogEntry) -> Self {
        Self {
            title: entry.short_name,
            summary: entry.summary.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            url: entry.links.into_iter().next().map(|l| l.href).unwrap_or_default(),
        }
    }
}

/// Catalog-search adapter for the NASA CMR collections endpoint
pub struct CmrClient {
    client: Client,
    base_url: String,
    page_size: u32,
}

impl CmrClient {
    pub fn new(client: Client, base_url: impl Into<String>, page_size: u32) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            page_size,
        }
    }

    /// Search the catalog for datasets matching a keyword.
    ///
    /// Returns at most one page of results in response order. An absent
    /// `feed.entry` path yields an empty list; an entry missing its
    /// `short_name` surfaces as a parse error.
    pub async fn search(&self, keyword: &str) -> Result<Vec<CatalogResult>> {
        debug!("Catalog search: keyword='{}' page_size={}", keyword, self.page_size);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("keyword", keyword),
                ("page_size", &self.page_size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Catalog request failed: {}", e);
                Error::Http(e)
            })?;

        if !response.status().is_success() {
            return Err(Error::UpstreamStatus {
                service: "NASA CMR".to_string(),
                status: response.status().as_u16(),
            });
        }

        let body: CatalogResponse = response.json().await?;
        let datasets: Vec<CatalogResult> =
            body.feed.entry.into_iter().map(CatalogResult::from).collect();

        info!("Catalog search for '{}' returned {} datasets", keyword, datasets.len());
        Ok(datasets)
    }
}
