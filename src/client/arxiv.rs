use crate::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// A single paper projected from the arXiv Atom feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperResult {
    pub title: String,
    pub link: String,
}

/// Topic-search adapter for the arXiv query API
pub struct ArxivClient {
    client: Client,
    base_url: String,
    max_results: u32,
}

impl ArxivClient {
    pub fn new(client: Client, base_url: impl Into<String>, max_results: u32) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            max_results,
        }
    }

    /// Build the feed query URL for a topic.
    ///
    /// The topic is trimmed and percent-encoded before substitution; the
    /// remainder of the query string is fixed. Results are requested sorted
    /// by last-updated date, newest first.
    pub fn build_query_url(&self, topic: &str) -> String {
        let safe_topic = urlencoding::encode(topic.trim()).into_owned();
        format!(
            "{}?search_query=all:{}&start=0&max_results={}&sortBy=lastUpdatedDate&sortOrder=descending",
            self.base_url, safe_topic, self.max_results
        )
    }

    /// Search the feed for papers matching a free-text topic.
    ///
    /// Returns at most `max_results` papers in feed order. Network, status,
    /// and parse failures all surface as explicit errors.
    pub async fn search(&self, topic: &str) -> Result<Vec<PaperResult>> {
        let url = self.build_query_url(topic);
        debug!("arXiv query URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("arXiv request failed: {}", e);
            Error::Http(e)
        })?;

        if !response.status().is_success() {
            return Err(Error::UpstreamStatus {
                service: "arXiv".to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let papers = parse_feed(&body)?;

        info!("arXiv search for '{}' returned {} papers", topic.trim(), papers.len());
        Ok(papers)
    }
}

/// Parse an Atom feed body into paper records, preserving feed order.
fn parse_feed(body: &str) -> Result<Vec<PaperResult>> {
    let doc = roxmltree::Document::parse(body).map_err(|e| Error::Parse {
        context: "arxiv feed".to_string(),
        message: format!("Failed to parse XML: {e}"),
    })?;

    let mut papers = Vec::new();

    for entry in doc.descendants().filter(|n| n.has_tag_name("entry")) {
        let mut title = None;
        let mut link = None;
        let mut fallback_link = None;
        let mut id = None;

        for child in entry.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "title" => {
                    if let Some(text) = child.text() {
                        title = Some(text.trim().to_string());
                    }
                }
                "link" => {
                    if let Some(href) = child.attribute("href") {
                        // Prefer the alternate (abstract page) link over
                        // related links such as the PDF
                        match child.attribute("rel") {
                            Some("alternate") | None => link = Some(href.to_string()),
                            _ => {
                                if fallback_link.is_none() {
                                    fallback_link = Some(href.to_string());
                                }
                            }
                        }
                    }
                }
                "id" => {
                    if let Some(text) = child.text() {
                        id = Some(text.trim().to_string());
                    }
                }
                _ => {}
            }
        }

        if let Some(title) = title {
            let link = link.or(fallback_link).or(id).unwrap_or_default();
            papers.push(PaperResult { title, link });
        }
    }

    debug!("Parsed {} entries from arXiv feed", papers.len());
    Ok(papers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> ArxivClient {
        ArxivClient::new(
            Client::new(),
            "http://export.arxiv.org/api/query",
            5,
        )
    }

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>ArXiv Query Results</title>
  <entry>
    <id>http://arxiv.org/abs/2401.00001v1</id>
    <title>SAR Interferometry for Subsidence Monitoring</title>
    <link href="http://arxiv.org/abs/2401.00001v1" rel="alternate" type="text/html"/>
    <link href="http://arxiv.org/pdf/2401.00001v1" rel="related" type="application/pdf"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2401.00002v2</id>
    <title>Hyperspectral Band Selection Revisited</title>
    <link href="http://arxiv.org/abs/2401.00002v2" rel="alternate" type="text/html"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2401.00003v1</id>
    <title>LiDAR Point Cloud Registration</title>
    <link href="http://arxiv.org/abs/2401.00003v1" rel="alternate" type="text/html"/>
  </entry>
</feed>"#;

    #[test]
    fn test_query_url_unreserved_topic_substituted_verbatim() {
        let client = test_client();
        let url = client.build_query_url("hyperspectral");
        let expected = "http://export.arxiv.org/api/query?search_query=all:hyperspectral&start=0&max_results=5&sortBy=lastUpdatedDate&sortOrder=descending";
        assert_eq!(url, expected);
    }

    #[test]
    fn test_query_url_escapes_reserved_characters() {
        let client = test_client();
        let url = client.build_query_url("synthetic aperture & radar");
        assert!(url.contains("all:synthetic%20aperture%20%26%20radar"));
        assert!(!url.contains("all:synthetic aperture"));
    }

    #[test]
    fn test_query_url_trims_topic() {
        let client = test_client();
        let url = client.build_query_url("  SAR  ");
        assert!(url.contains("search_query=all:SAR&"));
    }

    #[test]
    fn test_parse_feed_preserves_order_and_fields() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(papers.len(), 3);
        assert_eq!(papers[0].title, "SAR Interferometry for Subsidence Monitoring");
        assert_eq!(papers[0].link, "http://arxiv.org/abs/2401.00001v1");
        assert_eq!(papers[2].title, "LiDAR Point Cloud Registration");
    }

    #[test]
    fn test_parse_feed_prefers_alternate_link_over_pdf() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(papers[0].link, "http://arxiv.org/abs/2401.00001v1");
    }

    #[test]
    fn test_parse_feed_no_entries() {
        let body = r#"<?xml version="1.0"?><feed xmlns="http://www.w3.org/2005/Atom"></feed>"#;
        let papers = parse_feed(body).unwrap();
        assert!(papers.is_empty());
    }

    #[test]
    fn test_parse_feed_malformed_xml_is_error() {
        let result = parse_feed("<feed><entry>");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }
}
