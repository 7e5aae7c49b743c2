//! Pure presentation helpers.
//!
//! Session state is an explicit value passed in by the caller, and every
//! render function is a plain string transform with no I/O, so the thin UI
//! on top of this crate only has to print what it is given.

use crate::client::{CatalogResult, PaperResult};
use crate::metadata::MetadataOutcome;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The three-way data-source selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSource {
    #[default]
    Arxiv,
    NasaCmr,
    OpenTopography,
}

/// Explicit per-interaction session state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    pub source: DataSource,
    pub topic: String,
    pub keyword: String,
    pub show_metadata: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            source: DataSource::Arxiv,
            topic: "remote sensing".to_string(),
            keyword: "AVIRIS".to_string(),
            show_metadata: false,
        }
    }
}

/// Render papers as a numbered list of titles and links
pub fn render_papers(papers: &[PaperResult]) -> String {
    if papers.is_empty() {
        return "No papers found.".to_string();
    }
    papers
        .iter()
        .enumerate()
        .map(|(i, paper)| format!("{}. {}\n   {}", i + 1, paper.title, paper.link))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render catalog datasets with their summaries and links
pub fn render_catalog(datasets: &[CatalogResult]) -> String {
    if datasets.is_empty() {
        return "No datasets found.".to_string();
    }
    datasets
        .iter()
        .map(|dataset| {
            let mut block = format!("### {}\n{}", dataset.title, dataset.summary);
            if !dataset.url.is_empty() {
                block.push_str(&format!("\n   {}", dataset.url));
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the terrain download link
pub fn render_terrain(url: &str) -> String {
    format!("Global DEM (SRTMGL1) GeoTIFF download:\n   {url}")
}

/// Render a metadata read outcome. Absence is an informational notice and
/// an unreadable file is a warning; neither is an error to the caller.
pub fn render_metadata(outcome: &MetadataOutcome) -> String {
    match outcome {
        MetadataOutcome::Loaded(table) => {
            let mut lines = vec![table.headers.join(" | ")];
            lines.extend(table.rows.iter().map(|row| row.join(" | ")));
            lines.join("\n")
        }
        MetadataOutcome::NotFound => "Metadata file not found.".to_string(),
        MetadataOutcome::Unreadable(message) => {
            format!("Warning: metadata could not be loaded: {message}")
        }
    }
}
