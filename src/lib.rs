pub mod client;
pub mod config;
pub mod error;
pub mod metadata;
pub mod render;

pub use client::{ArxivClient, CatalogResult, CmrClient, PaperResult};
pub use config::{ArxivConfig, CatalogConfig, Config, HttpConfig, MetadataConfig};
pub use error::{Error, Result};
pub use metadata::{MetadataOutcome, MetadataTable};
pub use render::{DashboardState, DataSource};
