use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use remote_sensing_hub::client::{self, opentopo};
use remote_sensing_hub::render::{self, DashboardState, DataSource};
use remote_sensing_hub::{metadata, ArxivClient, CmrClient, Config};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "remote-sensing-hub")]
#[command(about = "Query public remote-sensing data catalogs", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search arXiv for recent papers on a topic
    Papers {
        /// Free-text research topic, e.g. "hyperspectral" or "SAR"
        #[arg(default_value = "remote sensing")]
        topic: String,
    },
    /// Search the NASA CMR catalog for datasets
    Catalog {
        /// Dataset keyword, e.g. "AVIRIS"
        #[arg(default_value = "AVIRIS")]
        keyword: String,
    },
    /// Print the OpenTopography global DEM download link
    Terrain,
    /// Preview the local hyperspectral metadata table
    Metadata {
        /// Number of data rows to show
        #[arg(long)]
        rows: Option<usize>,
    },
    /// Render one full dashboard interaction for the selected source
    Dashboard {
        #[arg(long, value_enum, default_value = "arxiv")]
        source: DataSource,
        #[arg(long, default_value = "remote sensing")]
        topic: String,
        #[arg(long, default_value = "AVIRIS")]
        keyword: String,
        /// Also show the local metadata table
        #[arg(long)]
        show_metadata: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    debug!("Configuration loaded");

    match cli.command {
        Command::Papers { topic } => {
            let output = search_papers(&config, &topic).await?;
            println!("{output}");
        }
        Command::Catalog { keyword } => {
            let output = search_catalog(&config, &keyword).await?;
            println!("{output}");
        }
        Command::Terrain => {
            println!("{}", render::render_terrain(&opentopo::global_dem_url()));
        }
        Command::Metadata { rows } => {
            let rows = rows.unwrap_or(config.metadata.preview_rows);
            let outcome = metadata::read_preview(&config.metadata.path, rows);
            println!("{}", render::render_metadata(&outcome));
        }
        Command::Dashboard {
            source,
            topic,
            keyword,
            show_metadata,
        } => {
            let state = DashboardState {
                source,
                topic,
                keyword,
                show_metadata,
            };
            let output = run_dashboard(&config, &state).await?;
            println!("{output}");
        }
    }

    Ok(())
}

async fn search_papers(config: &Config, topic: &str) -> Result<String> {
    let http = client::build_http_client(&config.http)?;
    let arxiv = ArxivClient::new(http, config.arxiv.base_url.clone(), config.arxiv.max_results);
    let papers = arxiv
        .search(topic)
        .await
        .with_context(|| format!("paper search for '{topic}' failed"))?;
    Ok(render::render_papers(&papers))
}

async fn search_catalog(config: &Config, keyword: &str) -> Result<String> {
    let http = client::build_http_client(&config.http)?;
    let cmr = CmrClient::new(http, config.catalog.base_url.clone(), config.catalog.page_size);
    let datasets = cmr
        .search(keyword)
        .await
        .with_context(|| format!("catalog search for '{keyword}' failed"))?;
    Ok(render::render_catalog(&datasets))
}

/// One dashboard interaction: a single call for the selected source,
/// plus the optional metadata panel.
async fn run_dashboard(config: &Config, state: &DashboardState) -> Result<String> {
    let mut panels = Vec::new();

    match state.source {
        DataSource::Arxiv => panels.push(search_papers(config, &state.topic).await?),
        DataSource::NasaCmr => panels.push(search_catalog(config, &state.keyword).await?),
        DataSource::OpenTopography => {
            panels.push(render::render_terrain(&opentopo::global_dem_url()));
        }
    }

    if state.show_metadata {
        let outcome = metadata::read_preview(&config.metadata.path, config.metadata.preview_rows);
        panels.push(render::render_metadata(&outcome));
    }

    Ok(panels.join("\n\n"))
}
