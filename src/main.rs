// Main entry point - Dependency injection and command dispatch
mod application;
mod cli;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use clap::Parser;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::resource_source::ResourceSource;
use crate::cli::{Cli, Command};
use crate::infrastructure::config::{load_dashboard_config, DashboardConfig, SourceKind};
use crate::infrastructure::file_source::FileResourceSource;
use crate::infrastructure::http_source::HttpResourceSource;
use crate::infrastructure::site_exporter::{export_site, write_sample_data};
use crate::presentation::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = load_dashboard_config(&cli.config)?;

    match cli.command() {
        Command::Serve => serve(config).await,
        Command::Render { out } => {
            let service = build_service(&config)?;
            let loaded = service.load_dashboard().await;
            export_site(&loaded, &config.source, &config.view, &out).await?;
            Ok(())
        }
        Command::Init { dir } => {
            let dir = dir.unwrap_or_else(|| config.source.data_dir.clone());
            write_sample_data(&config.source, &dir).await?;
            Ok(())
        }
    }
}

fn build_service(config: &DashboardConfig) -> anyhow::Result<DashboardService> {
    let source: Arc<dyn ResourceSource> = match config.source.kind {
        SourceKind::File => Arc::new(FileResourceSource::new(config.source.data_dir.clone())),
        SourceKind::Http => {
            let base_url = config
                .source
                .base_url
                .clone()
                .context("source.base_url is required for the http source")?;
            Arc::new(HttpResourceSource::new(base_url))
        }
    };

    Ok(DashboardService::new(
        source,
        config.source.clone(),
        config.view.clone(),
    ))
}

async fn serve(config: DashboardConfig) -> anyhow::Result<()> {
    let dashboard_service = build_service(&config)?;
    let state = Arc::new(AppState { dashboard_service });
    let router = presentation::router(state);

    let addr: SocketAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind_address))?;
    tracing::info!("Starting slice-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
