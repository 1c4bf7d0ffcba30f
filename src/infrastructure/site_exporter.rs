// Static site export - writes the rendered page and its resources to a directory
use crate::application::dashboard_service::LoadedDashboard;
use crate::application::sample_data::{sample_results, sample_summary};
use crate::infrastructure::config::{SourceSettings, ViewSettings};
use crate::infrastructure::html_renderer::render_dashboard;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

/// Write `index.html` plus the resources the page was built from
pub async fn export_site(
    loaded: &LoadedDashboard,
    source: &SourceSettings,
    view: &ViewSettings,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();

    let index = out_dir.join(INDEX_FILE);
    write_file(&index, render_dashboard(&loaded.document, view).into_bytes()).await?;
    written.push(index);

    if let Some(summary) = &loaded.summary {
        written.push(write_json(out_dir, &source.summary_resource, summary).await?);
    }
    written.push(write_json(out_dir, &source.results_resource, &loaded.results).await?);

    tracing::info!("Exported {} files to {}", written.len(), out_dir.display());
    Ok(written)
}

/// Seed a data directory with the default summary and sweep results
pub async fn write_sample_data(source: &SourceSettings, dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let summary = write_json(dir, &source.summary_resource, &sample_summary()).await?;
    let results = write_json(dir, &source.results_resource, &sample_results()).await?;

    tracing::info!("Sample data written to {}", dir.display());
    Ok(vec![summary, results])
}

async fn write_json<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<PathBuf> {
    let path = dir.join(name);
    let body = serde_json::to_vec_pretty(value).context("Failed to serialize resource")?;
    write_file(&path, body).await?;
    Ok(path)
}

async fn write_file(path: &Path, body: Vec<u8>) -> Result<()> {
    tokio::fs::write(path, body)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))
}
