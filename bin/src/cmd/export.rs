//! Export command implementation.

use crate::data;
use anyhow::{Context, Result};
use clap::ValueEnum;
use fundus_metrics::Formatter;
use fundus_report::{Dashboard, html};
use std::path::Path;
use tracing::info;

/// Export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// Dashboard model as pretty-printed JSON
    Json,
    /// Standalone HTML fragment
    Html,
}

/// Export the dashboard model to stdout or a file.
pub(crate) async fn export(
    data_root: &str,
    ticker: &str,
    format: ExportFormat,
    output: Option<&Path>,
    fmt: &Formatter,
) -> Result<()> {
    let dashboard = data::load_dashboard(data_root, ticker, fmt).await?;
    let rendered = render(&dashboard, format)?;

    match output {
        Some(path) => {
            tokio::fs::write(path, rendered)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), ?format, "exported dashboard");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn render(dashboard: &Dashboard, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(dashboard)?),
        ExportFormat::Html => Ok(html::dashboard_html(dashboard)),
    }
}
