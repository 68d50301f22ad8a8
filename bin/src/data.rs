//! Statement loading for CLI commands.

use anyhow::{Context, Result};
use fundus_fmp::{ClientConfig, DataSource, StatementClient, StatementSet};
use fundus_metrics::Formatter;
use fundus_report::Dashboard;

/// Load all three statement series for `ticker` from `data_root`.
///
/// Any failure is reported as `Error loading data for {TICKER}: ...`, and no
/// partial set is returned.
pub(crate) async fn load_statements(data_root: &str, ticker: &str) -> Result<StatementSet> {
    let label = ticker.trim().to_uppercase();
    fetch(data_root, ticker)
        .await
        .with_context(|| format!("Error loading data for {label}"))
}

async fn fetch(data_root: &str, ticker: &str) -> fundus_fmp::Result<StatementSet> {
    let config = ClientConfig {
        source: DataSource::parse(data_root)?,
    };
    StatementClient::new(config).load(ticker).await
}

/// Load statements and build the dashboard model.
pub(crate) async fn load_dashboard(
    data_root: &str,
    ticker: &str,
    fmt: &Formatter,
) -> Result<Dashboard> {
    let set = load_statements(data_root, ticker).await?;
    Ok(Dashboard::build(&set, fmt))
}
