//! Summary command implementation.

use crate::data;
use anyhow::Result;
use fundus_metrics::Formatter;
use fundus_report::{Dashboard, text};

/// Show key metrics for the latest reported year.
pub(crate) async fn show_summary(data_root: &str, ticker: &str, fmt: &Formatter) -> Result<()> {
    let dashboard = data::load_dashboard(data_root, ticker, fmt).await?;
    print!("{}", render(&dashboard));
    Ok(())
}

fn render(dashboard: &Dashboard) -> String {
    format!(
        "\n{}\n\n{}",
        dashboard.header,
        text::render_summary(&dashboard.summary)
    )
}
