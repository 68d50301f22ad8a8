//! Chart command implementation.

use crate::data;
use anyhow::{Result, anyhow};
use clap::ValueEnum;
use fundus_metrics::Formatter;
use fundus_report::{
    Dashboard,
    chart::{METRICS_CHART, REVENUE_CHART},
    text,
};

/// Which chart slot to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ChartArg {
    /// Revenue by year
    Revenue,
    /// Net income, operating cash flow and free cash flow by year
    Metrics,
}

impl ChartArg {
    const fn slot(self) -> &'static str {
        match self {
            Self::Revenue => REVENUE_CHART,
            Self::Metrics => METRICS_CHART,
        }
    }
}

/// Show the chart series for one slot.
pub(crate) async fn show_chart(
    data_root: &str,
    ticker: &str,
    chart: ChartArg,
    fmt: &Formatter,
) -> Result<()> {
    let dashboard = data::load_dashboard(data_root, ticker, fmt).await?;
    print!("{}", render(&dashboard, chart, fmt)?);
    Ok(())
}

fn render(dashboard: &Dashboard, chart: ChartArg, fmt: &Formatter) -> Result<String> {
    let data = dashboard
        .chart(chart.slot())
        .ok_or_else(|| anyhow!("No chart in slot {}", chart.slot()))?;
    Ok(format!("\n{}", text::render_chart(data, fmt)))
}
