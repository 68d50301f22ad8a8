//! Full dashboard for one ticker.

use crate::{
    chart::{ChartData, ChartSlots, metrics_chart, revenue_chart},
    summary::Summary,
    table::{Table, balance_sheet_table, cash_flow_table, income_table, ratio_table},
};
use fundus_fmp::StatementSet;
use fundus_metrics::{Formatter, align_set};
use serde::{Deserialize, Serialize};

/// Everything an external renderer needs to draw one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Ticker symbol.
    pub ticker: String,
    /// Page header.
    pub header: String,
    /// Key metric cards.
    pub summary: Summary,
    /// Chart data by slot id.
    pub charts: ChartSlots,
    /// Income, balance sheet, cash flow and ratio tables, in that order.
    pub tables: Vec<Table>,
}

impl Dashboard {
    /// Build the dashboard for a loaded statement set.
    ///
    /// Input series may arrive in any order; years are joined and sorted here.
    #[must_use]
    pub fn build(set: &StatementSet, fmt: &Formatter) -> Self {
        let aligned = align_set(set);

        let mut charts = ChartSlots::new();
        charts.put(revenue_chart(&aligned));
        charts.put(metrics_chart(&aligned));

        Self {
            ticker: set.ticker.clone(),
            header: format!("{} Financial Analysis", set.ticker),
            summary: Summary::build(&aligned, fmt),
            charts,
            tables: vec![
                income_table(&aligned, fmt),
                balance_sheet_table(&aligned, fmt),
                cash_flow_table(&aligned, fmt),
                ratio_table(&aligned, fmt),
            ],
        }
    }

    /// Chart in slot `id`.
    #[must_use]
    pub fn chart(&self, id: &str) -> Option<&ChartData> {
        self.charts.get(id)
    }

    /// Table with the given title.
    #[must_use]
    pub fn table(&self, title: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.title == title)
    }
}
