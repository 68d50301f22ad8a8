//! Chart series for an external charting library.

use fundus_metrics::{AlignedSeries, Formatter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slot id of the revenue chart.
pub const REVENUE_CHART: &str = "revenueChart";

/// Slot id of the income and cash flow chart.
pub const METRICS_CHART: &str = "metricsChart";

/// One line of a chart. Gaps are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Legend label.
    pub label: String,
    /// One value per chart label.
    pub values: Vec<Option<f64>>,
}

/// Data for one line chart, years ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Output slot id.
    pub id: String,
    /// X-axis years.
    pub labels: Vec<i32>,
    /// Series sharing the x-axis.
    pub series: Vec<ChartSeries>,
    /// Y-axis lower bound hint.
    pub suggested_min: f64,
}

impl ChartData {
    /// Build a chart, computing the y-axis hint from its values.
    #[must_use]
    pub fn new(id: impl Into<String>, labels: Vec<i32>, series: Vec<ChartSeries>) -> Self {
        let suggested_min = suggested_min(&series);
        Self {
            id: id.into(),
            labels,
            series,
            suggested_min,
        }
    }

    /// Tooltip text for one point, `"{label}: {currency}"`.
    #[must_use]
    pub fn tooltip(&self, fmt: &Formatter, series: usize, point: usize) -> Option<String> {
        let s = self.series.get(series)?;
        let value = *s.values.get(point)?;
        let text = fmt.currency(value, false);
        Some(if s.label.is_empty() {
            text
        } else {
            format!("{}: {text}", s.label)
        })
    }
}

/// Y-axis lower bound: the smallest value, but at least 5% of the largest
/// magnitude below zero so the zero line stays visible.
#[must_use]
pub fn suggested_min(series: &[ChartSeries]) -> f64 {
    let values = series
        .iter()
        .flat_map(|s| s.values.iter().flatten())
        .filter(|v| v.is_finite());

    let (min, max_abs) = values.fold((f64::INFINITY, 0.0f64), |(min, max_abs), v| {
        (min.min(*v), max_abs.max(v.abs()))
    });

    if min.is_infinite() {
        0.0
    } else {
        min.min(-(max_abs * 0.05))
    }
}

/// Revenue by year, over the years with an income statement.
#[must_use]
pub fn revenue_chart(aligned: &AlignedSeries<'_>) -> ChartData {
    let rows: Vec<_> = aligned
        .ascending()
        .iter()
        .filter(|r| r.income.is_some())
        .collect();

    let labels = rows.iter().map(|r| r.year).collect();
    let revenue = ChartSeries {
        label: "Revenue".to_string(),
        values: rows
            .iter()
            .map(|r| r.income.and_then(|i| i.revenue))
            .collect(),
    };

    ChartData::new(REVENUE_CHART, labels, vec![revenue])
}

/// Net income, operating cash flow and free cash flow by year.
///
/// Covers every year with an income or cash flow statement; cash flow values
/// are matched by year, so a shorter cash flow series leaves gaps instead of
/// shifting onto the wrong year.
#[must_use]
pub fn metrics_chart(aligned: &AlignedSeries<'_>) -> ChartData {
    let rows: Vec<_> = aligned
        .ascending()
        .iter()
        .filter(|r| r.income.is_some() || r.cash_flow.is_some())
        .collect();

    let labels = rows.iter().map(|r| r.year).collect();
    let series = vec![
        ChartSeries {
            label: "Net Income".to_string(),
            values: rows
                .iter()
                .map(|r| r.income.and_then(|i| i.net_income))
                .collect(),
        },
        ChartSeries {
            label: "Operating Cash Flow".to_string(),
            values: rows
                .iter()
                .map(|r| r.cash_flow.and_then(|c| c.operating_cash_flow))
                .collect(),
        },
        ChartSeries {
            label: "Free Cash Flow".to_string(),
            values: rows
                .iter()
                .map(|r| r.cash_flow.and_then(|c| c.free_cash_flow))
                .collect(),
        },
    ];

    ChartData::new(METRICS_CHART, labels, series)
}

/// Last rendered chart per output slot.
///
/// Putting a chart into an occupied slot replaces the previous one, which is
/// handed back so the renderer can tear it down.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartSlots {
    slots: BTreeMap<String, ChartData>,
}

impl ChartSlots {
    /// Create an empty set of slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `chart` under its id, returning the chart it replaced.
    pub fn put(&mut self, chart: ChartData) -> Option<ChartData> {
        self.slots.insert(chart.id.clone(), chart)
    }

    /// Chart in slot `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ChartData> {
        self.slots.get(id)
    }

    /// Remove and return the chart in slot `id`.
    pub fn remove(&mut self, id: &str) -> Option<ChartData> {
        self.slots.remove(id)
    }

    /// Charts ordered by slot id.
    pub fn iter(&self) -> impl Iterator<Item = &ChartData> {
        self.slots.values()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether all slots are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
