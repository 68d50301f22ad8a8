//! Plain-text rendering for terminals.

use crate::{chart::ChartData, summary::Summary, table::Table};
use fundus_metrics::{Cell, Formatter, Polarity};
use std::fmt::Write;

/// Width of separator rules.
const RULE_WIDTH: usize = 62;

fn cell_text(cell: &Cell) -> String {
    match cell.polarity() {
        Polarity::Positive => format!("{} +", cell.text()),
        Polarity::Negative => format!("{} -", cell.text()),
        Polarity::Neutral => cell.text().to_string(),
    }
}

/// Render key metrics as label/value lines.
#[must_use]
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "KEY METRICS ({})", summary.year);
    let _ = writeln!(out, "{}", "━".repeat(RULE_WIDTH));
    for (label, value) in summary.items() {
        let _ = writeln!(out, "{label:<20} {value:>16}");
    }
    out
}

/// Render a table with right-aligned columns.
///
/// Highlighted values carry a trailing `+` or `-` for their polarity.
#[must_use]
pub fn render_table(table: &Table) -> String {
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let widths: Vec<usize> = table
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "{}", table.title.to_uppercase());
    let _ = writeln!(out, "{}", "━".repeat(RULE_WIDTH));

    let header: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{h:>w$}"))
        .collect();
    let _ = writeln!(out, "{}", header.join("  "));
    let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let _ = writeln!(out, "{}", "─".repeat(total));

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:>w$}"))
            .collect();
        let _ = writeln!(out, "{}", line.join("  "));
    }
    if rows.is_empty() {
        let _ = writeln!(out, "No data");
    }
    out
}

/// Render chart data as a year-by-series grid of currency values.
#[must_use]
pub fn render_chart(chart: &ChartData, fmt: &Formatter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", chart.id);
    let _ = writeln!(out, "{}", "━".repeat(RULE_WIDTH));

    let _ = write!(out, "{:<6}", "Year");
    for s in &chart.series {
        let _ = write!(out, " {:>20}", s.label);
    }
    let _ = writeln!(out);

    for (i, year) in chart.labels.iter().enumerate() {
        let _ = write!(out, "{year:<6}");
        for s in &chart.series {
            let value = s.values.get(i).copied().flatten();
            let _ = write!(out, " {:>20}", fmt.currency(value, false));
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Axis minimum: {}", fmt.axis_tick(chart.suggested_min));
    out
}
