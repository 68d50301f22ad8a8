//! HTML rendering of the dashboard model.
//!
//! Class names follow the dashboard stylesheet: `financial-table`,
//! `positive-value` / `negative-value` for the sign of a highlighted value and
//! `highlight-positive` / `highlight-negative` for its polarity.

use crate::{dashboard::Dashboard, summary::Summary, table::Table};
use fundus_metrics::Cell;
use std::fmt::Write;

/// Escape text for HTML element content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn cell_html(cell: &Cell) -> String {
    match cell {
        Cell::Plain { text } => format!("<td>{}</td>", escape(text)),
        Cell::Highlighted {
            text,
            polarity,
            sign,
        } => {
            let mut classes = vec![sign.css_class()];
            classes.extend(polarity.css_class());
            format!(
                r#"<td><span class="{}">{}</span></td>"#,
                classes.join(" "),
                escape(text)
            )
        }
    }
}

/// Render a table as an HTML `<table>`.
#[must_use]
pub fn table_html(table: &Table) -> String {
    let head: String = table
        .headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();

    let body: String = table
        .rows
        .iter()
        .map(|row| {
            let cells: String = row.iter().map(cell_html).collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!(
        r#"<table class="financial-table"><thead><tr>{head}</tr></thead><tbody>{body}</tbody></table>"#
    )
}

/// Render the key metric cards.
#[must_use]
pub fn summary_html(summary: &Summary) -> String {
    let mut out = String::from(r#"<div class="metrics">"#);
    for (label, value) in summary.items() {
        let _ = write!(
            out,
            r#"<div class="metric-card"><span class="metric-label">{}</span><span class="metric-year">{}</span><span class="metric-value">{}</span></div>"#,
            escape(label),
            escape(&summary.year),
            escape(value)
        );
    }
    out.push_str("</div>");
    out
}

/// Render the summary and tables of a dashboard as an HTML fragment.
///
/// Charts are left to the charting library; their data is available from
/// [`Dashboard::charts`].
#[must_use]
pub fn dashboard_html(dashboard: &Dashboard) -> String {
    let mut out = format!(
        r#"<section class="dashboard"><h2 id="companyHeader">{}</h2>"#,
        escape(&dashboard.header)
    );
    out.push_str(&summary_html(&dashboard.summary));
    for table in &dashboard.tables {
        let _ = write!(out, "<h3>{}</h3>{}", escape(&table.title), table_html(table));
    }
    out.push_str("</section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundus_metrics::HighlightCategory;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("$383B"), "$383B");
    }

    #[test]
    fn test_table_html() {
        let table = Table {
            title: "Balance Sheet".to_string(),
            headers: vec!["Year".to_string(), "Total Debt".to_string()],
            rows: vec![
                vec![
                    Cell::plain("2023"),
                    Cell::highlighted("$5B", Some(5e9), HighlightCategory::TotalDebt),
                ],
                vec![
                    Cell::plain("2022"),
                    Cell::highlighted("$0", Some(0.0), HighlightCategory::TotalDebt),
                ],
            ],
        };

        assert_eq!(
            table_html(&table),
            concat!(
                r#"<table class="financial-table"><thead><tr><th>Year</th><th>Total Debt</th></tr></thead><tbody>"#,
                r#"<tr><td>2023</td><td><span class="positive-value highlight-negative">$5B</span></td></tr>"#,
                r#"<tr><td>2022</td><td><span class="positive-value">$0</span></td></tr>"#,
                "</tbody></table>"
            )
        );
    }

    #[test]
    fn test_negative_value_classes() {
        let cell = Cell::highlighted("-$3M", Some(-2.5e6), HighlightCategory::NetIncome);
        assert_eq!(
            cell_html(&cell),
            r#"<td><span class="negative-value highlight-negative">-$3M</span></td>"#
        );
        assert_eq!(cell_html(&Cell::plain("N/A")), "<td>N/A</td>");
    }
}
