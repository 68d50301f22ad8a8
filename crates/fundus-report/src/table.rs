//! Statement tables, latest year first.

use fundus_metrics::{
    AlignedSeries, Cell, DerivedMetric, Formatter, HighlightCategory, derived::diluted_eps,
};
use serde::{Deserialize, Serialize};

/// A table of display cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table title.
    pub title: String,
    /// Column headers.
    pub headers: Vec<String>,
    /// Rows, latest year first. The first cell of each row is the year.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn year_cell(year: i32) -> Cell {
    Cell::plain(year.to_string())
}

fn money(fmt: &Formatter, value: Option<f64>) -> Cell {
    Cell::plain(fmt.currency(value, false))
}

fn highlighted_money(fmt: &Formatter, value: Option<f64>, category: HighlightCategory) -> Cell {
    Cell::highlighted(fmt.currency(value, false), value, category)
}

/// Income statement table.
#[must_use]
pub fn income_table(aligned: &AlignedSeries<'_>, fmt: &Formatter) -> Table {
    let mut table = Table::new(
        "Income Statement",
        &[
            "Year",
            "Revenue",
            "Gross Profit",
            "Net Income",
            "Diluted EPS",
            "Operating Income",
        ],
    );

    for row in aligned.descending() {
        let Some(r) = row.income else { continue };
        table.rows.push(vec![
            year_cell(row.year),
            highlighted_money(fmt, r.revenue, HighlightCategory::Revenue),
            money(fmt, r.gross_profit),
            highlighted_money(fmt, r.net_income, HighlightCategory::NetIncome),
            Cell::plain(fmt.decimal(diluted_eps(r))),
            money(fmt, r.operating_income),
        ]);
    }
    table
}

/// Balance sheet table.
#[must_use]
pub fn balance_sheet_table(aligned: &AlignedSeries<'_>, fmt: &Formatter) -> Table {
    let mut table = Table::new(
        "Balance Sheet",
        &[
            "Year",
            "Total Assets",
            "Total Debt",
            "Total Equity",
            "Cash",
            "Current Assets",
        ],
    );

    for row in aligned.descending() {
        let Some(r) = row.balance_sheet else { continue };
        table.rows.push(vec![
            year_cell(row.year),
            money(fmt, r.total_assets),
            highlighted_money(fmt, r.total_debt, HighlightCategory::TotalDebt),
            highlighted_money(fmt, r.total_equity, HighlightCategory::TotalEquity),
            money(fmt, r.cash_and_cash_equivalents),
            money(fmt, r.total_current_assets),
        ]);
    }
    table
}

/// Cash flow statement table.
#[must_use]
pub fn cash_flow_table(aligned: &AlignedSeries<'_>, fmt: &Formatter) -> Table {
    let mut table = Table::new(
        "Cash Flow",
        &[
            "Year",
            "Operating CF",
            "Investing CF",
            "Financing CF",
            "Free CF",
            "Net Change",
        ],
    );

    for row in aligned.descending() {
        let Some(r) = row.cash_flow else { continue };
        table.rows.push(vec![
            year_cell(row.year),
            highlighted_money(fmt, r.operating_cash_flow, HighlightCategory::OperatingCashFlow),
            money(fmt, r.net_cash_used_for_investing_activites),
            money(fmt, r.net_cash_used_provided_by_financing_activities),
            highlighted_money(fmt, r.free_cash_flow, HighlightCategory::FreeCashFlow),
            money(fmt, r.net_change_in_cash),
        ]);
    }
    table
}

/// Derived metrics for every aligned year.
#[must_use]
pub fn ratio_table(aligned: &AlignedSeries<'_>, fmt: &Formatter) -> Table {
    let mut headers = vec!["Year".to_string()];
    headers.extend(DerivedMetric::ALL.iter().map(ToString::to_string));

    let rows = aligned
        .descending()
        .map(|row| {
            let mut cells = vec![year_cell(row.year)];
            cells.extend(
                DerivedMetric::ALL
                    .iter()
                    .map(|m| Cell::plain(m.format(fmt, m.compute(row)))),
            );
            cells
        })
        .collect();

    Table {
        title: "Ratios".to_string(),
        headers,
        rows,
    }
}
