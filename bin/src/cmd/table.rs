//! Table command implementation.

use crate::data;
use anyhow::Result;
use clap::ValueEnum;
use fundus_metrics::Formatter;
use fundus_report::{Dashboard, text};

/// Which table(s) to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum StatementArg {
    /// Income statement
    Income,
    /// Balance sheet
    BalanceSheet,
    /// Cash flow statement
    CashFlow,
    /// Derived ratios
    Ratios,
    /// Every table
    All,
}

impl StatementArg {
    const fn title(self) -> Option<&'static str> {
        match self {
            Self::Income => Some("Income Statement"),
            Self::BalanceSheet => Some("Balance Sheet"),
            Self::CashFlow => Some("Cash Flow"),
            Self::Ratios => Some("Ratios"),
            Self::All => None,
        }
    }
}

/// Show statement tables, latest year first.
pub(crate) async fn show_tables(
    data_root: &str,
    ticker: &str,
    statement: StatementArg,
    fmt: &Formatter,
) -> Result<()> {
    let dashboard = data::load_dashboard(data_root, ticker, fmt).await?;
    print!("{}", render(&dashboard, statement));
    Ok(())
}

fn render(dashboard: &Dashboard, statement: StatementArg) -> String {
    dashboard
        .tables
        .iter()
        .filter(|t| statement.title().is_none_or(|title| t.title == title))
        .map(|t| format!("\n{}", text::render_table(t)))
        .collect()
}
