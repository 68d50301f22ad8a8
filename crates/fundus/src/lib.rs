#![doc(issue_tracker_base_url = "https://github.com/factordynamics/fundus/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # fundus
//!
//! Annual statement metrics, formatting and dashboard model.
//!
//! fundus is an umbrella crate that re-exports all fundus sub-crates for convenience.
//! It loads a ticker's annual income statement, cash flow statement and balance
//! sheet, derives a handful of ratios, and turns everything into display-ready
//! strings, highlight tags, tables and chart series.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fundus::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StatementClient::from_env()?;
//! let set = client.load("aapl").await?;
//!
//! let dashboard = Dashboard::build(&set, &Formatter::default());
//! println!("{}: revenue {}", dashboard.summary.year, dashboard.summary.revenue);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`fmp`] - Statement records, the statement loader and [`DataError`]
//! - [`metrics`] - Value formatting, derived ratios, highlighting and year alignment
//! - [`report`] - Summary cards, tables, chart series and renderers
//!
//! ## Architecture
//!
//! 1. **Loader** reads the three statement series for one ticker
//! 2. **Aligner** joins them on calendar year
//! 3. **Calculator** derives ratios from the joined rows
//! 4. **Formatter** and **classifier** produce display strings and highlight tags
//! 5. **Report** assembles the result for an external renderer

/// Version information for the fundus crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Data Loading
// ============================================================================

/// Annual statement records and loader.
///
/// Statements are read from `{root}/{TICKER}/{statement}_annual.json`, where the
/// root is a local directory or an HTTP base URL.
///
/// ## Setup
///
/// Set `FUNDUS_DATA_ROOT` in the environment or a `.env` file. It defaults to
/// `DATA` in the working directory.
///
/// ## Example
///
/// ```ignore
/// use fundus::fmp::{StatementClient, StatementKind};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = StatementClient::from_env()?;
///     let income = client.income_statement("MSFT").await?;
///     println!("{} income records", income.len());
///     println!("{}", StatementClient::statement_path("MSFT", StatementKind::Income));
///     Ok(())
/// }
/// ```
pub mod fmp {
    pub use fundus_fmp::*;
}

// ============================================================================
// Metrics
// ============================================================================

/// Value formatting, derived metrics, highlighting and year alignment.
///
/// ## Formatting
///
/// | Input | `currency` | `decimal` | `percent` |
/// |---|---|---|---|
/// | `1.5e9` | `$2B` | `1,500,000,000.00` | |
/// | `-2.5e6` | `-$3M` | | |
/// | `0.25` | | `0.25` | `25.00%` |
/// | missing | `N/A` | `N/A` | `N/A` |
///
/// ## Derived Metrics
///
/// ```text
/// Debt/Equity        = totalDebt / totalEquity
/// Current Ratio      = totalCurrentAssets / totalCurrentLiabilities
/// Interest Coverage  = operatingIncome / |interestExpense|
/// ROE                = netIncome / totalStockholdersEquity
/// Profit Margin      = netIncome / revenue
/// FCF/Revenue        = freeCashFlow / revenue
/// ```
///
/// A metric is `None` whenever an operand is missing or the denominator is zero.
pub mod metrics {
    pub use fundus_metrics::*;
}

// ============================================================================
// Report
// ============================================================================

/// Dashboard model and renderers.
///
/// # Example
///
/// ```ignore
/// use fundus::report::{Dashboard, text};
/// use fundus::metrics::Formatter;
///
/// let dashboard = Dashboard::build(&set, &Formatter::default());
/// for table in &dashboard.tables {
///     println!("{}", text::render_table(table));
/// }
/// ```
pub mod report {
    pub use fundus_report::*;
}

// Re-export core types at top level for convenience
pub use fundus_fmp::{DataError, Result, StatementClient, StatementSet};
pub use fundus_metrics::{Formatter, HighlightCategory, Polarity, classify};
pub use fundus_report::Dashboard;

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use fundus::prelude::*;
/// ```
///
/// This brings into scope:
/// - Loading: [`StatementClient`], [`StatementSet`], [`DataError`]
/// - Formatting: [`Formatter`], [`FormatConfig`](fundus_metrics::FormatConfig),
///   [`FractionPolicy`](fundus_metrics::FractionPolicy)
/// - Metrics: [`DerivedMetric`](fundus_metrics::DerivedMetric), [`classify`],
///   [`HighlightCategory`], [`Polarity`]
/// - Report: [`Dashboard`]
pub mod prelude {
    pub use crate::{
        DataError, Dashboard, Formatter, HighlightCategory, Polarity, Result, StatementClient,
        StatementSet, classify,
    };
    pub use fundus_metrics::{Cell, DerivedMetric, FormatConfig, FractionPolicy, align_set};
}

// ============================================================================
// Tests
// ============================================================================
