//! Dashboard model for annual statement data.
//!
//! This crate assembles the pieces of `fundus-metrics` into what a dashboard
//! shows for one ticker:
//! - [`summary`]: key metric cards for the latest year
//! - [`table`]: income, balance sheet, cash flow and ratio tables, latest first
//! - [`chart`]: year-aligned chart series and the per-slot chart registry
//! - [`dashboard`]: all of the above for a [`StatementSet`](fundus_fmp::StatementSet)
//! - [`html`] and [`text`]: renderers for the model
//!
//! # Example
//!
//! ```ignore
//! use fundus_fmp::StatementClient;
//! use fundus_metrics::Formatter;
//! use fundus_report::{Dashboard, html};
//!
//! let set = StatementClient::from_env()?.load("AAPL").await?;
//! let dashboard = Dashboard::build(&set, &Formatter::default());
//! println!("{}", html::dashboard_html(&dashboard));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod chart;
pub mod dashboard;
pub mod html;
pub mod summary;
pub mod table;
pub mod text;

// Re-export key types
pub use chart::{ChartData, ChartSeries, ChartSlots};
pub use dashboard::Dashboard;
pub use summary::Summary;
pub use table::Table;
