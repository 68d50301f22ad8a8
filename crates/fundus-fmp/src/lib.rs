//! Annual statement records and loader for Financial Modeling Prep exports.
//!
//! This crate reads the pre-computed annual income statement, cash flow
//! statement and balance sheet exports of a ticker, laid out as
//! `{DATA_ROOT}/{TICKER}/{statement}_annual.json`, from a local directory or
//! an HTTP server.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fundus_fmp::StatementClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StatementClient::from_env()?;
//!
//!     // All three statements, or an error if any one is missing
//!     let statements = client.load("AAPL").await?;
//!
//!     // A single statement
//!     let income = client.income_statement("AAPL").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FUNDUS_DATA_ROOT` in your environment or `.env` file:
//!
//! ```bash
//! FUNDUS_DATA_ROOT=https://example.com/DATA
//! ```

mod client;
mod error;
mod types;

pub use client::{ClientConfig, DATA_ROOT_ENV, DEFAULT_DATA_ROOT, DataSource, StatementClient};
pub use error::DataError;
pub use types::*;

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, DataError>;
