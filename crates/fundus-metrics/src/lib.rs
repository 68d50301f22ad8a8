//! Formatting and derived metrics for annual financial statements.
//!
//! This crate turns raw statement figures into display values:
//! - [`format`]: currency, ratio and percentage strings with `N/A` for missing values
//! - [`derived`]: ratios combining fields of one year's statements
//! - [`highlight`]: positive/negative/neutral classification for styling
//! - [`align`]: joining statement series by calendar year
//! - [`cell`]: tagged table cells built from the pieces above
//!
//! Everything here is synchronous and stateless. Nothing returns an error:
//! missing or undefined values surface as `None` or `"N/A"`.
//!
//! # Example
//!
//! ```
//! use fundus_metrics::{Cell, Formatter, HighlightCategory, Polarity, classify};
//!
//! let fmt = Formatter::default();
//! assert_eq!(fmt.currency(-2_500_000.0, false), "-$3M");
//! assert_eq!(classify(1.0, HighlightCategory::TotalDebt), Polarity::Negative);
//!
//! let text = fmt.currency(-2_500_000.0, false);
//! let cell = Cell::highlighted(text, Some(-2_500_000.0), HighlightCategory::NetIncome);
//! assert_eq!(cell.polarity(), Polarity::Negative);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod align;
pub mod cell;
pub mod derived;
pub mod format;
pub mod highlight;

// Re-export key types
pub use align::{AlignedSeries, YearRow, align, align_set};
pub use cell::Cell;
pub use derived::DerivedMetric;
pub use format::{FormatConfig, Formatter, FractionPolicy, NOT_AVAILABLE};
pub use highlight::{HighlightCategory, Polarity, Sign, classify};
