//! Display formatting for currency, ratio and percentage values.
//!
//! All operations fail closed: a missing or non-finite value renders as
//! [`NOT_AVAILABLE`]. Rounding is half away from zero, and a value that rounds
//! to zero never carries a minus sign.

use serde::{Deserialize, Serialize};

/// Text shown for values that are missing or cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;
const THOUSAND: f64 = 1e3;

/// How many fractional digits abbreviated currency values get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FractionPolicy {
    /// Always zero fractional digits (`$2B`, `$999`).
    #[default]
    Whole,
    /// Two fractional digits when the scaled magnitude is below 10
    /// (`$1.50B`, `$9.99`), zero otherwise.
    TwoBelowTen,
}

impl FractionPolicy {
    /// Fractional digits for a scaled, non-negative magnitude.
    ///
    /// The threshold applies to the value as it would be displayed, so
    /// `9.996` rounds up to `10` and gets no fractional digits.
    #[must_use]
    pub fn digits_for(&self, scaled: f64) -> usize {
        match self {
            Self::Whole => 0,
            Self::TwoBelowTen if (scaled * 100.0).round() < 1000.0 => 2,
            Self::TwoBelowTen => 0,
        }
    }
}

/// Formatter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Fractional digits for currency values (default: [`FractionPolicy::Whole`]).
    pub fraction_policy: FractionPolicy,
}

/// Stateless value formatter.
///
/// # Example
///
/// ```
/// use fundus_metrics::format::{FormatConfig, Formatter, FractionPolicy};
///
/// let fmt = Formatter::default();
/// assert_eq!(fmt.currency(1_500_000_000.0, false), "$2B");
/// assert_eq!(fmt.currency(None::<f64>, false), "N/A");
///
/// let fmt = Formatter::new(FormatConfig {
///     fraction_policy: FractionPolicy::TwoBelowTen,
/// });
/// assert_eq!(fmt.currency(1_500_000_000.0, false), "$1.50B");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    /// Create a formatter with the given configuration.
    #[must_use]
    pub const fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    /// The formatter configuration.
    #[must_use]
    pub const fn config(&self) -> FormatConfig {
        self.config
    }

    /// Format a dollar amount with a magnitude suffix.
    ///
    /// Magnitudes of at least a billion are shown in `B`, at least a million
    /// in `M`, and with `abbreviate_thousands` at least a thousand in `K`.
    /// Smaller values are shown unscaled.
    #[must_use]
    pub fn currency(&self, value: impl Into<Option<f64>>, abbreviate_thousands: bool) -> String {
        let Some(v) = finite(value) else {
            return NOT_AVAILABLE.to_string();
        };

        let magnitude = v.abs();
        let (divisor, suffix) = if magnitude >= BILLION {
            (BILLION, "B")
        } else if magnitude >= MILLION {
            (MILLION, "M")
        } else if abbreviate_thousands && magnitude >= THOUSAND {
            (THOUSAND, "K")
        } else {
            (1.0, "")
        };

        let scaled = magnitude / divisor;
        let digits = self.config.fraction_policy.digits_for(scaled);
        let Some(number) = group_fixed(scaled, digits) else {
            return NOT_AVAILABLE.to_string();
        };
        let sign = if v < 0.0 && !is_zero(&number) { "-" } else { "" };

        format!("{sign}${number}{suffix}")
    }

    /// Format a dimensionless ratio or per-share value with two decimals.
    #[must_use]
    pub fn decimal(&self, value: impl Into<Option<f64>>) -> String {
        finite(value)
            .and_then(|v| signed_fixed(v, 2))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Format a fraction as a percentage with two decimals (`0.25` → `25.00%`).
    #[must_use]
    pub fn percent(&self, value: impl Into<Option<f64>>) -> String {
        finite(value)
            .and_then(|v| signed_fixed(v * 100.0, 2))
            .map_or_else(|| NOT_AVAILABLE.to_string(), |n| format!("{n}%"))
    }

    /// Y-axis tick label for currency charts.
    #[must_use]
    pub fn axis_tick(&self, value: f64) -> String {
        self.currency(value, true)
    }
}

/// [`Formatter::currency`] with the default configuration.
#[must_use]
pub fn format_currency(value: impl Into<Option<f64>>, abbreviate_thousands: bool) -> String {
    Formatter::default().currency(value, abbreviate_thousands)
}

/// [`Formatter::decimal`] with the default configuration.
#[must_use]
pub fn format_decimal(value: impl Into<Option<f64>>) -> String {
    Formatter::default().decimal(value)
}

/// [`Formatter::percent`] with the default configuration.
#[must_use]
pub fn format_percent(value: impl Into<Option<f64>>) -> String {
    Formatter::default().percent(value)
}

fn finite(value: impl Into<Option<f64>>) -> Option<f64> {
    value.into().filter(|v| v.is_finite())
}

fn is_zero(number: &str) -> bool {
    number.bytes().all(|b| matches!(b, b'0' | b'.' | b','))
}

fn signed_fixed(value: f64, digits: usize) -> Option<String> {
    let number = group_fixed(value.abs(), digits)?;
    if value < 0.0 && !is_zero(&number) {
        Some(format!("-{number}"))
    } else {
        Some(number)
    }
}

/// Render a non-negative value with `digits` fractional digits and `,`
/// thousands separators, rounding half away from zero.
///
/// Returns `None` when scaling by the fractional digits leaves the finite range.
fn group_fixed(magnitude: f64, digits: usize) -> Option<String> {
    let factor = 10f64.powi(digits as i32);
    // `round` is half away from zero; the result is integral so `{:.0}` is exact.
    let units = (magnitude * factor).round();
    if !units.is_finite() {
        return None;
    }
    let units = format!("{units:.0}");
    let units = format!("{units:0>width$}", width = digits + 1);
    let (int_part, frac_part) = units.split_at(units.len() - digits);

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + digits + 1);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if digits > 0 {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    Some(grouped)
}
