//! Derived metrics computed from statement fields.
//!
//! Every metric is `None` when an operand is missing or not finite, or when
//! the denominator is zero. Callers never see `inf` or `NaN`.

use crate::{align::YearRow, format::Formatter};
use derive_more::Display;
use fundus_fmp::{BalanceSheet, CashFlowStatement, IncomeStatement};
use serde::{Deserialize, Serialize};

/// `numerator / denominator`, or `None` if either is missing, non-finite,
/// or the denominator is zero.
#[must_use]
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let n = numerator.filter(|v| v.is_finite())?;
    let d = denominator.filter(|v| v.is_finite() && *v != 0.0)?;
    Some(n / d).filter(|v| v.is_finite())
}

/// Total debt over total equity.
#[must_use]
pub fn debt_to_equity(balance: &BalanceSheet) -> Option<f64> {
    ratio(balance.total_debt, balance.total_equity)
}

/// Current assets over current liabilities.
#[must_use]
pub fn current_ratio(balance: &BalanceSheet) -> Option<f64> {
    ratio(balance.total_current_assets, balance.total_current_liabilities)
}

/// Operating income over the absolute interest expense.
///
/// Providers report interest expense with either sign.
#[must_use]
pub fn interest_coverage(income: &IncomeStatement) -> Option<f64> {
    ratio(income.operating_income, income.interest_expense.map(f64::abs))
}

/// Net income over shareholders' equity.
///
/// Uses total stockholders' equity, falling back to total equity.
#[must_use]
pub fn return_on_equity(income: &IncomeStatement, balance: &BalanceSheet) -> Option<f64> {
    ratio(income.net_income, balance.shareholders_equity())
}

/// Net income over revenue.
#[must_use]
pub fn profit_margin(income: &IncomeStatement) -> Option<f64> {
    ratio(income.net_income, income.revenue)
}

/// Free cash flow over revenue.
#[must_use]
pub fn fcf_to_revenue(cash_flow: &CashFlowStatement, income: &IncomeStatement) -> Option<f64> {
    ratio(cash_flow.free_cash_flow, income.revenue)
}

/// Diluted EPS, falling back to basic EPS when diluted is not reported.
#[must_use]
pub fn diluted_eps(income: &IncomeStatement) -> Option<f64> {
    income
        .eps_diluted
        .filter(|v| v.is_finite())
        .or_else(|| income.eps.filter(|v| v.is_finite()))
}

/// A metric derived from one year's statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerivedMetric {
    /// Total debt / total equity.
    #[display("Debt/Equity")]
    DebtToEquity,
    /// Current assets / current liabilities.
    #[display("Current Ratio")]
    CurrentRatio,
    /// Operating income / |interest expense|.
    #[display("Interest Coverage")]
    InterestCoverage,
    /// Net income / shareholders' equity.
    #[display("ROE")]
    ReturnOnEquity,
    /// Net income / revenue.
    #[display("Profit Margin")]
    ProfitMargin,
    /// Free cash flow / revenue.
    #[display("FCF/Revenue")]
    FcfToRevenue,
    /// Diluted EPS with basic fallback.
    #[display("Diluted EPS")]
    DilutedEps,
}

impl DerivedMetric {
    /// All metrics in display order.
    pub const ALL: [Self; 7] = [
        Self::DebtToEquity,
        Self::CurrentRatio,
        Self::InterestCoverage,
        Self::ReturnOnEquity,
        Self::ProfitMargin,
        Self::FcfToRevenue,
        Self::DilutedEps,
    ];

    /// Whether the metric is shown as a percentage.
    #[must_use]
    pub const fn is_percentage(&self) -> bool {
        matches!(
            self,
            Self::ReturnOnEquity | Self::ProfitMargin | Self::FcfToRevenue
        )
    }

    /// Compute the metric for one aligned year.
    #[must_use]
    pub fn compute(&self, row: &YearRow<'_>) -> Option<f64> {
        match self {
            Self::DebtToEquity => row.balance_sheet.and_then(debt_to_equity),
            Self::CurrentRatio => row.balance_sheet.and_then(current_ratio),
            Self::InterestCoverage => row.income.and_then(interest_coverage),
            Self::ReturnOnEquity => return_on_equity(row.income?, row.balance_sheet?),
            Self::ProfitMargin => row.income.and_then(profit_margin),
            Self::FcfToRevenue => fcf_to_revenue(row.cash_flow?, row.income?),
            Self::DilutedEps => row.income.and_then(diluted_eps),
        }
    }

    /// Format a computed value the way this metric is displayed.
    #[must_use]
    pub fn format(&self, formatter: &Formatter, value: Option<f64>) -> String {
        if self.is_percentage() {
            formatter.percent(value)
        } else {
            formatter.decimal(value)
        }
    }
}
