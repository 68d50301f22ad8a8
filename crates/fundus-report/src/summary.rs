//! Key metric cards for the latest reported year.

use fundus_metrics::{
    AlignedSeries, DerivedMetric, Formatter, NOT_AVAILABLE, YearRow, derived::diluted_eps,
};
use serde::{Deserialize, Serialize};

/// Formatted key metrics for one year.
///
/// The year is the latest one with an income statement. Cash flow and balance
/// sheet figures are taken from that same year, so a statement that stops a
/// year early shows `N/A` instead of a stale value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Reporting year, or `N/A`.
    pub year: String,
    /// Revenue.
    pub revenue: String,
    /// Net income.
    pub net_income: String,
    /// Free cash flow.
    pub free_cash_flow: String,
    /// Debt to equity.
    pub debt_to_equity: String,
    /// Diluted EPS.
    pub eps: String,
    /// Return on equity.
    pub return_on_equity: String,
    /// Profit margin.
    pub profit_margin: String,
    /// Free cash flow over revenue.
    pub fcf_to_revenue: String,
    /// Current ratio.
    pub current_ratio: String,
    /// Interest coverage.
    pub interest_coverage: String,
}

impl Summary {
    /// Build the summary from aligned statements.
    #[must_use]
    pub fn build(aligned: &AlignedSeries<'_>, fmt: &Formatter) -> Self {
        aligned
            .descending()
            .find(|row| row.income.is_some())
            .map_or_else(Self::unavailable, |row| Self::for_row(row, fmt))
    }

    fn for_row(row: &YearRow<'_>, fmt: &Formatter) -> Self {
        let metric = |m: DerivedMetric| m.format(fmt, m.compute(row));

        Self {
            year: row.year.to_string(),
            revenue: fmt.currency(row.income.and_then(|i| i.revenue), false),
            net_income: fmt.currency(row.income.and_then(|i| i.net_income), false),
            free_cash_flow: fmt.currency(row.cash_flow.and_then(|c| c.free_cash_flow), false),
            debt_to_equity: metric(DerivedMetric::DebtToEquity),
            eps: fmt.decimal(row.income.and_then(diluted_eps)),
            return_on_equity: metric(DerivedMetric::ReturnOnEquity),
            profit_margin: metric(DerivedMetric::ProfitMargin),
            fcf_to_revenue: metric(DerivedMetric::FcfToRevenue),
            current_ratio: metric(DerivedMetric::CurrentRatio),
            interest_coverage: metric(DerivedMetric::InterestCoverage),
        }
    }

    fn unavailable() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            year: na(),
            revenue: na(),
            net_income: na(),
            free_cash_flow: na(),
            debt_to_equity: na(),
            eps: na(),
            return_on_equity: na(),
            profit_margin: na(),
            fcf_to_revenue: na(),
            current_ratio: na(),
            interest_coverage: na(),
        }
    }

    /// Label and value pairs in card order.
    #[must_use]
    pub fn items(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Revenue", self.revenue.as_str()),
            ("Net Income", self.net_income.as_str()),
            ("Free Cash Flow", self.free_cash_flow.as_str()),
            ("Debt/Equity", self.debt_to_equity.as_str()),
            ("Diluted EPS", self.eps.as_str()),
            ("ROE", self.return_on_equity.as_str()),
            ("Profit Margin", self.profit_margin.as_str()),
            ("FCF/Revenue", self.fcf_to_revenue.as_str()),
            ("Current Ratio", self.current_ratio.as_str()),
            ("Interest Coverage", self.interest_coverage.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fundus_fmp::{BalanceSheet, CashFlowStatement, IncomeStatement};
    use fundus_metrics::align;

    #[test]
    fn test_summary_uses_latest_income_year() {
        let income = vec![
            IncomeStatement {
                calendar_year: Some(2022),
                revenue: Some(2_000_000_000.0),
                net_income: Some(200_000_000.0),
                eps: Some(1.5),
                ..Default::default()
            },
            IncomeStatement {
                calendar_year: Some(2021),
                revenue: Some(1_000_000_000.0),
                ..Default::default()
            },
        ];
        let cash = vec![CashFlowStatement {
            calendar_year: Some(2021),
            free_cash_flow: Some(5e8),
            ..Default::default()
        }];
        let balance = vec![BalanceSheet {
            calendar_year: Some(2022),
            total_debt: Some(300.0),
            total_equity: Some(200.0),
            total_stockholders_equity: Some(800_000_000.0),
            ..Default::default()
        }];

        let aligned = align(&income, &cash, &balance);
        let summary = Summary::build(&aligned, &Formatter::default());

        assert_eq!(summary.year, "2022");
        assert_eq!(summary.revenue, "$2B");
        assert_eq!(summary.net_income, "$200M");
        // The cash flow statement stops in 2021
        assert_eq!(summary.free_cash_flow, "N/A");
        assert_eq!(summary.fcf_to_revenue, "N/A");
        assert_eq!(summary.debt_to_equity, "1.50");
        assert_eq!(summary.eps, "1.50");
        assert_eq!(summary.return_on_equity, "25.00%");
        assert_eq!(summary.profit_margin, "10.00%");
    }

    #[test]
    fn test_summary_without_income() {
        let cash = vec![CashFlowStatement {
            calendar_year: Some(2021),
            free_cash_flow: Some(5.0),
            ..Default::default()
        }];
        let aligned = align(&[], &cash, &[]);
        let summary = Summary::build(&aligned, &Formatter::default());

        assert_eq!(summary.year, NOT_AVAILABLE);
        assert!(summary.items().iter().all(|(_, v)| *v == NOT_AVAILABLE));
    }

    #[test]
    fn test_items_order() {
        let aligned = align(&[], &[], &[]);
        let summary = Summary::build(&aligned, &Formatter::default());
        let labels: Vec<&str> = summary.items().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels[0], "Revenue");
        assert_eq!(labels[4], "Diluted EPS");
        assert_eq!(labels.len(), 10);
    }
}
