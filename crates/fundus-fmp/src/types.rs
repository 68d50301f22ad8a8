//! Data types for FMP annual statement exports.
//!
//! Every numeric field is optional: the provider omits fields or sends `null`
//! when a filing does not report them, and a missing figure must never be read
//! as zero.

use chrono::{Datelike, NaiveDate};
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

/// Statement kind, one JSON file per kind and ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Income statement.
    #[display("income statement")]
    Income,
    /// Cash flow statement.
    #[display("cash flow statement")]
    CashFlow,
    /// Balance sheet.
    #[display("balance sheet")]
    BalanceSheet,
}

impl StatementKind {
    /// All statement kinds in load order.
    pub const ALL: [Self; 3] = [Self::Income, Self::CashFlow, Self::BalanceSheet];

    /// File name of the annual export for this kind.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Income => "income_statement_annual.json",
            Self::CashFlow => "cash_flow_statement_annual.json",
            Self::BalanceSheet => "balance_sheet_statement_annual.json",
        }
    }
}

/// A record covering one reporting year.
pub trait AnnualRecord {
    /// `calendarYear` as sent by the provider.
    fn calendar_year(&self) -> Option<i32>;

    /// Filing date string (`YYYY-MM-DD`).
    fn date(&self) -> Option<&str>;

    /// Parse the filing date into a NaiveDate.
    fn parsed_date(&self) -> Option<NaiveDate> {
        self.date()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Calendar year the record reports on.
    ///
    /// Falls back to the year of the filing date when the provider did not
    /// send `calendarYear`. Records without either cannot be joined by year.
    fn fiscal_year(&self) -> Option<i32> {
        self.calendar_year()
            .or_else(|| self.parsed_date().map(|d| d.year()))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(i32),
    Text(String),
}

/// The provider emits `calendarYear` both as a number and as a string.
fn deserialize_calendar_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<YearRepr>::deserialize(deserializer)? {
            Some(YearRepr::Number(year)) => Some(year),
            Some(YearRepr::Text(text)) => text.trim().parse().ok(),
            None => None,
        },
    )
}

/// Income statement data from FMP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Filing date.
    #[serde(default)]
    pub date: Option<String>,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Calendar year of the report.
    #[serde(default, deserialize_with = "deserialize_calendar_year")]
    pub calendar_year: Option<i32>,
    /// Reporting period (FY, Q1, ...).
    #[serde(default)]
    pub period: Option<String>,
    /// Total revenue.
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Gross profit.
    #[serde(default)]
    pub gross_profit: Option<f64>,
    /// Operating income.
    #[serde(default)]
    pub operating_income: Option<f64>,
    /// Interest expense.
    #[serde(default)]
    pub interest_expense: Option<f64>,
    /// Net income.
    #[serde(default)]
    pub net_income: Option<f64>,
    /// Earnings per share (basic).
    #[serde(default)]
    pub eps: Option<f64>,
    /// Earnings per share (diluted).
    #[serde(default, alias = "epsdiluted")]
    pub eps_diluted: Option<f64>,
}

impl AnnualRecord for IncomeStatement {
    fn calendar_year(&self) -> Option<i32> {
        self.calendar_year
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Balance sheet data from FMP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Filing date.
    #[serde(default)]
    pub date: Option<String>,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Calendar year of the report.
    #[serde(default, deserialize_with = "deserialize_calendar_year")]
    pub calendar_year: Option<i32>,
    /// Reporting period.
    #[serde(default)]
    pub period: Option<String>,
    /// Total assets.
    #[serde(default)]
    pub total_assets: Option<f64>,
    /// Total current assets.
    #[serde(default)]
    pub total_current_assets: Option<f64>,
    /// Cash and cash equivalents.
    #[serde(default)]
    pub cash_and_cash_equivalents: Option<f64>,
    /// Total current liabilities.
    #[serde(default)]
    pub total_current_liabilities: Option<f64>,
    /// Total debt.
    #[serde(default)]
    pub total_debt: Option<f64>,
    /// Total stockholders' equity.
    #[serde(default)]
    pub total_stockholders_equity: Option<f64>,
    /// Total equity (including non-controlling interests).
    #[serde(default)]
    pub total_equity: Option<f64>,
}

impl BalanceSheet {
    /// Shareholders' equity, preferring the stockholders' figure over total
    /// equity (which includes non-controlling interests).
    #[must_use]
    pub fn shareholders_equity(&self) -> Option<f64> {
        self.total_stockholders_equity.or(self.total_equity)
    }
}

impl AnnualRecord for BalanceSheet {
    fn calendar_year(&self) -> Option<i32> {
        self.calendar_year
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// Cash flow statement data from FMP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    /// Filing date.
    #[serde(default)]
    pub date: Option<String>,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Calendar year of the report.
    #[serde(default, deserialize_with = "deserialize_calendar_year")]
    pub calendar_year: Option<i32>,
    /// Reporting period.
    #[serde(default)]
    pub period: Option<String>,
    /// Net income.
    #[serde(default)]
    pub net_income: Option<f64>,
    /// Operating cash flow.
    #[serde(default)]
    pub operating_cash_flow: Option<f64>,
    /// Free cash flow.
    #[serde(default)]
    pub free_cash_flow: Option<f64>,
    /// Net cash used for investing activities (the provider misspells the key).
    #[serde(default)]
    pub net_cash_used_for_investing_activites: Option<f64>,
    /// Net cash used or provided by financing activities.
    #[serde(default)]
    pub net_cash_used_provided_by_financing_activities: Option<f64>,
    /// Net change in cash.
    #[serde(default)]
    pub net_change_in_cash: Option<f64>,
}

impl AnnualRecord for CashFlowStatement {
    fn calendar_year(&self) -> Option<i32> {
        self.calendar_year
    }

    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }
}

/// The three annual statement series loaded for one ticker.
///
/// Series keep the order the provider sent; nothing here sorts them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementSet {
    /// Normalized ticker symbol.
    pub ticker: String,
    /// Income statements.
    pub income: Vec<IncomeStatement>,
    /// Cash flow statements.
    pub cash_flow: Vec<CashFlowStatement>,
    /// Balance sheets.
    pub balance_sheet: Vec<BalanceSheet>,
}

impl StatementSet {
    /// Whether all three series are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.cash_flow.is_empty() && self.balance_sheet.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_from_json() {
        let json = r#"{
            "date": "2023-09-30",
            "symbol": "AAPL",
            "calendarYear": "2023",
            "period": "FY",
            "revenue": 383285000000,
            "netIncome": 96995000000,
            "epsdiluted": 6.13,
            "eps": 6.16,
            "grossProfit": null
        }"#;
        let income: IncomeStatement = serde_json::from_str(json).unwrap();
        assert_eq!(income.calendar_year, Some(2023));
        assert_eq!(income.revenue, Some(383_285_000_000.0));
        assert_eq!(income.eps_diluted, Some(6.13));
        assert_eq!(income.gross_profit, None);
        assert_eq!(income.operating_income, None);
    }

    #[test]
    fn test_numeric_calendar_year() {
        let sheet: BalanceSheet =
            serde_json::from_str(r#"{"calendarYear": 2021, "totalDebt": 10}"#).unwrap();
        assert_eq!(sheet.fiscal_year(), Some(2021));
        assert_eq!(sheet.total_debt, Some(10.0));
    }

    #[test]
    fn test_fiscal_year_falls_back_to_date() {
        let cash: CashFlowStatement =
            serde_json::from_str(r#"{"date": "2019-12-31", "freeCashFlow": -4}"#).unwrap();
        assert_eq!(cash.calendar_year, None);
        assert_eq!(cash.fiscal_year(), Some(2019));
    }

    #[test]
    fn test_fiscal_year_missing() {
        let cash: CashFlowStatement = serde_json::from_str(r#"{"date": "garbage"}"#).unwrap();
        assert_eq!(cash.fiscal_year(), None);

        let income: IncomeStatement =
            serde_json::from_str(r#"{"calendarYear": "n/a"}"#).unwrap();
        assert_eq!(income.fiscal_year(), None);
    }

    #[test]
    fn test_cash_flow_provider_keys() {
        let json = r#"{
            "calendarYear": "2022",
            "netCashUsedForInvestingActivites": -22354000000,
            "netCashUsedProvidedByFinancingActivities": -110749000000,
            "netChangeInCash": -10952000000
        }"#;
        let cash: CashFlowStatement = serde_json::from_str(json).unwrap();
        assert_eq!(cash.net_cash_used_for_investing_activites, Some(-22_354_000_000.0));
        assert_eq!(
            cash.net_cash_used_provided_by_financing_activities,
            Some(-110_749_000_000.0)
        );
        assert_eq!(cash.net_change_in_cash, Some(-10_952_000_000.0));
    }

    #[test]
    fn test_shareholders_equity_fallback() {
        let mut sheet = BalanceSheet {
            total_equity: Some(300.0),
            ..Default::default()
        };
        assert_eq!(sheet.shareholders_equity(), Some(300.0));

        sheet.total_stockholders_equity = Some(250.0);
        assert_eq!(sheet.shareholders_equity(), Some(250.0));
    }

    #[test]
    fn test_statement_file_names() {
        assert_eq!(StatementKind::Income.file_name(), "income_statement_annual.json");
        assert_eq!(
            StatementKind::CashFlow.file_name(),
            "cash_flow_statement_annual.json"
        );
        assert_eq!(
            StatementKind::BalanceSheet.file_name(),
            "balance_sheet_statement_annual.json"
        );
        assert_eq!(StatementKind::CashFlow.to_string(), "cash flow statement");
    }

    #[test]
    fn test_parsed_date() {
        let income = IncomeStatement {
            date: Some("2024-01-15".to_string()),
            ..Default::default()
        };
        let date = income.parsed_date().unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
    }
}
