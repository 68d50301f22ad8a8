//! Year alignment across statement series.
//!
//! Series are joined strictly on [`AnnualRecord::fiscal_year`]; position in
//! the input never matters, so series with gaps or different lengths line up
//! correctly.

use fundus_fmp::{AnnualRecord, BalanceSheet, CashFlowStatement, IncomeStatement, StatementSet};
use std::collections::BTreeMap;

/// Records of all statement types for one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearRow<'a> {
    /// Calendar year.
    pub year: i32,
    /// Income statement for the year, if present.
    pub income: Option<&'a IncomeStatement>,
    /// Cash flow statement for the year, if present.
    pub cash_flow: Option<&'a CashFlowStatement>,
    /// Balance sheet for the year, if present.
    pub balance_sheet: Option<&'a BalanceSheet>,
}

impl YearRow<'_> {
    const fn empty(year: i32) -> Self {
        Self {
            year,
            income: None,
            cash_flow: None,
            balance_sheet: None,
        }
    }
}

/// Union of years across series, ascending, with per-statement records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedSeries<'a> {
    rows: Vec<YearRow<'a>>,
}

impl<'a> AlignedSeries<'a> {
    /// Rows in ascending year order, for chart x-axes.
    #[must_use]
    pub fn ascending(&self) -> &[YearRow<'a>] {
        &self.rows
    }

    /// Rows latest first, for tables.
    ///
    /// This is the ascending sequence reversed, so both views always agree.
    pub fn descending(&self) -> impl DoubleEndedIterator<Item = &YearRow<'a>> + ExactSizeIterator {
        self.rows.iter().rev()
    }

    /// Years in ascending order.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.year).collect()
    }

    /// Row for `year`, if any series reports it.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<&YearRow<'a>> {
        self.rows
            .binary_search_by_key(&year, |r| r.year)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Latest year row.
    #[must_use]
    pub fn latest(&self) -> Option<&YearRow<'a>> {
        self.rows.last()
    }

    /// Number of distinct years.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no series had a usable year.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Insert each record under its year, keeping the first record seen per year.
fn join<'a, T, F>(rows: &mut BTreeMap<i32, YearRow<'a>>, series: &'a [T], mut slot: F)
where
    T: AnnualRecord,
    F: for<'r> FnMut(&'r mut YearRow<'a>) -> &'r mut Option<&'a T>,
{
    for record in series {
        let Some(year) = record.fiscal_year() else {
            continue;
        };
        let row = rows.entry(year).or_insert_with(|| YearRow::empty(year));
        let entry = slot(row);
        if entry.is_none() {
            *entry = Some(record);
        }
    }
}

/// Align three statement series by year.
///
/// Pass an empty slice for a series that should not take part.
#[must_use]
pub fn align<'a>(
    income: &'a [IncomeStatement],
    cash_flow: &'a [CashFlowStatement],
    balance_sheet: &'a [BalanceSheet],
) -> AlignedSeries<'a> {
    let mut rows = BTreeMap::new();
    join(&mut rows, income, |r| &mut r.income);
    join(&mut rows, cash_flow, |r| &mut r.cash_flow);
    join(&mut rows, balance_sheet, |r| &mut r.balance_sheet);

    AlignedSeries {
        rows: rows.into_values().collect(),
    }
}

/// Align all series of a [`StatementSet`].
#[must_use]
pub fn align_set(set: &StatementSet) -> AlignedSeries<'_> {
    align(&set.income, &set.cash_flow, &set.balance_sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(year: i32, revenue: f64) -> IncomeStatement {
        IncomeStatement {
            calendar_year: Some(year),
            revenue: Some(revenue),
            ..Default::default()
        }
    }

    fn cash(year: i32, fcf: f64) -> CashFlowStatement {
        CashFlowStatement {
            calendar_year: Some(year),
            free_cash_flow: Some(fcf),
            ..Default::default()
        }
    }

    #[test]
    fn test_gap_is_missing_not_shifted() {
        let inc = vec![income(2020, 1.0), income(2021, 2.0), income(2022, 3.0)];
        let cf = vec![cash(2021, 21.0), cash(2022, 22.0)];
        let aligned = align(&inc, &cf, &[]);

        assert_eq!(aligned.years(), vec![2020, 2021, 2022]);
        let first = aligned.get(2020).unwrap();
        assert_eq!(first.income.unwrap().revenue, Some(1.0));
        assert!(first.cash_flow.is_none());
        assert_eq!(aligned.get(2021).unwrap().cash_flow.unwrap().free_cash_flow, Some(21.0));
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let inc = vec![income(2022, 3.0), income(2020, 1.0), income(2021, 2.0)];
        let cf = vec![cash(2022, 22.0), cash(2019, 19.0)];
        let aligned = align(&inc, &cf, &[]);

        assert_eq!(aligned.years(), vec![2019, 2020, 2021, 2022]);
        let desc: Vec<i32> = aligned.descending().map(|r| r.year).collect();
        assert_eq!(desc, vec![2022, 2021, 2020, 2019]);
        assert_eq!(aligned.latest().unwrap().year, 2022);
        assert!(aligned.get(2019).unwrap().income.is_none());
    }

    #[test]
    fn test_duplicate_year_keeps_first() {
        let inc = vec![income(2021, 1.0), income(2021, 99.0)];
        let aligned = align(&inc, &[], &[]);
        assert_eq!(aligned.len(), 1);
        assert_eq!(aligned.ascending()[0].income.unwrap().revenue, Some(1.0));
    }

    #[test]
    fn test_records_without_year_are_skipped() {
        let inc = vec![IncomeStatement::default(), income(2020, 1.0)];
        let aligned = align(&inc, &[], &[]);
        assert_eq!(aligned.years(), vec![2020]);
    }

    #[test]
    fn test_empty_series() {
        let aligned = align(&[], &[], &[]);
        assert!(aligned.is_empty());
        assert!(aligned.latest().is_none());
        assert_eq!(aligned.descending().len(), 0);
    }

    #[test]
    fn test_align_set() {
        let set = StatementSet {
            ticker: "ACME".to_string(),
            income: vec![income(2023, 5.0)],
            cash_flow: vec![],
            balance_sheet: vec![BalanceSheet {
                calendar_year: Some(2023),
                total_debt: Some(4.0),
                ..Default::default()
            }],
        };
        let aligned = align_set(&set);
        let row = aligned.latest().unwrap();
        assert_eq!(row.year, 2023);
        assert_eq!(row.balance_sheet.unwrap().total_debt, Some(4.0));
        assert!(row.cash_flow.is_none());
    }
}
