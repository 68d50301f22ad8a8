//! Highlight classification of statement values.
//!
//! Renderers compose a formatted value with its polarity to build a styled
//! cell; the classifier knows nothing about formatting.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Visual polarity of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Favourable.
    #[display("positive")]
    Positive,
    /// Unfavourable.
    #[display("negative")]
    Negative,
    /// Not highlighted.
    #[display("neutral")]
    Neutral,
}

impl Polarity {
    /// CSS class used by the HTML table renderer, if any.
    #[must_use]
    pub const fn css_class(&self) -> Option<&'static str> {
        match self {
            Self::Positive => Some("highlight-positive"),
            Self::Negative => Some("highlight-negative"),
            Self::Neutral => None,
        }
    }
}

/// Sign of a raw value, independent of its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    /// Zero or above.
    #[display("non_negative")]
    NonNegative,
    /// Below zero.
    #[display("negative")]
    Negative,
}

impl Sign {
    /// Sign of `value`.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else {
            Self::NonNegative
        }
    }

    /// CSS class used by the HTML table renderer.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::NonNegative => "positive-value",
            Self::Negative => "negative-value",
        }
    }
}

/// Semantic category of a highlighted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HighlightCategory {
    /// Revenue.
    #[display("revenue")]
    Revenue,
    /// Net income.
    #[display("netIncome")]
    NetIncome,
    /// Total equity.
    #[display("totalEquity")]
    TotalEquity,
    /// Operating cash flow.
    #[display("operatingCashFlow")]
    OperatingCashFlow,
    /// Free cash flow.
    #[display("freeCashFlow")]
    FreeCashFlow,
    /// Total debt.
    #[display("totalDebt")]
    TotalDebt,
}

/// Error returned when parsing an unknown highlight tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown highlight category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for HighlightCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "revenue" => Ok(Self::Revenue),
            "netIncome" => Ok(Self::NetIncome),
            "totalEquity" => Ok(Self::TotalEquity),
            "operatingCashFlow" | "operatingCF" => Ok(Self::OperatingCashFlow),
            "freeCashFlow" | "freeCF" => Ok(Self::FreeCashFlow),
            "totalDebt" => Ok(Self::TotalDebt),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Classify `value` for highlighting.
///
/// - revenue: positive above zero, otherwise neutral
/// - net income, equity and cash flows: positive at or above zero, otherwise negative
/// - debt: negative above zero, otherwise neutral
///
/// NaN is always neutral.
#[must_use]
pub fn classify(value: f64, category: HighlightCategory) -> Polarity {
    if value.is_nan() {
        return Polarity::Neutral;
    }

    match category {
        HighlightCategory::Revenue if value > 0.0 => Polarity::Positive,
        HighlightCategory::Revenue => Polarity::Neutral,
        HighlightCategory::NetIncome
        | HighlightCategory::TotalEquity
        | HighlightCategory::OperatingCashFlow
        | HighlightCategory::FreeCashFlow => {
            if value >= 0.0 {
                Polarity::Positive
            } else {
                Polarity::Negative
            }
        }
        HighlightCategory::TotalDebt if value > 0.0 => Polarity::Negative,
        HighlightCategory::TotalDebt => Polarity::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, HighlightCategory::TotalDebt, Polarity::Neutral)]
    #[case(1.0, HighlightCategory::TotalDebt, Polarity::Negative)]
    #[case(-3.0, HighlightCategory::TotalDebt, Polarity::Neutral)]
    #[case(-1.0, HighlightCategory::NetIncome, Polarity::Negative)]
    #[case(0.0, HighlightCategory::NetIncome, Polarity::Positive)]
    #[case(5.0, HighlightCategory::Revenue, Polarity::Positive)]
    #[case(0.0, HighlightCategory::Revenue, Polarity::Neutral)]
    #[case(-5.0, HighlightCategory::Revenue, Polarity::Neutral)]
    #[case(-0.01, HighlightCategory::TotalEquity, Polarity::Negative)]
    #[case(0.0, HighlightCategory::OperatingCashFlow, Polarity::Positive)]
    #[case(-7.0, HighlightCategory::FreeCashFlow, Polarity::Negative)]
    fn test_classify(
        #[case] value: f64,
        #[case] category: HighlightCategory,
        #[case] expected: Polarity,
    ) {
        assert_eq!(classify(value, category), expected);
    }

    #[test]
    fn test_nan_is_neutral() {
        assert_eq!(classify(f64::NAN, HighlightCategory::NetIncome), Polarity::Neutral);
        assert_eq!(classify(f64::NAN, HighlightCategory::TotalDebt), Polarity::Neutral);
    }

    #[test]
    fn test_parse_category_tags() {
        assert_eq!(
            "operatingCF".parse::<HighlightCategory>(),
            Ok(HighlightCategory::OperatingCashFlow)
        );
        assert_eq!("freeCF".parse::<HighlightCategory>(), Ok(HighlightCategory::FreeCashFlow));
        assert_eq!("totalDebt".parse::<HighlightCategory>(), Ok(HighlightCategory::TotalDebt));
        assert_eq!(
            "ebitda".parse::<HighlightCategory>(),
            Err(UnknownCategory("ebitda".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for category in [
            HighlightCategory::Revenue,
            HighlightCategory::NetIncome,
            HighlightCategory::TotalEquity,
            HighlightCategory::OperatingCashFlow,
            HighlightCategory::FreeCashFlow,
            HighlightCategory::TotalDebt,
        ] {
            assert_eq!(category.to_string().parse::<HighlightCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_sign_and_css() {
        assert_eq!(Sign::of(0.0), Sign::NonNegative);
        assert_eq!(Sign::of(-2.0).css_class(), "negative-value");
        assert_eq!(Polarity::Positive.css_class(), Some("highlight-positive"));
        assert_eq!(Polarity::Neutral.css_class(), None);
        assert_eq!(Polarity::Negative.to_string(), "negative");
    }
}
