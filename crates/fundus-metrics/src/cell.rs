//! Table cells.

use crate::highlight::{HighlightCategory, Polarity, Sign, classify};
use serde::{Deserialize, Serialize};

/// One display cell of a statement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    /// Text without styling.
    Plain {
        /// Display text.
        text: String,
    },
    /// Text styled by the sign and category of its raw value.
    Highlighted {
        /// Display text.
        text: String,
        /// Category polarity.
        polarity: Polarity,
        /// Sign of the raw value.
        sign: Sign,
    },
}

impl Cell {
    /// A plain cell.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    /// A highlighted cell for `raw` in `category`.
    ///
    /// Falls back to a plain cell when `raw` is missing or not finite, so a
    /// missing figure is never styled.
    #[must_use]
    pub fn highlighted(
        text: impl Into<String>,
        raw: Option<f64>,
        category: HighlightCategory,
    ) -> Self {
        match raw.filter(|v| v.is_finite()) {
            Some(value) => Self::Highlighted {
                text: text.into(),
                polarity: classify(value, category),
                sign: Sign::of(value),
            },
            None => Self::plain(text),
        }
    }

    /// Display text of the cell.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Plain { text } | Self::Highlighted { text, .. } => text,
        }
    }

    /// Polarity of the cell; plain cells are neutral.
    #[must_use]
    pub const fn polarity(&self) -> Polarity {
        match self {
            Self::Plain { .. } => Polarity::Neutral,
            Self::Highlighted { polarity, .. } => *polarity,
        }
    }
}
