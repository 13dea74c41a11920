//! Transaction-row markers for credit-card statements.

use crate::layout::Row;

/// Decides whether a row is a candidate transaction line.
pub trait RowMarker {
    /// Whether `row` carries the transaction-line signal.
    fn is_transaction_row(&self, row: &Row) -> bool;
}

/// Marks rows in which at least one fragment used a given font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontMarker {
    font: String,
}

impl FontMarker {
    /// Match fragments rendered in exactly `font`.
    pub fn new(font: impl Into<String>) -> Self {
        Self { font: font.into() }
    }

    /// The font label being matched.
    pub fn font(&self) -> &str {
        &self.font
    }
}

impl RowMarker for FontMarker {
    fn is_transaction_row(&self, row: &Row) -> bool {
        row.has_font(&self.font)
    }
}

impl<F> RowMarker for F
where
    F: Fn(&Row) -> bool,
{
    fn is_transaction_row(&self, row: &Row) -> bool {
        self(row)
    }
}
