//! Statement row classification and field extraction.

mod credit;
mod deposit;
mod detect;
mod marker;
pub mod rules;

pub use credit::CreditCardExtractor;
pub use deposit::DepositAccountExtractor;
pub use detect::{Detection, DetectionRule, StatementDetector};
pub use marker::{FontMarker, RowMarker};

use tracing::trace;

use crate::error::SkipReason;
use crate::layout::{Fragment, PageRows, Row};
use crate::models::statement::Transaction;

/// Classifier and field extractor for one statement family.
pub trait StatementExtractor {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Turn one row into a transaction, or say why it is not one.
    fn extract_row(&self, row: &Row) -> Result<Transaction, SkipReason>;

    /// Extract transactions from every page, top to bottom.
    ///
    /// Rows that do not yield a transaction are dropped; at most one
    /// transaction comes from each row.
    fn extract(&self, pages: &[PageRows]) -> Vec<Transaction> {
        let mut transactions = Vec::new();

        for page in pages {
            for row in &page.rows {
                match self.extract_row(row) {
                    Ok(txn) => transactions.push(txn),
                    Err(reason) => {
                        trace!("{}: page {} row y={} skipped: {}", self.name(), page.page, row.y, reason)
                    }
                }
            }
        }

        transactions
    }
}

/// Join fragment text with single spaces and trim the result.
fn join_description(blocks: &[&Fragment]) -> String {
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
pub(crate) mod test_rows {
    use crate::layout::{LayoutDocument, LayoutLine, LayoutPage, PageRows, Row, group_rows};

    /// Build a single row from `(text, font)` cells laid out left to right.
    pub fn row(cells: &[(&str, &str)]) -> Row {
        page(500.0, cells).rows.remove(0)
    }

    /// Build a one-row page at vertical coordinate `y`.
    pub fn page(y: f64, cells: &[(&str, &str)]) -> PageRows {
        let mut line = LayoutLine::at(y);
        for (i, (text, font)) in cells.iter().enumerate() {
            let x = 50.0 + 100.0 * i as f64;
            line = line.with_text(x, x + 80.0, font, text);
        }
        let doc = LayoutDocument {
            pages: vec![LayoutPage::new(1).with_line(line)],
            ..Default::default()
        };
        group_rows(&doc).remove(0)
    }
}
