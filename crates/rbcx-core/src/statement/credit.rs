//! Credit-card (Visa) statement rows.
//!
//! Transaction lines look like:
//!
//! ```text
//!   TRANSACTION  POSTING   ACTIVITY DESCRIPTION              AMOUNT ($)
//!   MAR 01       MAR 02    COFFEE SHOP TORONTO ON                 4.50
//!   MAR 05       MAR 06    PAYMENT - THANK YOU                -500.00
//! ```
//!
//! Only lines printed in the bold transaction font are considered; headers
//! and summaries use other fonts.

use rust_decimal::Decimal;
use tracing::debug;

use super::marker::{FontMarker, RowMarker};
use super::rules::{DateParser, EXCHANGE_RATE, FOREIGN_CURRENCY, parse_amount};
use super::{StatementExtractor, join_description};
use crate::error::SkipReason;
use crate::layout::Row;
use crate::models::statement::{Transaction, TransactionType};

/// Minimum fragments in a credit-card transaction row.
const MIN_FRAGMENTS: usize = 3;

/// Extractor for credit-card statements.
pub struct CreditCardExtractor {
    marker: Box<dyn RowMarker>,
    dates: DateParser,
}

impl CreditCardExtractor {
    /// Create an extractor that accepts rows containing `transaction_font`.
    pub fn new(transaction_font: &str, dates: DateParser) -> Self {
        Self::with_marker(FontMarker::new(transaction_font), dates)
    }

    /// Create an extractor with a custom transaction-row marker.
    pub fn with_marker(marker: impl RowMarker + 'static, dates: DateParser) -> Self {
        Self {
            marker: Box::new(marker),
            dates,
        }
    }
}

impl StatementExtractor for CreditCardExtractor {
    fn name(&self) -> &'static str {
        "credit_card"
    }

    fn extract_row(&self, row: &Row) -> Result<Transaction, SkipReason> {
        if !self.marker.is_transaction_row(row) {
            return Err(SkipReason::NotTransactionRow);
        }

        let blocks = row.blocks();
        if blocks.len() < MIN_FRAGMENTS {
            return Err(SkipReason::TooFewFragments {
                found: blocks.len(),
                needed: MIN_FRAGMENTS,
            });
        }

        log_foreign_currency(row);

        let trans_text = blocks[0].text.trim();
        let post_text = blocks[1].text.trim();

        // Transaction date must parse even though only the posting date is kept
        self.dates
            .parse(trans_text)
            .ok_or_else(|| SkipReason::InvalidDate(trans_text.to_string()))?;
        let post_date = self
            .dates
            .parse(post_text)
            .ok_or_else(|| SkipReason::InvalidDate(post_text.to_string()))?;

        let amount_text = blocks[blocks.len() - 1].text.trim();
        let amount =
            parse_amount(amount_text).ok_or_else(|| SkipReason::InvalidAmount(amount_text.to_string()))?;

        let kind = if amount > Decimal::ZERO {
            TransactionType::Credit
        } else {
            TransactionType::Debit
        };

        Ok(Transaction {
            date: post_date,
            description: join_description(&blocks[2..blocks.len() - 1]),
            amount: amount.abs(),
            kind,
        })
    }
}

/// Foreign-currency detail is recognized for diagnostics only; it never
/// changes the extracted transaction.
fn log_foreign_currency(row: &Row) {
    for fragment in &row.fragments {
        if let Some(caps) = FOREIGN_CURRENCY.captures(&fragment.text) {
            debug!("Foreign currency detail at y={}: {} {}", row.y, &caps[1], &caps[2]);
        }
        if let Some(caps) = EXCHANGE_RATE.captures(&fragment.text) {
            debug!("Exchange rate detail at y={}: {}", row.y, &caps[1]);
        }
    }
}
