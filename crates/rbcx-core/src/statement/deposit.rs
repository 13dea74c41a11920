//! Chequing and savings account rows.
//!
//! ```text
//!   Date     Description              Withdrawals  Deposits   Balance
//!   15 Mar   PAYROLL DEPOSIT                       2,500.00   3,100.00
//! ```
//!
//! The last column is the running balance and is never read.

use rust_decimal::Decimal;

use super::rules::{DateParser, parse_amount};
use super::{StatementExtractor, join_description};
use crate::error::SkipReason;
use crate::layout::Row;
use crate::models::statement::{Transaction, TransactionType};

/// Extractor for chequing and savings statements.
#[derive(Debug, Clone, Copy)]
pub struct DepositAccountExtractor {
    dates: DateParser,
}

impl DepositAccountExtractor {
    pub fn new(dates: DateParser) -> Self {
        Self { dates }
    }
}

impl StatementExtractor for DepositAccountExtractor {
    fn name(&self) -> &'static str {
        "deposit_account"
    }

    fn extract_row(&self, row: &Row) -> Result<Transaction, SkipReason> {
        let blocks = row.blocks();
        if blocks.len() < 2 {
            return Err(SkipReason::TooFewFragments {
                found: blocks.len(),
                needed: 2,
            });
        }

        let date_text = blocks[0].text.trim();
        let date = self
            .dates
            .parse(date_text)
            .ok_or_else(|| SkipReason::InvalidDate(date_text.to_string()))?;

        // Needs an amount column plus the trailing balance
        if blocks.len() < 3 {
            return Err(SkipReason::TooFewFragments {
                found: blocks.len(),
                needed: 3,
            });
        }

        let amount_text = blocks[blocks.len() - 2].text.trim();
        let amount =
            parse_amount(amount_text).ok_or_else(|| SkipReason::InvalidAmount(amount_text.to_string()))?;

        let kind = if amount < Decimal::ZERO {
            TransactionType::Debit
        } else {
            TransactionType::Credit
        };

        Ok(Transaction {
            date,
            description: join_description(&blocks[1..blocks.len() - 2]),
            amount: amount.abs(),
            kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    use super::*;
    use crate::statement::test_rows::{page, row};

    fn extractor() -> DepositAccountExtractor {
        DepositAccountExtractor::new(DateParser::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()))
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deposit_row() {
        let txn = extractor()
            .extract_row(&row(&[
                ("03/15", ""),
                ("PAYROLL DEPOSIT", ""),
                ("2,500.00", ""),
                ("3,100.00", ""),
            ]))
            .unwrap();

        assert_eq!(
            txn,
            Transaction {
                date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
                description: "PAYROLL DEPOSIT".to_string(),
                amount: dec("2500.00"),
                kind: TransactionType::Credit,
            }
        );
    }

    #[test]
    fn test_negative_amount_is_debit_and_balance_ignored() {
        let txn = extractor()
            .extract_row(&row(&[
                ("15 Mar", "MetaBookLF-Roman"),
                ("ATM", ""),
                ("WITHDRAWAL", ""),
                ("-60.00", ""),
                ("not a number", ""),
            ]))
            .unwrap();

        assert_eq!(txn.kind, TransactionType::Debit);
        assert_eq!(txn.amount, dec("60.00"));
        assert_eq!(txn.description, "ATM WITHDRAWAL");
    }

    #[test]
    fn test_three_fragment_row_has_empty_description() {
        let txn = extractor()
            .extract_row(&row(&[("03/15", ""), ("0", ""), ("10.00", "")]))
            .unwrap();

        assert_eq!(txn.description, "");
        assert_eq!(txn.amount, Decimal::ZERO);
        assert_eq!(txn.kind, TransactionType::Credit);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        assert_eq!(
            extractor().extract_row(&row(&[("03/15", ""), ("500.00", "")])),
            Err(SkipReason::TooFewFragments {
                found: 2,
                needed: 3
            })
        );
        assert_eq!(
            extractor().extract_row(&row(&[("03/15", "")])),
            Err(SkipReason::TooFewFragments {
                found: 1,
                needed: 2
            })
        );
    }

    #[test]
    fn test_non_date_and_bad_amount_rows_are_skipped() {
        assert_eq!(
            extractor().extract_row(&row(&[("Opening balance", ""), ("x", ""), ("100.00", "")])),
            Err(SkipReason::InvalidDate("Opening balance".to_string()))
        );
        assert_eq!(
            extractor().extract_row(&row(&[("03/15", ""), ("FEE", ""), ("n/a", ""), ("1.00", "")])),
            Err(SkipReason::InvalidAmount("n/a".to_string()))
        );
    }

    #[test]
    fn test_extract_drops_unusable_rows() {
        let pages = vec![
            page(700.0, &[("Date", ""), ("Description", ""), ("Deposits", ""), ("Balance", "")]),
            page(600.0, &[("03/15", ""), ("PAYROLL DEPOSIT", ""), ("2,500.00", ""), ("3,100.00", "")]),
            page(500.0, &[("03/16", ""), ("500.00", "")]),
            page(400.0, &[("03/17", ""), ("GROCERY", ""), ("-45.10", ""), ("3,054.90", "")]),
        ];

        let txns = extractor().extract(&pages);

        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].description, "PAYROLL DEPOSIT");
        assert_eq!(txns[1].kind, TransactionType::Debit);
        assert_eq!(txns[1].amount, dec("45.10"));
    }
}
