//! Statement data models: transactions and the parse result envelope.

use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ConvertError, RbcxError};

/// Bank identifier reported in every successful result.
pub const BANK_NAME: &str = "RBC (Royal Bank of Canada)";

/// Parser identifier reported in result metadata.
pub const PARSER_ID: &str = "rbc-statement-converter";

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// Money in (deposit, refund, payment to the card).
    Credit,
    /// Money out (purchase, withdrawal).
    Debit,
}

impl TransactionType {
    /// Lowercase name as written in results.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
        }
    }
}

/// A single extracted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Posting date.
    pub date: NaiveDate,

    /// Description text between the date and amount columns.
    pub description: String,

    /// Non-negative magnitude.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Direction.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Statement family detected from the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementType {
    /// Visa / credit card statement.
    CreditCard,
    /// Chequing account statement.
    Chequing,
    /// Savings account statement.
    Savings,
    /// Deposit account statement without a chequing or savings marker.
    ChequingOrSavings,
}

impl StatementType {
    /// Tag as written in results.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatementType::CreditCard => "credit_card",
            StatementType::Chequing => "chequing",
            StatementType::Savings => "savings",
            StatementType::ChequingOrSavings => "chequing_or_savings",
        }
    }
}

impl std::fmt::Display for StatementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata attached to a successful result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Number of transactions extracted.
    pub total_transactions: usize,
    /// Parser identifier.
    pub parser: String,
}

/// A successfully parsed statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementReport {
    /// Bank identifier.
    pub bank: String,
    /// Detected statement family.
    pub statement_type: StatementType,
    /// Transactions in page order, top to bottom.
    pub transactions: Vec<Transaction>,
    /// Extraction metadata.
    pub metadata: ReportMetadata,
}

impl StatementReport {
    /// Build a report for the given transactions.
    pub fn new(statement_type: StatementType, transactions: Vec<Transaction>) -> Self {
        Self {
            bank: BANK_NAME.to_string(),
            statement_type,
            metadata: ReportMetadata {
                total_transactions: transactions.len(),
                parser: PARSER_ID.to_string(),
            },
            transactions,
        }
    }

    /// Totals over the report's transactions.
    pub fn summary(&self) -> StatementSummary {
        StatementSummary::from_transactions(&self.transactions)
    }
}

/// Coarse failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The input document does not exist.
    FileNotFound,
    /// Anything else: converter missing or failing, malformed output, extraction.
    ConversionOrParseError,
}

/// A failed parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    /// Failure category.
    #[serde(skip)]
    pub kind: FailureKind,

    /// Human-readable message.
    pub error: String,

    /// Type name of the underlying error, for diagnostics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

/// Outcome of parsing one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult {
    /// Transactions were extracted.
    Success(StatementReport),
    /// The document could not be processed.
    Failure(ParseFailure),
}

impl ParseResult {
    /// Translate an error into a failure result for the document at `path`.
    pub fn from_error(path: &Path, error: &RbcxError) -> Self {
        let failure = match error {
            RbcxError::Convert(ConvertError::InputNotFound(_)) => ParseFailure {
                kind: FailureKind::FileNotFound,
                error: format!("PDF file not found: {}", path.display()),
                error_type: None,
            },
            other => ParseFailure {
                kind: FailureKind::ConversionOrParseError,
                error: format!("Failed to parse PDF: {}", other),
                error_type: Some(other.type_name().to_string()),
            },
        };
        ParseResult::Failure(failure)
    }

    /// Whether the parse succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    /// The report, if the parse succeeded.
    pub fn report(&self) -> Option<&StatementReport> {
        match self {
            ParseResult::Success(report) => Some(report),
            ParseResult::Failure(_) => None,
        }
    }

    /// The failure, if the parse failed.
    pub fn failure(&self) -> Option<&ParseFailure> {
        match self {
            ParseResult::Success(_) => None,
            ParseResult::Failure(failure) => Some(failure),
        }
    }
}

impl Serialize for ParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            success: bool,
            #[serde(flatten)]
            body: &'a T,
        }

        match self {
            ParseResult::Success(report) => Envelope {
                success: true,
                body: report,
            }
            .serialize(serializer),
            ParseResult::Failure(failure) => Envelope {
                success: false,
                body: failure,
            }
            .serialize(serializer),
        }
    }
}

/// Credit/debit totals over a set of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSummary {
    /// Sum of credit amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_credits: Decimal,
    /// Sum of debit amounts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_debits: Decimal,
    /// Credits minus debits.
    #[serde(with = "rust_decimal::serde::float")]
    pub net: Decimal,
    /// Number of credit transactions.
    pub credit_count: usize,
    /// Number of debit transactions.
    pub debit_count: usize,
}

impl StatementSummary {
    /// Total the given transactions.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut summary = Self::default();

        for txn in transactions {
            match txn.kind {
                TransactionType::Credit => {
                    summary.total_credits += txn.amount;
                    summary.credit_count += 1;
                }
                TransactionType::Debit => {
                    summary.total_debits += txn.amount;
                    summary.debit_count += 1;
                }
            }
        }

        summary.net = summary.total_credits - summary.total_debits;
        summary
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::path::PathBuf;
    use std::str::FromStr;

    use super::*;

    fn txn(day: u32, description: &str, amount: &str, kind: TransactionType) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            description: description.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
            kind,
        }
    }

    #[test]
    fn test_success_serialization() {
        let report = StatementReport::new(
            StatementType::CreditCard,
            vec![txn(2, "COFFEE SHOP", "4.50", TransactionType::Debit)],
        );
        let value = serde_json::to_value(ParseResult::Success(report)).unwrap();

        assert_eq!(
            value,
            json!({
                "success": true,
                "bank": "RBC (Royal Bank of Canada)",
                "statement_type": "credit_card",
                "transactions": [
                    {"date": "2024-03-02", "description": "COFFEE SHOP", "amount": 4.5, "type": "debit"}
                ],
                "metadata": {"total_transactions": 1, "parser": "rbc-statement-converter"}
            })
        );
    }

    #[test]
    fn test_not_found_failure_has_no_error_type() {
        let path = PathBuf::from("/nope/statement.pdf");
        let err: RbcxError = ConvertError::InputNotFound(path.clone()).into();
        let result = ParseResult::from_error(&path, &err);

        assert_eq!(result.failure().unwrap().kind, FailureKind::FileNotFound);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"success": false, "error": "PDF file not found: /nope/statement.pdf"})
        );
    }

    #[test]
    fn test_generic_failure_carries_type_name() {
        let path = PathBuf::from("statement.pdf");
        let err: RbcxError = ConvertError::ConversionFailed("bad xml".into()).into();
        let result = ParseResult::from_error(&path, &err);

        assert!(!result.is_success());
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "success": false,
                "error": "Failed to parse PDF: conversion failed: bad xml",
                "error_type": "ConversionFailed"
            })
        );
    }

    #[test]
    fn test_summary_totals() {
        let summary = StatementSummary::from_transactions(&[
            txn(1, "PAYROLL", "1000.00", TransactionType::Credit),
            txn(2, "GROCERY", "89.23", TransactionType::Debit),
            txn(3, "GAS", "45.00", TransactionType::Debit),
        ]);

        assert_eq!(summary.total_credits, Decimal::from_str("1000.00").unwrap());
        assert_eq!(summary.total_debits, Decimal::from_str("134.23").unwrap());
        assert_eq!(summary.net, Decimal::from_str("865.77").unwrap());
        assert_eq!(summary.credit_count, 1);
        assert_eq!(summary.debit_count, 2);
    }
}
