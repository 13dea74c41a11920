//! Core library for RBC bank statement parsing.
//!
//! This crate provides:
//! - Layout conversion (pdfminer-style XML, external converter program)
//! - Row grouping of positioned text fragments
//! - Statement type detection (credit card, chequing, savings)
//! - Transaction extraction for credit-card and deposit-account statements
//! - Result envelope and request-handler surface

pub mod convert;
pub mod error;
pub mod handler;
pub mod layout;
pub mod models;
pub mod parser;
pub mod statement;

pub use convert::{CommandConverter, DefaultConverter, DocumentConverter, XmlLayoutConverter};
pub use error::{ConvertError, RbcxError, Result, SkipReason};
pub use handler::{HandlerRequest, HandlerResponse, handler};
pub use layout::{Fragment, LayoutDocument, PageRows, Row, group_rows};
pub use models::config::RbcxConfig;
pub use models::statement::{
    ParseFailure, ParseResult, StatementReport, StatementSummary, StatementType, Transaction,
    TransactionType,
};
pub use parser::{StatementParser, parse_statement};
pub use statement::{
    CreditCardExtractor, DepositAccountExtractor, RowMarker, StatementDetector, StatementExtractor,
};
