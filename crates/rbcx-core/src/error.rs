//! Error types for the rbcx-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the rbcx library.
#[derive(Error, Debug)]
pub enum RbcxError {
    /// Document conversion error.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Transaction extraction error.
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The rendered result could not be written to its destination.
    #[error("output error: {0}")]
    Output(String),
}

impl RbcxError {
    /// Short type name of the failure, reported as `error_type` in results.
    pub fn type_name(&self) -> &'static str {
        match self {
            RbcxError::Convert(err) => err.type_name(),
            RbcxError::Extraction(_) => "ExtractionError",
            RbcxError::Config(_) => "ConfigError",
            RbcxError::Output(_) => "OutputError",
        }
    }
}

/// Errors raised while turning a document into a positioned-text tree.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input path does not resolve to a readable document.
    #[error("PDF file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The conversion capability is missing or cannot start.
    #[error("converter unavailable: {0}")]
    ConverterUnavailable(String),

    /// The document could not be turned into a layout tree.
    #[error("conversion failed: {0}")]
    ConversionFailed(String),

    /// I/O error while reading the document or converter output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Short type name of the failure.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConvertError::InputNotFound(_) => "InputNotFound",
            ConvertError::ConverterUnavailable(_) => "ConverterUnavailable",
            ConvertError::ConversionFailed(_) => "ConversionFailed",
            ConvertError::Io(_) => "IoError",
        }
    }
}

/// Why a single row produced no transaction.
///
/// These never leave the extraction loop; the row is dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The classifier did not accept the row.
    #[error("not a transaction row")]
    NotTransactionRow,

    /// Fewer fragments than the field mapping needs.
    #[error("too few fragments: {found} < {needed}")]
    TooFewFragments { found: usize, needed: usize },

    /// A date field did not parse.
    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    /// The amount field did not parse as a decimal.
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
}

/// Result type for the rbcx library.
pub type Result<T> = std::result::Result<T, RbcxError>;
