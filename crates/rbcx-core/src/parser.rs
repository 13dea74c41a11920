//! End-to-end statement parsing: convert, detect, extract, assemble.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::convert::{DefaultConverter, DocumentConverter};
use crate::error::{RbcxError, Result};
use crate::layout::{LayoutDocument, group_rows};
use crate::models::config::RbcxConfig;
use crate::models::statement::{ParseResult, StatementReport, StatementType, Transaction};
use crate::statement::StatementDetector;
use crate::statement::rules::DateParser;

/// Statement parser over an injected document converter.
pub struct StatementParser<C> {
    converter: C,
    config: RbcxConfig,
}

impl<C: DocumentConverter> StatementParser<C> {
    /// Create a parser with default configuration.
    pub fn new(converter: C) -> Self {
        Self {
            converter,
            config: RbcxConfig::default(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: RbcxConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RbcxConfig {
        &self.config
    }

    /// Parse the statement at `path`. Never panics; failures become a
    /// [`ParseResult::Failure`].
    pub fn parse(&self, path: impl AsRef<Path>) -> ParseResult {
        let path = path.as_ref();
        let start = Instant::now();

        match self.try_parse(path) {
            Ok(report) => {
                info!(
                    "Parsed {} ({}): {} transactions in {}ms",
                    path.display(),
                    report.statement_type,
                    report.transactions.len(),
                    start.elapsed().as_millis()
                );
                ParseResult::Success(report)
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", path.display(), e);
                ParseResult::from_error(path, &e)
            }
        }
    }

    /// Parse the statement at `path`, returning the error instead of a
    /// failure result.
    pub fn try_parse(&self, path: &Path) -> Result<StatementReport> {
        let document = self.converter.convert(path)?;
        let (statement_type, transactions) = self.extract(&document)?;
        Ok(StatementReport::new(statement_type, transactions))
    }

    /// Detect the statement family of a converted document and extract its
    /// transactions.
    pub fn extract(&self, document: &LayoutDocument) -> Result<(StatementType, Vec<Transaction>)> {
        let dates = self
            .config
            .dates
            .reference_date
            .map(DateParser::new)
            .unwrap_or_else(DateParser::today);
        let detector = StatementDetector::rbc(&self.config, dates);

        catch_unwind(AssertUnwindSafe(|| {
            let detection = detector.detect(&document.full_text());
            let pages = group_rows(document);
            let candidates: usize = pages.iter().map(|p| p.rows.len()).sum();
            let transactions = detection.extractor.extract(&pages);

            debug!(
                "Kept {} of {} candidate rows",
                transactions.len(),
                candidates
            );
            (detection.statement_type, transactions)
        }))
        .map_err(|payload| RbcxError::Extraction(panic_message(payload.as_ref())))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unexpected panic during extraction".to_string()
    }
}

/// Parse the statement at `path` with the default converter and configuration.
pub fn parse_statement(path: impl AsRef<Path>) -> ParseResult {
    StatementParser::new(DefaultConverter::default()).parse(path)
}
