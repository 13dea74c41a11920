//! Statement family detection by keyword scan.

use tracing::debug;

use super::{CreditCardExtractor, DepositAccountExtractor, StatementExtractor};
use crate::models::config::RbcxConfig;
use crate::models::statement::StatementType;
use crate::statement::rules::DateParser;

type Predicate = Box<dyn Fn(&str) -> bool>;

/// One entry of the detection table.
pub struct DetectionRule {
    predicate: Predicate,
    statement_type: StatementType,
    extractor: Box<dyn StatementExtractor>,
}

impl DetectionRule {
    /// Create a rule from an arbitrary text predicate.
    pub fn new(
        predicate: impl Fn(&str) -> bool + 'static,
        statement_type: StatementType,
        extractor: impl StatementExtractor + 'static,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            statement_type,
            extractor: Box::new(extractor),
        }
    }

    /// Create a rule that matches when any keyword occurs in the text.
    ///
    /// Matching is a case-sensitive substring test.
    pub fn keywords(
        keywords: &[&str],
        statement_type: StatementType,
        extractor: impl StatementExtractor + 'static,
    ) -> Self {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        Self::new(
            move |text: &str| keywords.iter().any(|k| text.contains(k.as_str())),
            statement_type,
            extractor,
        )
    }

    /// Statement type assigned when this rule matches.
    pub fn statement_type(&self) -> StatementType {
        self.statement_type
    }
}

/// Outcome of detection: the type tag and the extractor to run.
pub struct Detection<'a> {
    pub statement_type: StatementType,
    pub extractor: &'a dyn StatementExtractor,
}

/// Ordered first-match-wins detection table with a fallback.
pub struct StatementDetector {
    rules: Vec<DetectionRule>,
    fallback: DetectionRule,
}

impl StatementDetector {
    /// Create a detector with no rules; every document gets `fallback`.
    pub fn new(fallback_type: StatementType, fallback: impl StatementExtractor + 'static) -> Self {
        Self {
            rules: Vec::new(),
            fallback: DetectionRule::new(|_: &str| true, fallback_type, fallback),
        }
    }

    /// Detection table for RBC statements.
    pub fn rbc(config: &RbcxConfig, dates: DateParser) -> Self {
        Self::new(
            StatementType::ChequingOrSavings,
            DepositAccountExtractor::new(dates),
        )
        .with_rule(DetectionRule::keywords(
            &["Visa", "CREDIT CARD"],
            StatementType::CreditCard,
            CreditCardExtractor::new(&config.credit.transaction_font, dates),
        ))
        .with_rule(DetectionRule::keywords(
            &["CHEQUING", "Chequing"],
            StatementType::Chequing,
            DepositAccountExtractor::new(dates),
        ))
        .with_rule(DetectionRule::keywords(
            &["SAVINGS", "Savings"],
            StatementType::Savings,
            DepositAccountExtractor::new(dates),
        ))
    }

    /// Append a rule after the existing ones.
    pub fn with_rule(mut self, rule: DetectionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Pick the first rule whose predicate accepts `text`.
    pub fn detect(&self, text: &str) -> Detection<'_> {
        let rule = self
            .rules
            .iter()
            .find(|rule| (rule.predicate)(text))
            .unwrap_or(&self.fallback);

        debug!(
            "Detected {} statement, using {} extractor",
            rule.statement_type,
            rule.extractor.name()
        );

        Detection {
            statement_type: rule.statement_type,
            extractor: rule.extractor.as_ref(),
        }
    }
}
