//! Configuration structures for statement parsing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Main configuration for the rbcx pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RbcxConfig {
    /// Credit-card row classification.
    pub credit: CreditConfig,

    /// External document converter.
    pub converter: ConverterConfig,

    /// Date parsing.
    pub dates: DateConfig,
}

/// Credit-card statement configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditConfig {
    /// Font label that marks a transaction row.
    pub transaction_font: String,
}

impl Default for CreditConfig {
    fn default() -> Self {
        Self {
            transaction_font: "MetaBoldLF-Roman".to_string(),
        }
    }
}

/// External converter command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Program that writes layout XML for a document to stdout.
    pub program: String,

    /// Arguments placed before the document path.
    pub args: Vec<String>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: "pdf2txt.py".to_string(),
            args: vec!["-t".to_string(), "xml".to_string()],
        }
    }
}

/// Date parsing configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateConfig {
    /// Date that supplies missing year/month fields (default: today).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

impl RbcxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
