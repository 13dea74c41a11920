//! External converter program (pdfminer's `pdf2txt.py -t xml` by default).

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use super::{DocumentConverter, ensure_document};
use super::xml::parse_layout_xml;
use crate::error::ConvertError;
use crate::layout::LayoutDocument;
use crate::models::config::ConverterConfig;

/// Runs a program that prints layout XML for a document on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
}

impl CommandConverter {
    /// Create a converter invoking `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument placed before the document path.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Create a converter from configuration.
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl DocumentConverter for CommandConverter {
    fn convert(&self, path: &Path) -> Result<LayoutDocument, ConvertError> {
        ensure_document(path)?;

        debug!("Running {} {:?} {}", self.program, self.args, path.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ConvertError::ConverterUnavailable(format!(
                    "{} is required to convert documents; install it or set converter.program",
                    self.program
                )),
                _ => ConvertError::ConverterUnavailable(format!(
                    "failed to start {}: {}",
                    self.program, e
                )),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("{} exited with {}", self.program, output.status);
            return Err(ConvertError::ConversionFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        parse_layout_xml(output.stdout.as_slice())
    }
}
