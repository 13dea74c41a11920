//! Request/response surface for serverless-style invocation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::convert::{DefaultConverter, DocumentConverter};
use crate::parser::StatementParser;

/// Document parsed when a request names none.
pub const DEFAULT_PDF_PATH: &str = "/tmp/statement.pdf";

/// Incoming request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerRequest {
    /// Path of the statement document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_path: Option<PathBuf>,
}

impl HandlerRequest {
    pub fn new(pdf_path: impl Into<PathBuf>) -> Self {
        Self {
            pdf_path: Some(pdf_path.into()),
        }
    }

    /// The requested path, or [`DEFAULT_PDF_PATH`] when absent or empty.
    pub fn path(&self) -> &Path {
        match &self.pdf_path {
            Some(p) if !p.as_os_str().is_empty() => p.as_path(),
            _ => Path::new(DEFAULT_PDF_PATH),
        }
    }
}

/// Outgoing response: HTTP-style status plus the serialized parse result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

/// Handle a request with the default converter and configuration.
pub fn handler(request: &HandlerRequest) -> HandlerResponse {
    handle_with(&StatementParser::new(DefaultConverter::default()), request)
}

/// Handle a request with a given parser.
pub fn handle_with<C: DocumentConverter>(
    parser: &StatementParser<C>,
    request: &HandlerRequest,
) -> HandlerResponse {
    let result = parser.parse(request.path());
    let status_code = if result.is_success() { 200 } else { 500 };

    match serde_json::to_string(&result) {
        Ok(body) => HandlerResponse { status_code, body },
        Err(e) => {
            error!("Failed to serialize parse result: {}", e);
            HandlerResponse {
                status_code: 500,
                body: serde_json::json!({
                    "success": false,
                    "error": format!("Failed to serialize result: {}", e),
                    "error_type": "SerializationError",
                })
                .to_string(),
            }
        }
    }
}
