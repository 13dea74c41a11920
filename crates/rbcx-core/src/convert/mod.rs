//! Document conversion into a positioned-text layout tree.

mod command;
mod xml;

pub use command::CommandConverter;
pub use xml::{XmlLayoutConverter, parse_layout_str, parse_layout_xml};

use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConvertError;
use crate::layout::LayoutDocument;
use crate::models::config::ConverterConfig;

/// Turns a document on disk into a layout tree.
pub trait DocumentConverter {
    /// Convert the document at `path`.
    ///
    /// A missing document is reported as [`ConvertError::InputNotFound`].
    fn convert(&self, path: &Path) -> Result<LayoutDocument, ConvertError>;
}

impl<T: DocumentConverter + ?Sized> DocumentConverter for &T {
    fn convert(&self, path: &Path) -> Result<LayoutDocument, ConvertError> {
        (**self).convert(path)
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn ensure_document(path: &Path) -> Result<(), ConvertError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(ConvertError::InputNotFound(path.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(ConvertError::InputNotFound(path.to_path_buf()))
        }
        Err(e) => Err(ConvertError::Io(e)),
    }
}

/// Reads `.xml` layout files directly and runs the external program for
/// everything else.
#[derive(Debug, Clone)]
pub struct DefaultConverter {
    xml: XmlLayoutConverter,
    command: CommandConverter,
}

impl DefaultConverter {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            xml: XmlLayoutConverter::new(),
            command: CommandConverter::from_config(config),
        }
    }
}

impl Default for DefaultConverter {
    fn default() -> Self {
        Self::new(&ConverterConfig::default())
    }
}

impl DocumentConverter for DefaultConverter {
    fn convert(&self, path: &Path) -> Result<LayoutDocument, ConvertError> {
        let is_xml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("xml"));

        if is_xml {
            self.xml.convert(path)
        } else {
            self.command.convert(path)
        }
    }
}
