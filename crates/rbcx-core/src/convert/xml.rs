//! Reader for pdfminer-style layout XML.
//!
//! ```xml
//! <pages>
//!   <page id="1" bbox="0,0,612,792">
//!     <textbox>
//!       <textline y0="700.5" bbox="...">
//!         <text font="MetaBoldLF-Roman" x0="50.0" x1="80.0">MAR 01</text>
//!       </textline>
//!     </textbox>
//!   </page>
//! </pages>
//! ```
//!
//! Pages may sit anywhere under the root; lines anywhere under a page;
//! fragments anywhere under a line. Only those fragments become rows, but
//! all character data in the file (figure glyphs included) is kept as the
//! document text used for detection.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use super::{DocumentConverter, ensure_document};
use crate::error::ConvertError;
use crate::layout::{LayoutDocument, LayoutLine, LayoutPage, LayoutText};

/// Converter that reads a layout XML file already produced by an external tool.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlLayoutConverter;

impl XmlLayoutConverter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentConverter for XmlLayoutConverter {
    fn convert(&self, path: &Path) -> Result<LayoutDocument, ConvertError> {
        ensure_document(path)?;
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConvertError::InputNotFound(path.to_path_buf()),
            _ => ConvertError::Io(e),
        })?;

        let document = parse_layout_xml(BufReader::new(file))?;
        debug!(
            "Read {} pages, {} fragments from {}",
            document.pages.len(),
            document.fragment_count(),
            path.display()
        );
        Ok(document)
    }
}

/// Parse layout XML from a string.
pub fn parse_layout_str(xml: &str) -> Result<LayoutDocument, ConvertError> {
    parse_layout_xml(xml.as_bytes())
}

/// Parse layout XML from a buffered reader.
pub fn parse_layout_xml<R: BufRead>(source: R) -> Result<LayoutDocument, ConvertError> {
    let mut reader = Reader::from_reader(source);
    let mut buf = Vec::new();

    let mut document = LayoutDocument::default();
    let mut page: Option<LayoutPage> = None;
    let mut line: Option<LayoutLine> = None;
    let mut text: Option<LayoutText> = None;
    let mut depth = 0usize;
    let mut saw_root = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| malformed(reader.buffer_position(), e))?;

        match event {
            Event::Start(e) => {
                depth += 1;
                saw_root = true;
                match e.local_name().as_ref() {
                    b"page" if page.is_none() => page = Some(page_from(&e)?),
                    b"textline" if page.is_some() && line.is_none() => line = Some(line_from(&e)?),
                    b"text" if line.is_some() && text.is_none() => text = Some(text_from(&e)?),
                    _ => {}
                }
            }
            Event::Empty(e) => {
                saw_root = true;
                match e.local_name().as_ref() {
                    b"page" if page.is_none() => document.pages.push(page_from(&e)?),
                    b"textline" if line.is_none() => {
                        if let Some(p) = page.as_mut() {
                            p.lines.push(line_from(&e)?);
                        }
                    }
                    b"text" if text.is_none() => {
                        if let Some(l) = line.as_mut() {
                            l.texts.push(text_from(&e)?);
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(e) => {
                let content = e
                    .unescape()
                    .map_err(|err| malformed(reader.buffer_position(), err))?;
                document.text.push_str(&content);
                if let Some(t) = text.as_mut() {
                    t.content.push_str(&content);
                }
            }
            Event::CData(e) => {
                let content = String::from_utf8_lossy(&e.into_inner()).into_owned();
                document.text.push_str(&content);
                if let Some(t) = text.as_mut() {
                    t.content.push_str(&content);
                }
            }
            Event::End(e) => {
                depth = depth.saturating_sub(1);
                match e.local_name().as_ref() {
                    b"text" => {
                        if let (Some(t), Some(l)) = (text.take(), line.as_mut()) {
                            l.texts.push(t);
                        }
                    }
                    b"textline" if text.is_none() => {
                        if let (Some(l), Some(p)) = (line.take(), page.as_mut()) {
                            p.lines.push(l);
                        }
                    }
                    b"page" if line.is_none() => {
                        if let Some(p) = page.take() {
                            document.pages.push(p);
                        }
                    }
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }

        buf.clear();
    }

    if !saw_root {
        return Err(ConvertError::ConversionFailed(
            "layout XML has no root element".to_string(),
        ));
    }
    if depth != 0 || page.is_some() {
        return Err(ConvertError::ConversionFailed(
            "layout XML ended before all elements were closed".to_string(),
        ));
    }

    Ok(document)
}

fn malformed(position: impl std::fmt::Display, err: impl std::fmt::Display) -> ConvertError {
    ConvertError::ConversionFailed(format!("malformed layout XML at byte {}: {}", position, err))
}

fn page_from(e: &BytesStart<'_>) -> Result<LayoutPage, ConvertError> {
    let mut page = LayoutPage::default();
    for_each_attr(e, |key, value| {
        if key == b"id" {
            page.id = Some(value.into_owned());
        }
    })?;
    Ok(page)
}

fn line_from(e: &BytesStart<'_>) -> Result<LayoutLine, ConvertError> {
    let mut line = LayoutLine::default();
    for_each_attr(e, |key, value| match key {
        b"y0" => line.y0 = Some(value.into_owned()),
        b"bbox" => line.bbox = Some(value.into_owned()),
        _ => {}
    })?;
    Ok(line)
}

fn text_from(e: &BytesStart<'_>) -> Result<LayoutText, ConvertError> {
    let mut text = LayoutText::default();
    for_each_attr(e, |key, value| match key {
        b"x0" => text.x0 = Some(value.into_owned()),
        b"x1" => text.x1 = Some(value.into_owned()),
        b"bbox" => text.bbox = Some(value.into_owned()),
        b"font" => text.font = value.into_owned(),
        _ => {}
    })?;
    Ok(text)
}

fn for_each_attr<F>(e: &BytesStart<'_>, mut f: F) -> Result<(), ConvertError>
where
    F: FnMut(&[u8], Cow<'_, str>),
{
    for attr in e.attributes() {
        let attr = attr.map_err(|err| {
            ConvertError::ConversionFailed(format!("malformed attribute: {}", err))
        })?;
        let value = attr.unescape_value().map_err(|err| {
            ConvertError::ConversionFailed(format!("malformed attribute value: {}", err))
        })?;
        f(attr.key.local_name().as_ref(), value);
    }
    Ok(())
}
