//! Positioned-text layout: the converter's page/line/fragment tree and row grouping.

mod rows;

pub use rows::{Fragment, PageRows, Row, group_rows};

/// A positioned-text document as produced by a converter.
///
/// Position attributes are kept exactly as the converter wrote them; they are
/// parsed to numbers only when rows are built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutDocument {
    /// Pages in document order.
    pub pages: Vec<LayoutPage>,
    /// Every piece of character data in the source, in document order,
    /// including text outside lines (figures, annotations). Empty when the
    /// document was not read from a source tree.
    pub text: String,
}

/// One page of the layout tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutPage {
    /// Raw `id` attribute (page number).
    pub id: Option<String>,
    /// Text lines on the page.
    pub lines: Vec<LayoutLine>,
}

/// A text line; its vertical coordinate is the row key of every fragment in it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutLine {
    /// Raw `y0` attribute.
    pub y0: Option<String>,
    /// Raw `bbox` attribute (`x0,y0,x1,y1`).
    pub bbox: Option<String>,
    /// Text fragments in the line.
    pub texts: Vec<LayoutText>,
}

/// A single text fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutText {
    /// Raw `x0` attribute.
    pub x0: Option<String>,
    /// Raw `x1` attribute.
    pub x1: Option<String>,
    /// Raw `bbox` attribute (`x0,y0,x1,y1`).
    pub bbox: Option<String>,
    /// Font label, empty when the converter reported none.
    pub font: String,
    /// Text content, untrimmed.
    pub content: String,
}

impl LayoutDocument {
    /// Text used for statement detection.
    ///
    /// The source's full character data when recorded, otherwise every
    /// fragment's text concatenated in document order.
    pub fn full_text(&self) -> String {
        if !self.text.is_empty() {
            return self.text.clone();
        }

        let mut text = String::new();
        for page in &self.pages {
            for line in &page.lines {
                for fragment in &line.texts {
                    text.push_str(&fragment.content);
                }
            }
        }
        text
    }

    /// Total number of text fragments, including blank ones.
    pub fn fragment_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| p.lines.iter())
            .map(|l| l.texts.len())
            .sum()
    }
}

impl LayoutPage {
    /// Create a page with the given number.
    pub fn new(id: u32) -> Self {
        Self {
            id: Some(id.to_string()),
            lines: Vec::new(),
        }
    }

    /// Append a text line.
    pub fn with_line(mut self, line: LayoutLine) -> Self {
        self.lines.push(line);
        self
    }
}

impl LayoutLine {
    /// Create an empty line at vertical coordinate `y`.
    pub fn at(y: f64) -> Self {
        Self {
            y0: Some(y.to_string()),
            bbox: None,
            texts: Vec::new(),
        }
    }

    /// Add a fragment spanning `x0..x1`.
    pub fn with_text(mut self, x0: f64, x1: f64, font: &str, content: &str) -> Self {
        self.texts.push(LayoutText {
            x0: Some(x0.to_string()),
            x1: Some(x1.to_string()),
            bbox: None,
            font: font.to_string(),
            content: content.to_string(),
        });
        self
    }
}

/// Resolve one coordinate of an element.
///
/// An explicit attribute wins; otherwise the value at `bbox_index` of the
/// `bbox` attribute is used. Missing, malformed, or non-finite values are 0.
pub(crate) fn coordinate(explicit: Option<&str>, bbox: Option<&str>, bbox_index: usize) -> f64 {
    if let Some(raw) = explicit {
        return parse_number(raw);
    }

    bbox.and_then(|b| b.split(',').nth(bbox_index))
        .map(parse_number)
        .unwrap_or(0.0)
}

fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        // +0.0 folds negative zero into the same row key as zero
        Ok(v) if v.is_finite() => v + 0.0,
        _ => 0.0,
    }
}
