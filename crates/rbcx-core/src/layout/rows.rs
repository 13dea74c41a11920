//! Row grouping by exact vertical coordinate.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use super::{LayoutDocument, LayoutPage, coordinate};

/// A positioned text fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Page index.
    pub page: u32,
    /// Horizontal start.
    pub x0: f64,
    /// Horizontal end.
    pub x1: f64,
    /// Vertical coordinate (row key).
    pub y: f64,
    /// Text content, non-empty after trimming.
    pub text: String,
    /// Font label, possibly empty.
    pub font: String,
}

/// Fragments sharing one vertical coordinate on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Vertical coordinate shared by all fragments.
    pub y: f64,
    /// Fragments in insertion order.
    pub fragments: Vec<Fragment>,
    /// Font labels observed in the row.
    pub fonts: BTreeSet<String>,
}

impl Row {
    fn new(y: f64) -> Self {
        Self {
            y,
            fragments: Vec::new(),
            fonts: BTreeSet::new(),
        }
    }

    fn push(&mut self, fragment: Fragment) {
        self.fonts.insert(fragment.font.clone());
        self.fragments.push(fragment);
    }

    /// Fragments ordered left to right.
    ///
    /// The sort is stable, so fragments starting at the same x keep their
    /// insertion order.
    pub fn blocks(&self) -> Vec<&Fragment> {
        let mut blocks: Vec<&Fragment> = self.fragments.iter().collect();
        blocks.sort_by(|a, b| a.x0.total_cmp(&b.x0));
        blocks
    }

    /// Number of fragments in the row.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the row has no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Whether any fragment in the row used `font`.
    pub fn has_font(&self, font: &str) -> bool {
        self.fonts.contains(font)
    }
}

/// All rows of one page, top of page first.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRows {
    /// Page index.
    pub page: u32,
    /// Rows in descending vertical order.
    pub rows: Vec<Row>,
}

/// Group every page's fragments into rows.
pub fn group_rows(document: &LayoutDocument) -> Vec<PageRows> {
    let pages: Vec<PageRows> = document.pages.iter().map(group_page).collect();

    debug!(
        "Grouped {} fragments into {} rows across {} pages",
        document.fragment_count(),
        pages.iter().map(|p| p.rows.len()).sum::<usize>(),
        pages.len()
    );

    pages
}

fn group_page(page: &LayoutPage) -> PageRows {
    let page_number = page
        .id
        .as_deref()
        .and_then(|id| id.trim().parse::<u32>().ok())
        .unwrap_or(0);

    let mut rows: Vec<Row> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for line in &page.lines {
        let y = coordinate(line.y0.as_deref(), line.bbox.as_deref(), 1);

        for text in &line.texts {
            if text.content.trim().is_empty() {
                continue;
            }

            let fragment = Fragment {
                page: page_number,
                x0: coordinate(text.x0.as_deref(), text.bbox.as_deref(), 0),
                x1: coordinate(text.x1.as_deref(), text.bbox.as_deref(), 2),
                y,
                text: text.content.clone(),
                font: text.font.clone(),
            };

            let slot = *index.entry(y.to_bits()).or_insert_with(|| {
                rows.push(Row::new(y));
                rows.len() - 1
            });
            rows[slot].push(fragment);
        }
    }

    rows.sort_by(|a, b| b.y.total_cmp(&a.y));

    trace!("Page {}: {} rows", page_number, rows.len());

    PageRows {
        page: page_number,
        rows,
    }
}
