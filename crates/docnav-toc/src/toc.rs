//! Table of contents extraction.

use crate::block::Block;
use crate::document::Document;
use crate::error::TocError;
use crate::heading::{collect_headings, parse};

/// Title of the synthetic section listing documented components.
pub const API_REFERENCE: &str = "API Reference";

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HeadingEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub text: String,
}

impl HeadingEntry {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    /// Anchor fragment: lowercase text with spaces replaced by hyphens.
    pub fn slug(&self) -> String {
        self.text.to_lowercase().replace(' ', "-")
    }

    /// Jump link to this heading on the page at `path`.
    ///
    /// ```
    /// use docnav_toc::HeadingEntry;
    ///
    /// let entry = HeadingEntry::new(2, "Event Handlers");
    /// assert_eq!(entry.anchor("/docs/events/"), "/docs/events/#event-handlers");
    /// ```
    pub fn anchor(&self, path: &str) -> String {
        format!("{path}#{}", self.slug())
    }
}

/// Extract the table of contents of a document.
///
/// Only markdown blocks whose first line is a heading are scanned; custom
/// blocks never contribute, even when they contain heading-like lines.
/// Template expressions are substituted before parsing.
///
/// `component_list` is the component set of an API page. Its first entry
/// is the page's own component, covered by the page body. The remaining
/// names are listed under a level-1 [`API_REFERENCE`] entry.
///
/// # Errors
///
/// Returns [`TocError::UndefinedVariable`] if a scanned block references
/// an undefined name.
///
/// # Examples
///
/// ```
/// use docnav_toc::{Document, HeadingEntry, extract_toc};
///
/// let doc = Document::parse("# Intro\n```python demo\n# code\n```\n## Details")?;
/// let toc = extract_toc(&doc, &["Select", "SelectRoot", "SelectItem"])?;
///
/// assert_eq!(toc, vec![
///     HeadingEntry::new(1, "Intro"),
///     HeadingEntry::new(2, "Details"),
///     HeadingEntry::new(1, "API Reference"),
///     HeadingEntry::new(2, "SelectRoot"),
///     HeadingEntry::new(2, "SelectItem"),
/// ]);
/// # Ok::<(), docnav_toc::TocError>(())
/// ```
pub fn extract_toc<S: AsRef<str>>(
    document: &Document,
    component_list: &[S],
) -> Result<Vec<HeadingEntry>, TocError> {
    let pieces = document
        .blocks()
        .iter()
        .filter(|block| block.is_heading_block())
        .filter_map(Block::as_markdown)
        .map(|content| document.env().render(content))
        .collect::<Result<Vec<_>, _>>()?;

    let mut entries: Vec<HeadingEntry> = collect_headings(&parse(&pieces.join("\n\n")))
        .into_iter()
        .map(|(level, text)| HeadingEntry { level, text })
        .collect();

    if let Some((_, documented)) = component_list.split_first()
        && !documented.is_empty()
    {
        entries.push(HeadingEntry::new(1, API_REFERENCE));
        entries.extend(
            documented
                .iter()
                .map(|name| HeadingEntry::new(2, name.as_ref())),
        );
    }

    tracing::debug!(
        blocks = pieces.len(),
        entries = entries.len(),
        "Extracted table of contents"
    );

    Ok(entries)
}
