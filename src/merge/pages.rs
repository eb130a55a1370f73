//! Page-level text inspection and filtering.
//!
//! A page whose extracted text is empty is taken to be an image-only page,
//! which in lecture-note downloads almost always means an embedded ad. The
//! heuristic accepts false positives and negatives: a scanned content page
//! is dropped too, and an ad with a text layer survives.

use lopdf::Document;

use crate::error::Result;

/// Counts from one blank-page stripping pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripReport {
    /// Pages kept because they carry extractable text.
    pub kept: usize,

    /// Pages removed because their extracted text was empty.
    pub skipped: usize,
}

/// Filter that separates text-bearing pages from blank ones.
#[derive(Debug, Clone, Default)]
pub struct PageFilter;

impl PageFilter {
    /// Create a new page filter.
    pub fn new() -> Self {
        Self
    }

    /// Page numbers (1-indexed, in document order) whose extracted text is
    /// non-empty.
    ///
    /// Whitespace-only text counts as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if text extraction fails for a page; the failure is
    /// not recovered locally.
    pub fn content_pages(&self, doc: &Document) -> Result<Vec<u32>> {
        let mut keep = Vec::new();

        for page_number in doc.get_pages().keys() {
            let text = doc.extract_text(&[*page_number])?;
            if !text.trim().is_empty() {
                keep.push(*page_number);
            }
        }

        Ok(keep)
    }

    /// Remove every page without extractable text, in place.
    ///
    /// Page order among the survivors is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if text extraction fails for a page.
    pub fn strip_blank_pages(&self, doc: &mut Document) -> Result<StripReport> {
        let keep = self.content_pages(doc)?;

        let blank: Vec<u32> = doc
            .get_pages()
            .keys()
            .filter(|n| !keep.contains(n))
            .copied()
            .collect();

        if !blank.is_empty() {
            doc.delete_pages(&blank);
        }

        Ok(StripReport {
            kept: keep.len(),
            skipped: blank.len(),
        })
    }
}
