//! PDF reading and loading operations.
//!
//! Documents are loaded strictly one at a time, in input-list order. The
//! actual parse runs on the blocking thread pool so the runtime stays
//! responsive to an interrupt.

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::task;

use crate::error::{NoteMergeError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,

    /// File size in bytes.
    pub file_size: u64,
}

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Whether to verify PDF structure after loading.
    verify: bool,
}

impl PdfReader {
    /// Create a new PDF reader with default settings.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that skips verification (faster but less safe).
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load a single PDF document.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the PDF file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File cannot be read
    /// - File is not a valid PDF
    /// - PDF is encrypted
    /// - PDF has no pages (with verification on)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use notemerge::io::reader::PdfReader;
    /// # use std::path::Path;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let reader = PdfReader::new();
    /// let loaded = reader.load(Path::new("document.pdf")).await?;
    /// println!("Loaded {} pages in {:?}", loaded.page_count, loaded.load_time);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load(&self, path: &Path) -> Result<LoadedPdf> {
        let path_buf = path.to_path_buf();
        let verify = self.verify;

        task::spawn_blocking(move || {
            let start = Instant::now();

            let document = Document::load(&path_buf).map_err(|e| {
                let err_msg = e.to_string();
                if err_msg.contains("encrypt") || err_msg.contains("password") {
                    NoteMergeError::encrypted_pdf(path_buf.clone())
                } else {
                    NoteMergeError::failed_to_load_pdf(path_buf.clone(), err_msg)
                }
            })?;

            let page_count = document.get_pages().len();
            if verify && page_count == 0 {
                return Err(NoteMergeError::corrupted_pdf(
                    path_buf.clone(),
                    "PDF has no pages",
                ));
            }

            let load_time = start.elapsed();
            let file_size = std::fs::metadata(&path_buf).map(|m| m.len()).unwrap_or(0);

            Ok(LoadedPdf {
                document,
                path: path_buf,
                page_count,
                load_time,
                file_size,
            })
        })
        .await
        .map_err(|e| NoteMergeError::other(format!("Load task failed: {e}")))?
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
