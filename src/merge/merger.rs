//! Core PDF merging implementation.
//!
//! Inputs are loaded strictly in list order; each document is stripped of
//! its blank (text-less) pages before its remaining pages are appended to
//! the output. The first document serves as the base; every later one is
//! renumbered past the running `max_id`, its objects are absorbed, and its
//! page references are appended to the base page tree.

use lopdf::{Document, Object, ObjectId};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::context::RunContext;
use crate::error::{NoteMergeError, Result};
use crate::io::PdfReader;
use crate::merge::pages::PageFilter;

/// Statistics about a merge operation.
#[derive(Debug, Clone)]
pub struct MergeStatistics {
    /// Number of PDFs merged.
    pub files_merged: usize,

    /// Pages copied into the merged document.
    pub pages_kept: usize,

    /// Pages dropped for having no extractable text.
    pub pages_skipped: usize,

    /// Total time taken for the merge.
    pub merge_time: Duration,

    /// Time taken to load all PDFs.
    pub load_time: Duration,

    /// Total size of input files.
    pub input_size: u64,
}

impl MergeStatistics {
    /// Format input size as human-readable string.
    pub fn format_input_size(&self) -> String {
        format_file_size(self.input_size)
    }
}

/// Result of a merge operation.
pub struct MergeResult {
    /// The merged PDF document.
    pub document: Document,

    /// Statistics about the merge.
    pub statistics: MergeStatistics,

    /// Paths of files that were merged.
    pub merged_files: Vec<PathBuf>,
}

/// PDF merger that combines multiple documents.
pub struct Merger {
    /// Reader for loading PDFs.
    reader: PdfReader,

    /// Filter that drops pages without extractable text.
    filter: PageFilter,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
            filter: PageFilter::new(),
        }
    }

    /// Merge the configured inputs into a single document.
    ///
    /// Reports an `Added N pages from ...` event per input through the
    /// context.
    ///
    /// # Errors
    ///
    /// Returns an error if an input cannot be loaded or the page-tree
    /// surgery fails. Failures are not recovered per-file; the first one
    /// aborts the merge.
    pub async fn merge(&self, ctx: &mut RunContext) -> Result<MergeResult> {
        let inputs = ctx.config.inputs.clone();
        if inputs.is_empty() {
            return Err(NoteMergeError::NoFilesToMerge);
        }

        let merge_start = Instant::now();
        let mut load_time = Duration::ZERO;
        let mut input_size = 0;
        let mut pages_kept = 0;
        let mut pages_skipped = 0;

        let mut documents = Vec::with_capacity(inputs.len());
        for path in &inputs {
            let mut loaded = self.reader.load(path).await?;
            load_time += loaded.load_time;
            input_size += loaded.file_size;

            let report = self.filter.strip_blank_pages(&mut loaded.document)?;
            pages_kept += report.kept;
            pages_skipped += report.skipped;

            ctx.event(&format!(
                "Added {} pages from {} ({} pages without text skipped)",
                report.kept,
                path.display(),
                report.skipped
            ))?;

            documents.push(loaded.document);
        }

        let document = self.combine(documents)?;

        let statistics = MergeStatistics {
            files_merged: inputs.len(),
            pages_kept,
            pages_skipped,
            merge_time: merge_start.elapsed(),
            load_time,
            input_size,
        };

        Ok(MergeResult {
            document,
            statistics,
            merged_files: inputs,
        })
    }

    /// Concatenate already-filtered documents into one.
    fn combine(&self, documents: Vec<Document>) -> Result<Document> {
        let mut iter = documents.into_iter();
        let mut merged = iter.next().ok_or(NoteMergeError::NoFilesToMerge)?;
        let mut max_id = merged.max_id;

        for mut doc in iter {
            // Renumber objects to avoid ID conflicts
            doc.renumber_objects_with(max_id + 1);
            max_id = doc.max_id;

            let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();

            merged.objects.extend(doc.objects);

            self.append_to_page_tree(&mut merged, &doc_pages)?;
        }

        merged.compress();
        merged.renumber_objects();

        Ok(merged)
    }

    /// Append page references to the merged document's page tree.
    fn append_to_page_tree(&self, merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
        let catalog = merged
            .catalog_mut()
            .map_err(|e| NoteMergeError::merge_failed(format!("Failed to get catalog: {e}")))?;

        let pages_id = catalog
            .get(b"Pages")
            .and_then(|p| p.as_reference())
            .map_err(|e| {
                NoteMergeError::merge_failed(format!("Failed to get pages reference: {e}"))
            })?;

        let pages_dict = merged.get_object_mut(pages_id).map_err(|e| {
            NoteMergeError::merge_failed(format!("Failed to get pages object: {e}"))
        })?;

        if let Object::Dictionary(dict) = pages_dict {
            let kids = dict.get_mut(b"Kids").map_err(|_| {
                NoteMergeError::merge_failed("Pages dictionary missing Kids array")
            })?;

            if let Object::Array(kids_array) = kids {
                for &page_id in page_ids {
                    kids_array.push(Object::Reference(page_id));
                }
            } else {
                return Err(NoteMergeError::merge_failed("Kids is not an array"));
            }

            let current_count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
            let new_count = current_count + page_ids.len() as i64;
            dict.set("Count", Object::Integer(new_count));
        } else {
            return Err(NoteMergeError::merge_failed(
                "Pages object is not a dictionary",
            ));
        }

        Ok(())
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Format file size as human-readable string.
fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::output::{OutputFormatter, RunLog};
    use lopdf::content::{Content, Operation};
    use lopdf::{Stream, dictionary};
    use tempfile::TempDir;

    fn build_document(page_texts: &[Option<&str>]) -> Document {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let operations = match text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc
    }

    fn write_document(dir: &TempDir, name: &str, page_texts: &[Option<&str>]) -> PathBuf {
        let mut doc = build_document(page_texts);
        let path = dir.path().join(name);
        doc.save(&path).unwrap();
        path
    }

    fn test_context(inputs: Vec<PathBuf>, output: PathBuf) -> RunContext {
        RunContext::new(
            Config {
                inputs,
                output,
                remove_ads: false,
                verbose: false,
                log: false,
            },
            OutputFormatter::new(false),
            RunLog::disabled(),
        )
    }

    #[tokio::test]
    async fn test_merge_skips_blank_pages() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_document(&temp_dir, "a.pdf", &[Some("x"), None, Some("y")]);
        let b = write_document(&temp_dir, "b.pdf", &[None, None]);
        let output = temp_dir.path().join("out.pdf");

        let mut ctx = test_context(vec![a, b], output);
        let merger = Merger::new();
        let result = merger.merge(&mut ctx).await.unwrap();

        assert_eq!(result.statistics.files_merged, 2);
        assert_eq!(result.statistics.pages_kept, 2);
        assert_eq!(result.statistics.pages_skipped, 3);
        assert_eq!(result.document.get_pages().len(), 2);
    }

    #[tokio::test]
    async fn test_merge_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_document(&temp_dir, "a.pdf", &[Some("Alpha")]);
        let b = write_document(&temp_dir, "b.pdf", &[Some("Beta"), Some("Gamma")]);
        let output = temp_dir.path().join("out.pdf");

        let mut ctx = test_context(vec![a, b], output);
        let merger = Merger::new();
        let result = merger.merge(&mut ctx).await.unwrap();

        let doc = result.document;
        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        assert_eq!(page_numbers.len(), 3);

        let text = doc.extract_text(&page_numbers).unwrap();
        let alpha = text.find("Alpha").unwrap();
        let beta = text.find("Beta").unwrap();
        let gamma = text.find("Gamma").unwrap();
        assert!(alpha < beta);
        assert!(beta < gamma);
    }

    #[tokio::test]
    async fn test_merge_single_input() {
        let temp_dir = TempDir::new().unwrap();
        let a = write_document(&temp_dir, "a.pdf", &[Some("only"), None]);
        let output = temp_dir.path().join("out.pdf");

        let mut ctx = test_context(vec![a], output);
        let merger = Merger::new();
        let result = merger.merge(&mut ctx).await.unwrap();

        assert_eq!(result.statistics.files_merged, 1);
        assert_eq!(result.statistics.pages_kept, 1);
        assert_eq!(result.document.get_pages().len(), 1);
    }

    #[tokio::test]
    async fn test_merge_missing_input_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.pdf");
        let output = temp_dir.path().join("out.pdf");

        let mut ctx = test_context(vec![missing], output);
        let merger = Merger::new();
        assert!(merger.merge(&mut ctx).await.is_err());
    }

    #[test]
    fn test_merge_statistics_format() {
        let stats = MergeStatistics {
            files_merged: 3,
            pages_kept: 15,
            pages_skipped: 4,
            merge_time: Duration::from_secs(2),
            load_time: Duration::from_secs(1),
            input_size: 1024 * 1024,
        };

        assert_eq!(stats.format_input_size(), "1.00 MB");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(500), "500 bytes");
        assert_eq!(format_file_size(1024), "1.00 KB");
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1.00 GB");
    }
}
