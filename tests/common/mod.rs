//! Shared helpers for integration tests.
//!
//! Fixture PDFs are generated with lopdf rather than checked in: each page
//! gets either a simple text content stream or an empty one, which is
//! exactly the distinction the blank-page filter keys on.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::path::PathBuf;
use tempfile::TempDir;

use notemerge::config::Config;
use notemerge::context::RunContext;
use notemerge::output::{OutputFormatter, RunLog};

/// Build an in-memory document with one page per entry; `Some(text)` pages
/// get a text content stream, `None` pages an empty one.
pub fn build_document(page_texts: &[Option<&str>]) -> Document {
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
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
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

/// Write a fixture document into `dir` and return its path.
pub fn write_pdf(dir: &TempDir, name: &str, page_texts: &[Option<&str>]) -> PathBuf {
    let mut doc = build_document(page_texts);
    let path = dir.path().join(name);
    doc.save(&path).unwrap();
    path
}

/// Run context with a quiet formatter and no log file.
pub fn quiet_context(inputs: Vec<PathBuf>, output: PathBuf) -> RunContext {
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

/// Extracted text of every page of the PDF at `path`, in page order.
pub fn page_texts(path: &std::path::Path) -> Vec<String> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .keys()
        .map(|page| doc.extract_text(&[*page]).unwrap())
        .collect()
}
