//! notemerge - Merge lecture-note PDFs into one document.
//!
//! This library implements the pieces behind the `notemerge` command line
//! tool: it concatenates the pages of several PDF files into a single
//! output document, skipping pages that carry no extractable text (the
//! usual shape of an embedded image-only ad page), and can hand the
//! finished file to an external de-embedding tool for a second
//! ad-stripping pass.
//!
//! # Examples
//!
//! ## Basic Merge
//!
//! ```no_run
//! use notemerge::config::Config;
//! use notemerge::context::RunContext;
//! use notemerge::io::PdfWriter;
//! use notemerge::merge::Merger;
//! use notemerge::output::{OutputFormatter, RunLog};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     inputs: vec![PathBuf::from("week1.pdf"), PathBuf::from("week2.pdf")],
//!     output: PathBuf::from("week1_merged.pdf"),
//!     remove_ads: false,
//!     verbose: false,
//!     log: false,
//! };
//!
//! let formatter = OutputFormatter::new(config.verbose);
//! let mut ctx = RunContext::new(config, formatter, RunLog::disabled());
//!
//! let result = Merger::new().merge(&mut ctx).await?;
//! let writer = PdfWriter::new();
//! writer.save(&result.document, &ctx.config.output).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod context;
pub mod deembed;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{NoteMergeError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
