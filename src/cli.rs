//! CLI argument parsing for notemerge.
//!
//! This module defines the command-line interface structure using `clap`.
//!
//! # Examples
//!
//! ```no_run
//! use notemerge::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("Merging {} files", cli.inputs.len());
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{NoteMergeError, Result};

/// Suffix appended to the derived output name when `--output` is omitted.
const OUTPUT_SUFFIX: &str = "_merged.pdf";

/// Merge lecture-note PDFs into a single document.
///
/// notemerge concatenates the given PDF files in order, skipping pages that
/// carry no extractable text (the usual shape of an embedded image-only ad
/// page). With `--remove-ads` the finished file is additionally run through
/// an external ad de-embedding tool.
#[derive(Parser, Debug)]
#[command(name = "notemerge")]
#[command(version)]
#[command(about = "Merge PDF files into one, dropping pages without text", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output file name, if not specified it will be the name of the first
    /// file with _merged.pdf at the end
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Remove the ads from the merged pdf
    ///
    /// Runs the external de-embedding tool against the finished output
    /// file, replacing it in place with an ad-stripped version.
    #[arg(short, long)]
    pub remove_ads: bool,

    /// Verbose mode, show more info about the process
    #[arg(short, long)]
    pub verbose: bool,

    /// Save a log of the operations to ./logs/log_<pid>.txt
    #[arg(short, long)]
    pub log: bool,

    /// Input PDF files to merge (in order)
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    /// Convert CLI arguments into a validated [`Config`].
    ///
    /// Fills in the default output path when `--output` was omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails.
    pub fn to_config(&self) -> Result<Config> {
        let output = match &self.output {
            Some(path) => path.clone(),
            None => {
                let first = self.inputs.first().ok_or(NoteMergeError::NoFilesToMerge)?;
                derive_output_path(first)
            }
        };

        let config = Config {
            inputs: self.inputs.clone(),
            output,
            remove_ads: self.remove_ads,
            verbose: self.verbose,
            log: self.log,
        };

        config
            .validate()
            .map_err(|err| NoteMergeError::invalid_config(err.to_string()))?;

        Ok(config)
    }
}

/// Derive the default output path from the first input path.
///
/// The path string is split on `.`, the last segment is dropped, the rest is
/// rejoined, and `_merged.pdf` is appended. A path without any dot keeps its
/// full name before the suffix, so `notes` becomes `notes_merged.pdf`.
pub fn derive_output_path(first_input: &Path) -> PathBuf {
    let raw = first_input.to_string_lossy();
    let stem = match raw.rfind('.') {
        Some(idx) => &raw[..idx],
        None => raw.as_ref(),
    };
    PathBuf::from(format!("{stem}{OUTPUT_SUFFIX}"))
}
