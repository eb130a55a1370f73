//! Configuration module for notemerge.
//!
//! CLI arguments are transformed into a validated [`Config`] that drives the
//! rest of the run. Validation here covers logical consistency only; file
//! existence and overwrite confirmation are the validator's job.

use anyhow::{Result, bail};

use std::path::PathBuf;

/// Complete configuration for a merge run.
///
/// Derived from CLI arguments, with the output path default already filled in.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input PDF file paths (in merge order).
    pub inputs: Vec<PathBuf>,

    /// Output PDF file path.
    pub output: PathBuf,

    /// Hand the finished output to the external ad-removal tool.
    pub remove_ads: bool,

    /// Verbose output mode.
    pub verbose: bool,

    /// Write a per-run log file.
    pub log: bool,
}

impl Config {
    /// Returns a reference to inputs.
    pub fn inputs(&self) -> &[PathBuf] {
        self.inputs.as_ref()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No input files are specified
    /// - The output path collides with an input path
    pub fn validate(&self) -> Result<()> {
        if self.inputs.is_empty() {
            bail!("No input files specified");
        }

        for input in &self.inputs {
            if input == &self.output {
                bail!(
                    "Output file cannot be the same as an input file: {}",
                    self.output.display()
                );
            }
        }

        Ok(())
    }
}
