//! Input validation for notemerge.
//!
//! Covers the checks that run before any PDF is opened:
//! - overwrite confirmation for an existing output file
//! - existence of every input path
//!
//! The confirmation prompt reads from a caller-supplied [`BufRead`] so tests
//! can drive it without a terminal.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::{NoteMergeError, Result};
use crate::output::OutputFormatter;

/// Validator for run arguments.
pub struct Validator;

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Ask the user whether an existing output file may be overwritten.
    ///
    /// Only a trimmed, case-insensitive `y` proceeds; any other answer
    /// cancels the run.
    ///
    /// # Errors
    ///
    /// Returns [`NoteMergeError::Cancelled`] when the answer is not
    /// affirmative, or an I/O error if the answer cannot be read.
    pub fn confirm_overwrite<R: BufRead>(
        &self,
        path: &Path,
        formatter: &OutputFormatter,
        input: &mut R,
    ) -> Result<()> {
        formatter.prompt(&format!(
            "The file {} already exists, do you want to overwrite it? [y/N]: ",
            path.display()
        ));

        let mut response = String::new();
        input.read_line(&mut response)?;

        if response.trim().eq_ignore_ascii_case("y") {
            Ok(())
        } else {
            Err(NoteMergeError::Cancelled)
        }
    }

    /// Verify that every input path exists and is a regular file.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first path that is missing or not a file.
    pub fn check_inputs(&self, inputs: &[PathBuf], formatter: &OutputFormatter) -> Result<()> {
        for path in inputs {
            formatter.debug(&format!(
                "Checking if the file {} exists...",
                path.display()
            ));

            if !path.exists() {
                return Err(NoteMergeError::file_not_found(path.clone()));
            }
            if !path.is_file() {
                return Err(NoteMergeError::not_a_file(path.clone()));
            }
        }

        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
