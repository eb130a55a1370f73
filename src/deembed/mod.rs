//! Ad removal, delegated to an external de-embedding tool.
//!
//! The detection and stripping of known ad-page patterns is not implemented
//! here; it is the job of a separate program that rewrites the merged PDF in
//! place. This module only defines the narrow contract with that program:
//! path in, success/error out. The [`AdRemover`] trait exists so tests can
//! substitute a stub for the real tool.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Name of the external de-embedding program looked up on `PATH`.
pub const DEFAULT_DEEMBED_PROGRAM: &str = "pdf-deembed";

/// Outcome reported by a de-embedding run.
///
/// Mirrors the JSON record the external tool prints on stdout:
/// `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeembedOutcome {
    /// Whether the tool stripped the ads and rewrote the file.
    pub success: bool,

    /// Error text when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
}

impl DeembedOutcome {
    /// A successful outcome.
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// A failed outcome with an error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Something that can strip ad pages from a finished PDF, in place.
pub trait AdRemover {
    /// Detect and strip known ad pages from the PDF at `path`, overwriting
    /// the file in place.
    ///
    /// Failures are reported through the outcome, never as a panic or an
    /// error type; a tool that cannot even be started is a failed outcome.
    fn deembed(&self, path: &Path, verbose: bool) -> DeembedOutcome;
}

/// [`AdRemover`] backed by the external de-embedding program.
pub struct DeembedTool {
    program: PathBuf,
}

impl DeembedTool {
    /// Create a tool invoking [`DEFAULT_DEEMBED_PROGRAM`].
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_DEEMBED_PROGRAM),
        }
    }

    /// Create a tool invoking a specific program.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl AdRemover for DeembedTool {
    fn deembed(&self, path: &Path, verbose: bool) -> DeembedOutcome {
        let mut command = Command::new(&self.program);
        command.arg(path);
        if verbose {
            command.arg("--verbose");
        }

        let output = match command.output() {
            Ok(output) => output,
            Err(err) => {
                return DeembedOutcome::failed(format!(
                    "failed to run {}: {err}",
                    self.program.display()
                ));
            }
        };

        // The tool reports its result as one JSON object on stdout; fall
        // back to the exit status for tools that don't.
        if let Ok(outcome) = serde_json::from_slice::<DeembedOutcome>(&output.stdout) {
            return outcome;
        }

        if output.status.success() {
            DeembedOutcome::succeeded()
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if stderr.is_empty() {
                DeembedOutcome::failed(format!("{} reported failure", self.program.display()))
            } else {
                DeembedOutcome::failed(stderr)
            }
        }
    }
}

impl Default for DeembedTool {
    fn default() -> Self {
        Self::new()
    }
}
