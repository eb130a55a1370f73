//! Console output and run logging for notemerge.
//!
//! Two independent sinks report on a run:
//!
//! - [`OutputFormatter`] prints status lines to the console, with verbose-only
//!   detail lines and ANSI colors when the output is a terminal.
//! - [`RunLog`] appends timestamped lines to the per-run log file under
//!   `./logs` when logging was requested.
//!
//! The two are wired together by [`crate::context::RunContext::event`], which
//! feeds the same message to both.

pub mod formatter;
pub mod log;

pub use formatter::{MessageLevel, OutputFormatter};
pub use log::{LOG_DIR, RunLog};
