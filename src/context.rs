//! Explicit per-run state threaded through the pipeline.
//!
//! Instead of ambient globals, every step of a run (validation, merge, write,
//! ad removal) takes the [`RunContext`] and reports through it. The context
//! owns the validated configuration, the console formatter and the run log.

use crate::config::Config;
use crate::error::Result;
use crate::output::{OutputFormatter, RunLog};

/// State for one invocation, passed through each pipeline step.
pub struct RunContext {
    /// Validated run configuration.
    pub config: Config,

    /// Console output sink.
    pub formatter: OutputFormatter,

    /// Per-run log file (possibly disabled).
    pub log: RunLog,
}

impl RunContext {
    /// Create a context from its parts.
    pub fn new(config: Config, formatter: OutputFormatter, log: RunLog) -> Self {
        Self {
            config,
            formatter,
            log,
        }
    }

    /// Record a lifecycle event.
    ///
    /// The message is appended to the log file (when logging is enabled) and
    /// mirrored to the console as a verbose detail line. The two sinks are
    /// independent; either may be off.
    ///
    /// # Errors
    ///
    /// Returns an error if the log line cannot be written.
    pub fn event(&mut self, message: &str) -> Result<()> {
        self.formatter.debug(message);
        self.log.append(message)?;
        Ok(())
    }
}
