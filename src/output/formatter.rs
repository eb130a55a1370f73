//! Message formatting and display.
//!
//! This module provides formatted console output for the different message
//! types. Verbose detail lines carry a cyan `[V]` tag and are suppressed
//! unless verbose mode is on; warnings and errors are always shown.
//!
//! # Examples
//!
//! ```
//! use notemerge::output::formatter::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(true);
//! formatter.debug("Checking if the output file exists...");
//! formatter.error("Something went wrong");
//! ```

use std::io::{self, Write};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Plain informational message.
    Info,
    /// Verbose-only detail message.
    Verbose,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
}

/// Console formatter with configurable verbosity.
pub struct OutputFormatter {
    /// Whether to show verbose detail lines.
    verbose: bool,
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `verbose` - Show verbose detail lines
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Whether verbose detail lines are shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Detect if colored output should be used.
    ///
    /// Returns true if stdout is a TTY and TERM is set.
    fn should_use_color() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Print a plain informational message.
    pub fn info(&self, message: &str) {
        self.print_message(MessageLevel::Info, message);
    }

    /// Print a verbose detail message.
    ///
    /// Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Verbose, message);
        }
    }

    /// Print a warning message.
    ///
    /// Always displayed.
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error message.
    ///
    /// Always displayed, on stderr.
    pub fn error(&self, message: &str) {
        let red = "\x1b[31m";
        let reset = "\x1b[0m";
        if self.colored {
            eprintln!("{red}{message}{reset}");
        } else {
            eprintln!("{message}");
        }
    }

    /// Print the prompt text for a console question, without a newline.
    pub fn prompt(&self, message: &str) {
        print!("{message}");
        io::stdout().flush().ok();
    }

    /// Print a message with level-appropriate formatting.
    fn print_message(&self, level: MessageLevel, message: &str) {
        let (tag, color_code) = match level {
            MessageLevel::Info => ("", ""),
            MessageLevel::Verbose => ("[V]", "\x1b[36m"), // Cyan
            MessageLevel::Warning => ("[!]", "\x1b[33m"), // Yellow
            MessageLevel::Error => ("[x]", "\x1b[31m"),   // Red
        };

        let reset = "\x1b[0m";

        if tag.is_empty() {
            println!("{message}");
        } else if self.colored {
            println!("{color_code}{tag}{reset} {message}");
        } else {
            println!("{tag} {message}");
        }
    }
}
