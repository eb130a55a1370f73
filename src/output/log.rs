//! Per-run log file handling.
//!
//! Each logged run appends timestamped lines to `./logs/log_<pid>.txt`.
//! The file is created (truncated) with one creation line during argument
//! validation, then reopened in append mode for the rest of the run. Lines
//! are plain text, append-only, and never read back by the program.

use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default directory for run logs, relative to the working directory.
pub const LOG_DIR: &str = "./logs";

/// Timestamp format used for every log line.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Append-only log file for a single run.
///
/// A disabled instance swallows every append so callers never need to branch
/// on whether logging was requested.
#[derive(Debug)]
pub struct RunLog {
    file: Option<File>,
    path: Option<PathBuf>,
}

impl RunLog {
    /// Create a no-op log that discards every line.
    pub fn disabled() -> Self {
        Self {
            file: None,
            path: None,
        }
    }

    /// Whether this log actually writes anywhere.
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Path of the log file, if logging is enabled.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the log directory and file for this run.
    ///
    /// Ensures `dir` exists (created with mode `0o777` on Unix), truncates
    /// `log_<pid>.txt` inside it, and writes the creation line. The file is
    /// closed again; reopen it with [`RunLog::open`] for the rest of the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn prepare(dir: &Path) -> io::Result<PathBuf> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(dir, fs::Permissions::from_mode(0o777))?;
            }
        }

        let path = dir.join(format!("log_{}.txt", std::process::id()));
        let mut file = File::create(&path)?;
        writeln!(file, "{} Log file created", timestamp())?;
        file.flush()?;

        Ok(path)
    }

    /// Reopen a prepared log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for appending.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().append(true).open(path)?;
        Ok(Self {
            file: Some(file),
            path: Some(path.to_path_buf()),
        })
    }

    /// Append one timestamped line.
    ///
    /// A disabled log ignores the message.
    ///
    /// # Errors
    ///
    /// Returns an error if the line cannot be written.
    pub fn append(&mut self, message: &str) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{} {message}", timestamp())?;
            file.flush()?;
        }
        Ok(())
    }

    /// Flush and close the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush fails.
    pub fn close(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Current local time in the log line format, bracketed.
fn timestamp() -> String {
    format!("[{}]", Local::now().format(TIMESTAMP_FORMAT))
}
