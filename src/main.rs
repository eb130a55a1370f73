//! notemerge - Merge lecture-note PDFs into a single document.
//!
//! CLI driver: parses arguments, validates them, runs the merge pipeline
//! and maps the outcome to an exit status exactly once.

use clap::Parser;
use std::io;
use std::path::Path;
use std::process;

use notemerge::cli::Cli;
use notemerge::context::RunContext;
use notemerge::deembed::{AdRemover, DeembedTool};
use notemerge::error::{FailureClass, NoteMergeError};
use notemerge::io::PdfWriter;
use notemerge::merge::Merger;
use notemerge::output::{LOG_DIR, OutputFormatter, RunLog};
use notemerge::validation::Validator;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.verbose);

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(err) => match err.class() {
            // Anything unclassified is re-raised so the runtime prints the
            // full diagnostic and exits non-zero.
            FailureClass::Unclassified => Err(anyhow::Error::new(err)),
            _ => {
                let code = err.exit_code();
                eprintln!("\n{err}");
                formatter.error("\tExiting...");
                process::exit(code);
            }
        },
    }
}

/// Run one invocation: validate, merge, write, optionally remove ads.
async fn run(cli: Cli) -> Result<(), NoteMergeError> {
    let config = cli.to_config()?;
    let formatter = OutputFormatter::new(config.verbose);

    // Logging setup comes first; the file is created with its creation line
    // and reopened in append mode once validation has passed.
    let log_path = if config.log {
        formatter.debug("Checking if the log file exists...");
        Some(RunLog::prepare(Path::new(LOG_DIR))?)
    } else {
        None
    };

    let validator = Validator::new();

    formatter.debug("Checking if the output file exists...");
    if config.output.exists() {
        let stdin = io::stdin();
        validator.confirm_overwrite(&config.output, &formatter, &mut stdin.lock())?;
    }

    validator.check_inputs(&config.inputs, &formatter)?;

    let log = match &log_path {
        Some(path) => {
            formatter.debug("Opening the log file...");
            RunLog::open(path)?
        }
        None => RunLog::disabled(),
    };

    let mut ctx = RunContext::new(config, formatter, log);
    if ctx.log.is_enabled() {
        ctx.event("Log file opened")?;
    }

    let remover = DeembedTool::new();
    let result = tokio::select! {
        result = execute(&mut ctx, &remover) => result,
        _ = tokio::signal::ctrl_c() => Err(NoteMergeError::Interrupted),
    };

    finish(ctx, result)
}

/// The merge pipeline proper: merge, write, optional ad removal.
async fn execute<A: AdRemover>(ctx: &mut RunContext, remover: &A) -> Result<(), NoteMergeError> {
    let merger = Merger::new();
    let result = merger.merge(ctx).await?;

    let output = ctx.config.output.clone();
    ctx.event(&format!("Opening the output file {}...", output.display()))?;

    let writer = PdfWriter::new();
    let write_stats = writer.save_with_stats(&result.document, &output).await?;

    ctx.event(&format!(
        "Output file {} closed ({} pages, {})",
        output.display(),
        result.statistics.pages_kept,
        write_stats.format_file_size()
    ))?;

    if ctx.config.remove_ads {
        ctx.event("Removing the ads from the pdf...")?;
        let outcome = remover.deembed(&output, ctx.config.verbose);
        if !outcome.success {
            let reason = outcome
                .error
                .unwrap_or_else(|| "the de-embedding tool reported failure".to_string());
            return Err(NoteMergeError::ad_removal_failed(reason));
        }
        ctx.event("Ads removed")?;
    }

    ctx.formatter
        .info(&format!("Successfully created {}", output.display()));

    Ok(())
}

/// Close out the run: final log lines, one per failure class.
fn finish(mut ctx: RunContext, result: Result<(), NoteMergeError>) -> Result<(), NoteMergeError> {
    match &result {
        Ok(()) => {
            if ctx.log.is_enabled() {
                ctx.event("Closing the log file...")?;
            }
            ctx.log.close()?;
        }
        Err(err) => {
            match err.class() {
                FailureClass::Interrupted => {
                    ctx.event("Operation cancelled by the user").ok();
                }
                FailureClass::ExternalTool => {
                    ctx.event(&format!("Ad removal failed: {err}")).ok();
                }
                FailureClass::Unclassified => {
                    ctx.event("An error has occurred").ok();
                }
                FailureClass::Validation => {}
            }
            if ctx.log.is_enabled() {
                ctx.event("Closing the log file...").ok();
            }
            ctx.log.close().ok();
        }
    }

    result
}
