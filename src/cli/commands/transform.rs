//! Transform command - Replace literal UI text with translation calls.
//!
//! Files are read and transformed in parallel; each file owns its own parse
//! tree, so no state crosses file boundaries. A file that fails to parse is
//! reported and left untouched while the rest of the batch proceeds.
//!
//! Use `--apply` to write the rewritten files (default is dry-run mode).

use std::fs;

use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

use super::super::{
    args::TransformCommand,
    context::TransformContext,
    exit_status::ExitStatus,
    report::{self, FileChange, FileError},
};
use crate::transform::{TransformOptions, TransformOutcome, TransformResult, transform_source};

pub fn transform(cmd: TransformCommand) -> Result<ExitStatus> {
    let ctx = TransformContext::new(&cmd.common, &cmd.paths)?;
    let verbose = cmd.common.verbose;
    report::print_skipped_paths(ctx.skipped_count);

    let outcomes: Vec<(String, Result<TransformOutcome>)> = ctx
        .files
        .par_iter()
        .map(|path| (path.clone(), transform_file(path, &ctx.options)))
        .collect();

    let mut changes = Vec::new();
    let mut errors = Vec::new();

    for (path, outcome) in outcomes {
        match outcome {
            Ok(TransformOutcome::Rewritten(TransformResult {
                code,
                report,
                import,
                ..
            })) => {
                if cmd.apply {
                    fs::write(&path, code)
                        .with_context(|| format!("Failed to write file: {}", path))?;
                }
                changes.push(FileChange {
                    path,
                    report,
                    import,
                });
            }
            Ok(TransformOutcome::Unchanged) | Ok(TransformOutcome::Skipped) => {}
            Err(error) => {
                debug!(path = %path, error = %error, "transform failed");
                errors.push(FileError {
                    path,
                    error: error.to_string(),
                });
            }
        }
    }

    report::print_changes(&changes, ctx.files.len(), cmd.apply, verbose);
    report::print_file_errors(&errors, verbose);

    // In dry-run mode, pending rewrites are "Failure" (exit 1)
    // to signal that there's work to be done.
    if !errors.is_empty() {
        Ok(ExitStatus::Error)
    } else if !changes.is_empty() && !cmd.apply {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn transform_file(path: &str, options: &TransformOptions) -> Result<TransformOutcome> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    transform_source(&source, path, options)
}
