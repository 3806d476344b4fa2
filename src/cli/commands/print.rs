use std::{
    fs,
    io::{self, Write},
};

use anyhow::{Context, Result};

use super::super::{args::PrintCommand, context::TransformContext, exit_status::ExitStatus};
use crate::transform::{TransformOutcome, transform_source};

/// Write the transformed source of one file to stdout.
///
/// Unchanged and skipped files are echoed as is, so the output can always
/// replace the input.
pub fn print(cmd: PrintCommand) -> Result<ExitStatus> {
    let ctx = TransformContext::new(&cmd.common, std::slice::from_ref(&cmd.file))?;
    let path = cmd.file.to_string_lossy();
    let source =
        fs::read_to_string(&cmd.file).with_context(|| format!("Failed to read file: {}", path))?;

    let output = match transform_source(&source, &path, &ctx.options)? {
        TransformOutcome::Rewritten(result) => result.code,
        TransformOutcome::Unchanged | TransformOutcome::Skipped => source,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(ExitStatus::Success)
}
