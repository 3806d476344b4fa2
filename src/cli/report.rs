//! Report formatting and printing utilities.
//!
//! Kept separate from the transform pipeline so the codemod can be used as
//! a library without any terminal output.

use std::io::{self, Write};

use colored::Colorize;

use crate::transform::{imports::ImportRequirement, report::RewriteReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// One file the codemod rewrote (or would rewrite).
#[derive(Debug)]
pub struct FileChange {
    pub path: String,
    pub report: RewriteReport,
    pub import: Option<ImportRequirement>,
}

/// A file that could not be read or parsed.
#[derive(Debug)]
pub struct FileError {
    pub path: String,
    pub error: String,
}

/// Print per-file changes followed by a summary line.
pub fn print_changes(changes: &[FileChange], files_checked: usize, apply: bool, verbose: bool) {
    print_changes_to(changes, files_checked, apply, verbose, &mut io::stdout().lock());
}

pub fn print_changes_to<W: Write>(
    changes: &[FileChange],
    files_checked: usize,
    apply: bool,
    verbose: bool,
    writer: &mut W,
) {
    if changes.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {} - nothing to translate",
                files_checked,
                plural(files_checked, "file", "files")
            )
            .green()
        );
        return;
    }

    for change in changes {
        let count = change.report.rewrites().len();
        let import = match change.import {
            Some(requirement) => format!(" (+ import {})", requirement.bindings().join(", ")),
            None => String::new(),
        };
        let _ = writeln!(
            writer,
            "  {} {}: {} {}{}",
            "-->".blue(),
            change.path,
            count,
            plural(count, "literal", "literals"),
            import.dimmed()
        );

        if verbose {
            for rewrite in change.report.rewrites() {
                let _ = writeln!(
                    writer,
                    "      {:>4} {} \"{}\" -> {}  {}",
                    rewrite.line.to_string().blue(),
                    "|".blue(),
                    rewrite.text,
                    rewrite.key.cyan(),
                    format!("[{}]", rewrite.kind).dimmed()
                );
            }
            let kept = change.report.already_translated();
            if kept > 0 {
                let _ = writeln!(
                    writer,
                    "      {}",
                    format!(
                        "{} {} already translated",
                        kept,
                        plural(kept, "literal", "literals")
                    )
                    .dimmed()
                );
            }
        }
    }

    let literals: usize = changes.iter().map(|c| c.report.rewrites().len()).sum();
    let _ = writeln!(writer);
    if apply {
        let _ = writeln!(
            writer,
            "{} {} {} in {} {}.",
            "Rewrote".green().bold(),
            literals,
            plural(literals, "literal", "literals"),
            changes.len(),
            plural(changes.len(), "file", "files")
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} {} in {} {}.",
            "Would rewrite".yellow().bold(),
            literals,
            plural(literals, "literal", "literals"),
            changes.len(),
            plural(changes.len(), "file", "files")
        );
        let _ = writeln!(writer, "Run with {} to rewrite these files.", "--apply".cyan());
    }
}

/// Print files that failed to parse. Details only in verbose mode.
pub fn print_file_errors(errors: &[FileError], verbose: bool) {
    print_file_errors_to(errors, verbose, &mut io::stderr().lock());
}

pub fn print_file_errors_to<W: Write>(errors: &[FileError], verbose: bool, writer: &mut W) {
    if errors.is_empty() {
        return;
    }

    if verbose {
        for error in errors {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                FAILURE_MARK.red(),
                error.path,
                error.error
            );
        }
    }

    let _ = writeln!(
        writer,
        "{} {} file(s) could not be transformed and were left unchanged{}",
        "warning:".bold().yellow(),
        errors.len(),
        if verbose {
            String::new()
        } else {
            format!(" (use {} for details)", "-v".cyan())
        }
    );
}

/// Print a warning about paths skipped while scanning.
pub fn print_skipped_paths(count: usize) {
    if count > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors",
            "warning:".bold().yellow(),
            count
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
