//! The i18n codemod: literal rewriting, export wiring and import synthesis.
//!
//! ## Pipeline
//!
//! 1. `engine` runs the four `matchers` and records replacements
//! 2. If any literal was rewritten, `wiring` brings `t` into scope for the
//!    default export (hook first, wrapper as fallback)
//! 3. `imports` adds the matching `react-i18next` import
//!
//! All passes read the original tree and record byte-range `edits`, which are
//! spliced into the source once at the end.

pub mod edits;
pub mod engine;
pub mod imports;
pub mod matchers;
pub mod report;
pub mod resolve;
pub mod scaffold;
pub mod wiring;

use anyhow::Result;
use tracing::debug;

use self::{
    edits::Edits,
    engine::rewrite_literals,
    imports::{ImportRequirement, ensure_import},
    matchers::MatchFilters,
    report::RewriteReport,
    scaffold::Scaffold,
    wiring::{ExportWiring, wire_default_export},
};
use crate::{
    config::{Config, PrintOptions},
    core::parse_jsx_source,
    utils::is_test_file,
};

/// Options for transforming a single file.
#[derive(Debug)]
pub struct TransformOptions {
    pub print: PrintOptions,
    pub filters: MatchFilters,
    /// Pass test files through untouched.
    pub skip_test_files: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            print: PrintOptions::default(),
            filters: MatchFilters::default(),
            skip_test_files: true,
        }
    }
}

impl From<&Config> for TransformOptions {
    fn from(config: &Config) -> Self {
        Self {
            print: config.print_options.clone(),
            filters: MatchFilters {
                ignored_callees: config.ignored_callees.iter().cloned().collect(),
                ignored_attributes: config.ignored_attributes.iter().cloned().collect(),
            },
            skip_test_files: config.ignore_test_files,
        }
    }
}

/// A file the codemod changed.
#[derive(Debug)]
pub struct TransformResult {
    pub code: String,
    pub report: RewriteReport,
    pub wiring: ExportWiring,
    /// Import that was added, if any.
    pub import: Option<ImportRequirement>,
}

#[derive(Debug)]
pub enum TransformOutcome {
    Rewritten(TransformResult),
    /// No literal qualified; the original file must be left as is.
    Unchanged,
    /// Excluded test file, never parsed.
    Skipped,
}

/// Transform one source file.
///
/// Returns `Unchanged` when no literal qualified, so a second run over the
/// output of a first run is a no-op. Parse failures are returned as errors
/// and nothing is rewritten.
pub fn transform_source(
    source: &str,
    path: &str,
    options: &TransformOptions,
) -> Result<TransformOutcome> {
    if options.skip_test_files && is_test_file(path) {
        debug!(path, "skipping test file");
        return Ok(TransformOutcome::Skipped);
    }

    let parsed = parse_jsx_source(source.to_string(), path)?;
    let scaffold = Scaffold::new(&options.print);
    let mut edits = Edits::new();

    let report = rewrite_literals(&parsed, &options.filters, &scaffold, &mut edits);
    if !report.translation_used() {
        return Ok(TransformOutcome::Unchanged);
    }

    let wiring = wire_default_export(&parsed, &scaffold, &mut edits);
    let import = ensure_import(&parsed, wiring, &scaffold, &mut edits);
    let code = edits.apply(&parsed.source)?;

    debug!(
        path,
        rewrites = report.rewrites().len(),
        already_translated = report.already_translated(),
        "transformed file"
    );

    Ok(TransformOutcome::Rewritten(TransformResult {
        code,
        report,
        wiring,
        import,
    }))
}
