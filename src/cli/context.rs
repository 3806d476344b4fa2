use std::{collections::BTreeSet, path::PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::file_scanner::{IgnoreRules, is_scannable_file, scan_files},
    transform::TransformOptions,
};

/// Configuration and file set for one CLI invocation.
///
/// The config file is searched upward from `--source-root` (default: the
/// current directory). Without explicit paths, every scannable file under
/// the configured `includes` is selected.
pub struct TransformContext {
    pub files: BTreeSet<String>,
    /// Paths that could not be read while scanning.
    pub skipped_count: usize,
    pub options: TransformOptions,
}

impl TransformContext {
    pub fn new(common: &CommonArgs, paths: &[PathBuf]) -> Result<Self> {
        let root_dir = common
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            debug!("no config file found, using default configuration");
        }
        let config = config_result.config;

        let (files, skipped_count) = if paths.is_empty() {
            let rules = IgnoreRules::new(&root_dir, &config.ignores, config.ignore_test_files);
            let scan = scan_files(&root_dir, &config.includes, &rules);
            (scan.files, scan.skipped_count)
        } else {
            collect_paths(paths, &config)
        };

        let options = TransformOptions::from(&config);
        Ok(Self {
            files,
            skipped_count,
            options,
        })
    }
}

/// Expand explicit CLI paths: files are taken as given, directories are
/// scanned without the configured `includes`.
fn collect_paths(paths: &[PathBuf], config: &Config) -> (BTreeSet<String>, usize) {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for path in paths {
        if path.is_dir() {
            let rules = IgnoreRules::new(path, &config.ignores, config.ignore_test_files);
            let scan = scan_files(path, &[], &rules);
            files.extend(scan.files);
            skipped_count += scan.skipped_count;
        } else if path.is_file() && is_scannable_file(path) {
            files.insert(path.to_string_lossy().into_owned());
        } else if path.exists() {
            warn!(path = %path.display(), "not a JavaScript or TypeScript file, skipping");
        } else {
            skipped_count += 1;
            warn!(path = %path.display(), "path does not exist, skipping");
        }
    }

    (files, skipped_count)
}
