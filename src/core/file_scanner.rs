//! Source file discovery.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Patterns without wildcards are literal paths relative to the base directory.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Compiled `ignores` configuration.
#[derive(Debug, Default)]
pub struct IgnoreRules {
    /// Directories (or files) pruned from the walk entirely.
    literal_paths: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreRules {
    pub fn new(base_dir: &Path, patterns: &[String], ignore_test_files: bool) -> Self {
        let mut rules = Self::default();

        for p in patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => rules.globs.push(pattern),
                    Err(e) => warn!(pattern = %p, error = %e, "invalid ignore pattern"),
                }
            } else {
                rules.literal_paths.push(base_dir.join(p));
            }
        }

        if ignore_test_files {
            rules
                .globs
                .extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
        }

        rules
    }

    fn is_pruned(&self, path: &Path) -> bool {
        self.literal_paths.iter().any(|ignored| path.starts_with(ignored))
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.is_pruned(path) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.globs.iter().any(|p| p.matches(&path_str))
    }
}

/// Result of scanning files.
pub struct ScanResult {
    /// Source files to transform, sorted for stable output.
    pub files: BTreeSet<String>,
    /// Paths that could not be read during the walk.
    pub skipped_count: usize,
}

/// Collect every JS/TS source file under the `includes` of `base_dir`
/// (the whole directory when `includes` is empty) that no rule ignores.
pub fn scan_files(base_dir: &Path, includes: &[String], rules: &IgnoreRules) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    for root in resolve_includes(base_dir, includes) {
        let walker = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|entry| !rules.is_pruned(entry.path()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && is_scannable_file(path) && !rules.is_ignored(path) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    debug!(count = files.len(), "scanned source files");
    ScanResult {
        files,
        skipped_count,
    }
}

/// Directories to walk: literal includes that exist, plus the directories a
/// glob include expands to.
fn resolve_includes(base_dir: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for inc in includes {
        let full = base_dir.join(inc);
        if !is_glob_pattern(inc) {
            if full.exists() {
                roots.push(full);
            } else {
                warn!(path = %full.display(), "include path does not exist");
            }
            continue;
        }
        match glob(&full.to_string_lossy()) {
            Ok(entries) => roots.extend(entries.flatten().filter(|entry| entry.is_dir())),
            Err(e) => warn!(pattern = %inc, error = %e, "invalid include pattern"),
        }
    }
    roots
}

pub fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}
