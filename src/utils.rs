//! Common utility functions shared across the codebase.

use crate::config::TEST_FILE_SUFFIXES;

/// Checks if a path names a test file that must never be rewritten.
///
/// # Examples
///
/// ```
/// use glot_codemod::utils::is_test_file;
///
/// assert!(is_test_file("src/Button.test.tsx"));
/// assert!(is_test_file("src/api.spec.js"));
/// assert!(!is_test_file("src/Button.tsx"));
/// assert!(!is_test_file("src/testing.tsx"));
/// ```
pub fn is_test_file(path: &str) -> bool {
    TEST_FILE_SUFFIXES
        .iter()
        .any(|suffix| path.ends_with(suffix))
}

/// Returns the leading whitespace of the line containing byte `offset`.
pub fn line_indent(source: &str, offset: usize) -> &str {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line = &source[line_start..];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}

/// Checks if two byte offsets lie on the same source line.
pub fn same_line(source: &str, a: usize, b: usize) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let hi = hi.min(source.len());
    !source[lo.min(hi)..hi].contains('\n')
}

/// Where a statement ending at `offset` really ends: past a trailing
/// `// comment` on the same line, before the line terminator.
///
/// Stays at `offset` when other code follows on that line.
pub fn statement_line_end(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    let rest = &source[offset..];
    let line_len = rest.find(['\r', '\n']).unwrap_or(rest.len());
    let tail = rest[..line_len].trim_start_matches([' ', '\t']);
    if tail.is_empty() || tail.starts_with("//") {
        offset + line_len
    } else {
        offset
    }
}
