//! Stable translation key derivation.
//!
//! Keys are derived purely from the literal's text, so identical text anywhere
//! in a project always maps to the same key.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// Maximum key length, in characters.
const MAX_KEY_CHARS: usize = 40;

/// Derive the translation key for a piece of user-facing text.
///
/// The text is trimmed and lowercased, every run of characters that are not
/// letters or digits becomes a single `_`, and the result is capped at
/// [`MAX_KEY_CHARS`] characters. Text with no letters or digits at all keeps
/// its trimmed form (with whitespace runs collapsed) as the key.
///
/// # Examples
///
/// ```
/// use glot_codemod::keys::stable_key;
///
/// assert_eq!(stable_key("Hello"), "hello");
/// assert_eq!(stable_key("  Save changes!  "), "save_changes");
/// assert_eq!(stable_key("你好"), "你好");
/// assert_eq!(stable_key("--"), "--");
/// ```
pub fn stable_key(text: &str) -> String {
    let trimmed = text.trim();
    let lowered = trimmed.to_lowercase();
    let slug = NON_WORD_REGEX.replace_all(&lowered, "_");
    let capped: String = slug.trim_matches('_').chars().take(MAX_KEY_CHARS).collect();
    let key = capped.trim_end_matches('_');

    if key.is_empty() {
        trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        key.to_string()
    }
}
