//! Pending rewrites of one source file.
//!
//! Every change the codemod makes is recorded here as a byte-range
//! replacement or a zero-width insertion against the original text, then
//! spliced in a single forward pass. Untouched code is reproduced
//! byte-for-byte.

use anyhow::{Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Edit {
    start: usize,
    end: usize,
    text: String,
    /// Insertion order; breaks ties between insertions at the same offset.
    seq: usize,
}

impl Edit {
    fn is_insertion(&self) -> bool {
        self.start == self.end
    }
}

/// Accumulated, non-overlapping edits for a single file.
#[derive(Debug, Default)]
pub struct Edits {
    edits: Vec<Edit>,
}

impl Edits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `start..end` with `text`.
    ///
    /// Returns false (and records nothing) if the range overlaps an existing
    /// replacement or would swallow an existing insertion point.
    pub fn replace(&mut self, start: usize, end: usize, text: impl Into<String>) -> bool {
        if start >= end {
            return self.insert(start, text);
        }
        let conflicts = self.edits.iter().any(|edit| {
            if edit.is_insertion() {
                start < edit.start && edit.start < end
            } else {
                start < edit.end && edit.start < end
            }
        });
        if conflicts {
            return false;
        }
        self.push(start, end, text.into());
        true
    }

    /// Insert `text` at `at`.
    ///
    /// Returns false if `at` lies strictly inside an existing replacement.
    pub fn insert(&mut self, at: usize, text: impl Into<String>) -> bool {
        let conflicts = self
            .edits
            .iter()
            .any(|edit| !edit.is_insertion() && edit.start < at && at < edit.end);
        if conflicts {
            return false;
        }
        self.push(at, at, text.into());
        true
    }

    fn push(&mut self, start: usize, end: usize, text: String) {
        let seq = self.edits.len();
        self.edits.push(Edit {
            start,
            end,
            text,
            seq,
        });
    }

    /// Splice all edits into `source`.
    pub fn apply(&self, source: &str) -> Result<String> {
        let mut ordered: Vec<&Edit> = self.edits.iter().collect();
        ordered.sort_by_key(|edit| (edit.start, edit.end, edit.seq));

        let added: usize = ordered.iter().map(|edit| edit.text.len()).sum();
        let mut out = String::with_capacity(source.len() + added);
        let mut cursor = 0;

        for edit in ordered {
            let Some(kept) = source.get(cursor..edit.start) else {
                bail!(
                    "Edit range {}..{} is out of bounds or splits a character",
                    edit.start,
                    edit.end
                );
            };
            if source.get(edit.start..edit.end).is_none() {
                bail!(
                    "Edit range {}..{} is out of bounds or splits a character",
                    edit.start,
                    edit.end
                );
            }
            out.push_str(kept);
            out.push_str(&edit.text);
            cursor = edit.end;
        }

        out.push_str(&source[cursor..]);
        Ok(out)
    }
}
