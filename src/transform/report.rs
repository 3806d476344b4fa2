use super::matchers::SiteKind;

/// One literal replaced by a translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub kind: SiteKind,
    /// The literal's text, trimmed.
    pub text: String,
    pub key: String,
    /// 1-indexed source line of the literal.
    pub line: usize,
}

/// Result of running the literal matchers over one file.
///
/// Starts empty for every file and only grows; whether any rewrite was
/// recorded decides if export wiring and import synthesis run at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    rewrites: Vec<Rewrite>,
    /// Sites skipped because they already hold a translation call.
    already_translated: usize,
}

impl RewriteReport {
    pub fn record(&mut self, rewrite: Rewrite) {
        self.rewrites.push(rewrite);
    }

    pub fn record_already_translated(&mut self) {
        self.already_translated += 1;
    }

    pub fn translation_used(&self) -> bool {
        !self.rewrites.is_empty()
    }

    pub fn rewrites(&self) -> &[Rewrite] {
        &self.rewrites
    }

    pub fn already_translated(&self) -> usize {
        self.already_translated
    }

    pub fn count(&self, kind: SiteKind) -> usize {
        self.rewrites.iter().filter(|r| r.kind == kind).count()
    }
}
