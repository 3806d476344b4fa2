//! Rewrite engine: runs the literal matchers in a fixed order and records
//! one replacement per eligible site.

use tracing::{debug, trace};

use super::{
    edits::Edits,
    matchers::{Candidate, MatchFilters, SiteKind},
    report::{Rewrite, RewriteReport},
    scaffold::Scaffold,
};
use crate::{core::ParsedJSX, keys::stable_key};

/// Replace every eligible literal in `parsed` with a translation call.
///
/// Matchers run once each, in [`SiteKind::ORDER`]. A site whose range is
/// already claimed by an earlier rewrite is left alone.
pub fn rewrite_literals(
    parsed: &ParsedJSX,
    filters: &MatchFilters,
    scaffold: &Scaffold,
    edits: &mut Edits,
) -> RewriteReport {
    let mut report = RewriteReport::default();

    for kind in SiteKind::ORDER {
        for site in kind.collect(&parsed.module, filters) {
            match site.candidate {
                Candidate::Literal(text) => {
                    let key = stable_key(&text);
                    let (lo, hi) = parsed.range(site.span);
                    if !edits.replace(lo, hi, kind.replacement(&key, scaffold)) {
                        trace!(%kind, lo, hi, "site already rewritten");
                        continue;
                    }
                    let line = parsed.line(site.span.lo);
                    debug!(%kind, line, key = %key, "rewrote literal");
                    report.record(Rewrite {
                        kind,
                        text: text.trim().to_string(),
                        key,
                        line,
                    });
                }
                Candidate::Rewritten => report.record_already_translated(),
                Candidate::Ineligible => {}
            }
        }
    }

    report
}
