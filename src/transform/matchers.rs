//! Literal matchers: one predicate + rewrite pair per syntactic shape.
//!
//! Each matcher collects the literal sites of its shape from the original
//! tree. A site carries a tagged [`Candidate`], so a position that already
//! holds a translation call is visibly `Rewritten` rather than silently
//! failing a type check.

use std::collections::HashSet;

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    CallExpr, Callee, Expr, JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr, JSXExprContainer,
    JSXText, Lit, MemberProp, Module, Prop, PropName, PropOrSpread, Str,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::scaffold::{HOOK_NAME, Scaffold, TRANSLATE_FN, WRAPPER_NAME};

/// The four shapes of translatable literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteKind {
    /// `<p>Hello</p>`
    MarkupText,
    /// `<Input placeholder="Name" />`
    AttributeLiteral,
    /// `<Input placeholder={'Name'} />` or `<p>{'Hello'}</p>`
    ContainerLiteral,
    /// `notify('Saved')` or `notify({ message: 'Saved' })`
    CallArgument,
}

impl SiteKind {
    /// Order in which the rewrite engine runs the matchers.
    pub const ORDER: [SiteKind; 4] = [
        SiteKind::MarkupText,
        SiteKind::AttributeLiteral,
        SiteKind::ContainerLiteral,
        SiteKind::CallArgument,
    ];

    /// Collect every site of this shape in document order.
    pub fn collect(self, module: &Module, filters: &MatchFilters) -> Vec<LiteralSite> {
        let mut collector = SiteCollector {
            kind: self,
            filters,
            in_ignored_attr: false,
            sites: Vec::new(),
        };
        module.visit_with(&mut collector);
        collector.sites
    }

    /// Replacement text for an eligible site of this shape.
    pub fn replacement(self, key: &str, scaffold: &Scaffold) -> String {
        let call = scaffold.translation_call(key);
        match self {
            SiteKind::MarkupText | SiteKind::AttributeLiteral => format!("{{{}}}", call),
            SiteKind::ContainerLiteral | SiteKind::CallArgument => call,
        }
    }
}

impl std::fmt::Display for SiteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SiteKind::MarkupText => "jsx-text",
            SiteKind::AttributeLiteral => "jsx-attribute",
            SiteKind::ContainerLiteral => "jsx-expression",
            SiteKind::CallArgument => "call-argument",
        };
        f.write_str(name)
    }
}

/// What currently occupies a literal position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A plain literal whose text is non-empty after trimming.
    Literal(String),
    /// Already a translation call; never rewritten again.
    Rewritten,
    /// Anything else: empty or whitespace-only text, non-string values.
    Ineligible,
}

impl Candidate {
    fn from_text(text: &str) -> Self {
        if text.trim().is_empty() {
            Candidate::Ineligible
        } else {
            Candidate::Literal(text.to_string())
        }
    }

    fn from_str_lit(s: &Str) -> Self {
        s.value
            .as_str()
            .map(Self::from_text)
            .unwrap_or(Candidate::Ineligible)
    }

    pub fn from_expr(expr: &Expr) -> Self {
        match expr {
            Expr::Lit(Lit::Str(s)) => Self::from_str_lit(s),
            Expr::Call(call) if is_translation_call(call) => Candidate::Rewritten,
            _ => Candidate::Ineligible,
        }
    }
}

/// A position in the tree that holds (or held) a literal of one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralSite {
    pub kind: SiteKind,
    /// Span replaced when the site is rewritten.
    pub span: Span,
    pub candidate: Candidate,
}

/// Name-based opt-outs layered over the shape-driven matchers.
#[derive(Debug, Default)]
pub struct MatchFilters {
    pub ignored_callees: HashSet<String>,
    pub ignored_attributes: HashSet<String>,
}

/// Checks whether `call` is `t(...)`.
pub fn is_translation_call(call: &CallExpr) -> bool {
    callee_name(&call.callee).as_deref() == Some(TRANSLATE_FN)
}

/// Dotted name of a callee: `notify`, `toast.error`. Computed or complex
/// callees have no name.
pub fn callee_name(callee: &Callee) -> Option<String> {
    let Callee::Expr(expr) = callee else {
        return None;
    };
    match &**expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => {
            let MemberProp::Ident(prop) = &member.prop else {
                return None;
            };
            let Expr::Ident(obj) = &*member.obj else {
                return None;
            };
            Some(format!("{}.{}", obj.sym, prop.sym))
        }
        _ => None,
    }
}

fn attr_name(attr: &JSXAttr) -> String {
    match &attr.name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

/// Visitor shared by all four matchers; `kind` selects which shape it records.
struct SiteCollector<'f> {
    kind: SiteKind,
    filters: &'f MatchFilters,
    /// Inside an attribute listed in `ignoredAttributes`.
    in_ignored_attr: bool,
    sites: Vec<LiteralSite>,
}

impl SiteCollector<'_> {
    fn push(&mut self, span: Span, candidate: Candidate) {
        if candidate == Candidate::Ineligible {
            return;
        }
        self.sites.push(LiteralSite {
            kind: self.kind,
            span,
            candidate,
        });
    }

    /// String arguments of these calls are never user-facing text.
    fn is_skipped_callee(&self, callee: &Callee) -> bool {
        if matches!(callee, Callee::Import(_)) {
            return true;
        }
        match callee_name(callee) {
            Some(name) => {
                matches!(name.as_str(), TRANSLATE_FN | HOOK_NAME | WRAPPER_NAME)
                    || self.filters.ignored_callees.contains(&name)
            }
            None => false,
        }
    }

    fn collect_call_arguments(&mut self, call: &CallExpr) {
        if self.is_skipped_callee(&call.callee) {
            return;
        }
        for arg in &call.args {
            if arg.spread.is_some() {
                continue;
            }
            match &*arg.expr {
                Expr::Object(object) => {
                    for prop in &object.props {
                        let PropOrSpread::Prop(prop) = prop else {
                            continue;
                        };
                        let Prop::KeyValue(kv) = &**prop else {
                            continue;
                        };
                        if matches!(kv.key, PropName::Computed(_)) {
                            continue;
                        }
                        self.push(kv.value.span(), Candidate::from_expr(&kv.value));
                    }
                }
                expr => self.push(expr.span(), Candidate::from_expr(expr)),
            }
        }
    }
}

impl Visit for SiteCollector<'_> {
    fn visit_jsx_text(&mut self, node: &JSXText) {
        if self.kind == SiteKind::MarkupText {
            self.push(node.span, Candidate::from_text(node.value.as_str()));
        }
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let prev = self.in_ignored_attr;
        self.in_ignored_attr = self.filters.ignored_attributes.contains(&attr_name(node));

        if self.kind == SiteKind::AttributeLiteral
            && !self.in_ignored_attr
            && let Some(JSXAttrValue::Str(s)) = &node.value
        {
            self.push(s.span, Candidate::from_str_lit(s));
        }

        node.visit_children_with(self);
        self.in_ignored_attr = prev;
    }

    fn visit_jsx_expr_container(&mut self, node: &JSXExprContainer) {
        if self.kind == SiteKind::ContainerLiteral
            && !self.in_ignored_attr
            && let JSXExpr::Expr(expr) = &node.expr
        {
            self.push(expr.span(), Candidate::from_expr(expr));
        }

        // Attribute filters stop at the container boundary.
        let prev = self.in_ignored_attr;
        self.in_ignored_attr = false;
        node.visit_children_with(self);
        self.in_ignored_attr = prev;
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if self.kind == SiteKind::CallArgument {
            self.collect_call_arguments(node);
        }
        node.visit_children_with(self);
    }
}
