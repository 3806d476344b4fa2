//! Resolves an exported identifier to the function that declares it.

use swc_common::{BytePos, Span, Spanned};
use swc_ecma_ast::{
    ArrowExpr, BlockStmt, BlockStmtOrExpr, Callee, DefaultDecl, Decl, ExportDefaultDecl, Expr,
    FnDecl, Function, Module, ObjectPatProp, Pat, PropName, Stmt, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::scaffold::{HOOK_NAME, TRANSLATE_FN};

/// Body of a resolved function, reduced to the positions the wiring needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionBody {
    /// `{ ... }`: `span` starts at the opening brace.
    Block {
        span: Span,
        first_stmt: Option<Span>,
        /// The body already binds the translation function via the hook.
        has_hook: bool,
    },
    /// Concise arrow body: `() => <div />`.
    Expr { span: Span },
}

/// A function that can receive the hook binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionTarget {
    pub name: String,
    /// Start of the declaration; its line sets the indentation of new blocks.
    pub anchor: BytePos,
    pub body: FunctionBody,
}

impl FunctionTarget {
    pub fn has_hook(&self) -> bool {
        matches!(self.body, FunctionBody::Block { has_hook: true, .. })
    }
}

/// Find the function `name` refers to, in document order.
///
/// Matches a function declaration with that name, or a function or arrow
/// expression initializing a variable declared with that name. Functions
/// without a body (overload signatures, `declare function`) never match.
pub fn find_function(module: &Module, name: &str) -> Option<FunctionTarget> {
    let mut finder = FunctionFinder { name, found: None };
    module.visit_with(&mut finder);
    finder.found
}

/// Checks whether `stmt` binds the translation function from the hook:
/// `const { t } = useTranslation()` or `const [t] = useTranslation()`.
///
/// A hook call that binds anything else (`{ t: tr }`, `i18n`) leaves `t`
/// unbound and does not count.
pub fn is_hook_binding(stmt: &Stmt) -> bool {
    let Stmt::Decl(Decl::Var(var)) = stmt else {
        return false;
    };
    var.decls
        .iter()
        .any(|decl| is_hook_call(decl) && binds_translate_fn(&decl.name))
}

fn is_hook_call(decl: &VarDeclarator) -> bool {
    let Some(init) = &decl.init else {
        return false;
    };
    let Expr::Call(call) = &**init else {
        return false;
    };
    let Callee::Expr(callee) = &call.callee else {
        return false;
    };
    matches!(&**callee, Expr::Ident(ident) if ident.sym == HOOK_NAME)
}

fn binds_translate_fn(pat: &Pat) -> bool {
    match pat {
        Pat::Object(object) => object.props.iter().any(|prop| match prop {
            ObjectPatProp::Assign(assign) => assign.key.id.sym == TRANSLATE_FN,
            ObjectPatProp::KeyValue(kv) => {
                matches!(&kv.key, PropName::Ident(key) if key.sym == TRANSLATE_FN)
                    && matches!(&*kv.value, Pat::Ident(value) if value.id.sym == TRANSLATE_FN)
            }
            ObjectPatProp::Rest(_) => false,
        }),
        Pat::Array(array) => matches!(
            array.elems.first(),
            Some(Some(Pat::Ident(first))) if first.id.sym == TRANSLATE_FN
        ),
        _ => false,
    }
}

fn block_body(block: &BlockStmt) -> FunctionBody {
    FunctionBody::Block {
        span: block.span,
        first_stmt: block.stmts.first().map(|stmt| stmt.span()),
        has_hook: block.stmts.iter().any(is_hook_binding),
    }
}

fn function_target(name: &str, anchor: BytePos, function: &Function) -> Option<FunctionTarget> {
    let body = function.body.as_ref()?;
    Some(FunctionTarget {
        name: name.to_string(),
        anchor,
        body: block_body(body),
    })
}

fn arrow_target(name: &str, anchor: BytePos, arrow: &ArrowExpr) -> FunctionTarget {
    let body = match &*arrow.body {
        BlockStmtOrExpr::BlockStmt(block) => block_body(block),
        BlockStmtOrExpr::Expr(expr) => FunctionBody::Expr { span: expr.span() },
    };
    FunctionTarget {
        name: name.to_string(),
        anchor,
        body,
    }
}

struct FunctionFinder<'n> {
    name: &'n str,
    found: Option<FunctionTarget>,
}

impl Visit for FunctionFinder<'_> {
    fn visit_fn_decl(&mut self, node: &FnDecl) {
        if self.found.is_some() {
            return;
        }
        if node.ident.sym == self.name {
            self.found = function_target(self.name, node.function.span.lo, &node.function);
            if self.found.is_some() {
                return;
            }
        }
        node.visit_children_with(self);
    }

    fn visit_export_default_decl(&mut self, node: &ExportDefaultDecl) {
        if self.found.is_some() {
            return;
        }
        if let DefaultDecl::Fn(fn_expr) = &node.decl
            && let Some(ident) = &fn_expr.ident
            && ident.sym == self.name
        {
            self.found = function_target(self.name, node.span.lo, &fn_expr.function);
            if self.found.is_some() {
                return;
            }
        }
        node.visit_children_with(self);
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        if self.found.is_some() {
            return;
        }
        if let Pat::Ident(binding) = &node.name
            && binding.id.sym == self.name
            && let Some(init) = &node.init
        {
            let anchor = node.span.lo;
            self.found = match &**init {
                Expr::Arrow(arrow) => Some(arrow_target(self.name, anchor, arrow)),
                Expr::Fn(fn_expr) => function_target(self.name, anchor, &fn_expr.function),
                _ => None,
            };
            if self.found.is_some() {
                return;
            }
        }
        node.visit_children_with(self);
    }
}
