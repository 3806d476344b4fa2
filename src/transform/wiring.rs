//! Export wiring: brings `t` into scope for the default export, either by
//! injecting the hook binding into the exported function or by wrapping the
//! export in the higher-order wrapper.

use swc_common::Span;
use swc_ecma_ast::{CallExpr, Callee, Expr, Module, ModuleDecl, ModuleItem};
use tracing::debug;

use super::{
    edits::Edits,
    resolve::{FunctionBody, FunctionTarget, find_function},
    scaffold::{INDENT_UNIT, Scaffold, WRAPPER_NAME},
};
use crate::{
    core::ParsedJSX,
    utils::{line_indent, same_line},
};

/// Shape of the module's `export default` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportShape {
    /// `export default Name`
    Identifier { name: String, span: Span },
    /// `export default someCall(...)`
    Call {
        span: Span,
        /// Callee is the wrapper itself: `withTranslation(...)` or
        /// `withTranslation(...)(...)`.
        already_wrapped: bool,
        /// Names of identifier arguments, in order.
        identifier_args: Vec<String>,
    },
    /// Anything else, including a module with no default export.
    Other,
}

impl ExportShape {
    pub fn of_module(module: &Module) -> Self {
        let Some(expr) = module.body.iter().find_map(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => Some(&*export.expr),
            _ => None,
        }) else {
            return ExportShape::Other;
        };

        match unwrap_parens(expr) {
            Expr::Ident(ident) => ExportShape::Identifier {
                name: ident.sym.to_string(),
                span: ident.span,
            },
            Expr::Call(call) => ExportShape::Call {
                span: call.span,
                already_wrapped: is_wrapper_call(call),
                identifier_args: call
                    .args
                    .iter()
                    .filter(|arg| arg.spread.is_none())
                    .filter_map(|arg| match unwrap_parens(&arg.expr) {
                        Expr::Ident(ident) => Some(ident.sym.to_string()),
                        _ => None,
                    })
                    .collect(),
            },
            _ => ExportShape::Other,
        }
    }
}

fn unwrap_parens(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(paren) = expr {
        expr = &paren.expr;
    }
    expr
}

fn is_wrapper_call(call: &CallExpr) -> bool {
    let Callee::Expr(callee) = &call.callee else {
        return false;
    };
    match unwrap_parens(callee) {
        Expr::Ident(ident) => ident.sym == WRAPPER_NAME,
        Expr::Call(inner) => is_wrapper_call(inner),
        _ => false,
    }
}

/// The single wiring action chosen for an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WiringPlan {
    InjectHook(FunctionTarget),
    WrapIdentifier { span: Span, name: String },
    WrapCall { span: Span },
    AlreadyWrapped,
    Untouched,
}

/// Decide how to wire `shape`. Hook injection is always preferred: a
/// resolvable function suppresses the wrapper.
pub fn plan_wiring(
    shape: &ExportShape,
    resolve: impl Fn(&str) -> Option<FunctionTarget>,
) -> WiringPlan {
    match shape {
        ExportShape::Identifier { name, span } => match resolve(name) {
            Some(target) => WiringPlan::InjectHook(target),
            None => WiringPlan::WrapIdentifier {
                span: *span,
                name: name.clone(),
            },
        },
        ExportShape::Call {
            already_wrapped: true,
            ..
        } => WiringPlan::AlreadyWrapped,
        ExportShape::Call {
            span,
            identifier_args,
            ..
        } => identifier_args
            .iter()
            .find_map(|name| resolve(name))
            .map(WiringPlan::InjectHook)
            .unwrap_or(WiringPlan::WrapCall { span: *span }),
        ExportShape::Other => WiringPlan::Untouched,
    }
}

/// Which translation bindings the file ends up using.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportWiring {
    pub hook_in_use: bool,
    pub wrapper_in_use: bool,
}

/// Record the edits for `plan`.
pub fn apply_wiring(
    plan: &WiringPlan,
    parsed: &ParsedJSX,
    scaffold: &Scaffold,
    edits: &mut Edits,
) -> ExportWiring {
    match plan {
        WiringPlan::InjectHook(target) => {
            if target.has_hook() {
                debug!(function = %target.name, "hook binding already present");
            } else {
                inject_hook(target, parsed, scaffold, edits);
                debug!(function = %target.name, "injected hook binding");
            }
            ExportWiring {
                hook_in_use: true,
                wrapper_in_use: false,
            }
        }
        WiringPlan::WrapIdentifier { span, name } => {
            let (lo, hi) = parsed.range(*span);
            edits.replace(lo, hi, scaffold.wrapper_call(name));
            debug!(export = %name, "wrapped default export");
            ExportWiring {
                hook_in_use: false,
                wrapper_in_use: true,
            }
        }
        WiringPlan::WrapCall { span } => {
            let (lo, hi) = parsed.range(*span);
            edits.insert(lo, scaffold.wrapper_open());
            edits.insert(hi, ")");
            debug!("wrapped default export call");
            ExportWiring {
                hook_in_use: false,
                wrapper_in_use: true,
            }
        }
        WiringPlan::AlreadyWrapped => {
            debug!("default export already wrapped");
            ExportWiring {
                hook_in_use: false,
                wrapper_in_use: true,
            }
        }
        WiringPlan::Untouched => {
            debug!("no recognizable default export, skipping wiring");
            ExportWiring::default()
        }
    }
}

fn inject_hook(
    target: &FunctionTarget,
    parsed: &ParsedJSX,
    scaffold: &Scaffold,
    edits: &mut Edits,
) {
    let source = parsed.source.as_str();
    let lt = scaffold.line_terminator();
    let binding = scaffold.hook_binding();
    let outer = line_indent(source, parsed.offset(target.anchor));

    match &target.body {
        FunctionBody::Block {
            span, first_stmt, ..
        } => {
            let brace = parsed.offset(span.lo);
            let after_brace = brace + 1;
            let text = match first_stmt {
                Some(stmt) => {
                    let stmt_lo = parsed.offset(stmt.lo);
                    if same_line(source, brace, stmt_lo) {
                        format!(" {}", binding)
                    } else {
                        format!("{}{}{}", lt, line_indent(source, stmt_lo), binding)
                    }
                }
                None => format!("{lt}{outer}{INDENT_UNIT}{binding}{lt}{outer}"),
            };
            edits.insert(after_brace, text);
        }
        FunctionBody::Expr { span } => {
            let (lo, hi) = parsed.range(*span);
            let inner = format!("{}{}", outer, INDENT_UNIT);
            edits.insert(lo, format!("{{{lt}{inner}{binding}{lt}{inner}return "));
            edits.insert(hi, format!(";{lt}{outer}}}"));
        }
    }
}

/// Resolve the default export of `parsed` and record the wiring edits.
pub fn wire_default_export(
    parsed: &ParsedJSX,
    scaffold: &Scaffold,
    edits: &mut Edits,
) -> ExportWiring {
    let shape = ExportShape::of_module(&parsed.module);
    let plan = plan_wiring(&shape, |name| find_function(&parsed.module, name));
    apply_wiring(&plan, parsed, scaffold, edits)
}
