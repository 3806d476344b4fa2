//! Import synthesis for the translation bindings.

use swc_common::Spanned;
use swc_ecma_ast::{Expr, Lit, Module, ModuleDecl, ModuleItem, Stmt};
use tracing::debug;

use super::{
    edits::Edits,
    scaffold::{HOOK_NAME, I18N_MODULE, Scaffold, WRAPPER_NAME},
    wiring::ExportWiring,
};
use crate::{core::ParsedJSX, utils::statement_line_end};

/// Bindings the synthesized import must expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportRequirement {
    HookOnly,
    WrapperOnly,
    Both,
}

impl ImportRequirement {
    /// `None` when the export was left unwired.
    pub fn from_wiring(wiring: ExportWiring) -> Option<Self> {
        match (wiring.hook_in_use, wiring.wrapper_in_use) {
            (true, false) => Some(ImportRequirement::HookOnly),
            (false, true) => Some(ImportRequirement::WrapperOnly),
            (true, true) => Some(ImportRequirement::Both),
            (false, false) => None,
        }
    }

    pub fn bindings(self) -> &'static [&'static str] {
        match self {
            ImportRequirement::HookOnly => &[HOOK_NAME],
            ImportRequirement::WrapperOnly => &[WRAPPER_NAME],
            ImportRequirement::Both => &[HOOK_NAME, WRAPPER_NAME],
        }
    }

    pub fn statement(self, scaffold: &Scaffold) -> String {
        scaffold.import_statement(self.bindings())
    }
}

/// Checks whether the module already imports anything from the i18n module.
pub fn has_i18n_import(module: &Module) -> bool {
    module.body.iter().any(|item| {
        matches!(
            item,
            ModuleItem::ModuleDecl(ModuleDecl::Import(import))
                if import.src.value.as_str() == Some(I18N_MODULE)
        )
    })
}

fn is_directive(item: &ModuleItem) -> bool {
    let ModuleItem::Stmt(Stmt::Expr(stmt)) = item else {
        return false;
    };
    matches!(&*stmt.expr, Expr::Lit(Lit::Str(_)))
}

/// Add the import `wiring` requires, unless one from the i18n module exists.
///
/// The statement goes after the last import declaration; without imports it
/// becomes the first statement after the directive prologue. Returns the
/// requirement that was inserted.
pub fn ensure_import(
    parsed: &ParsedJSX,
    wiring: ExportWiring,
    scaffold: &Scaffold,
    edits: &mut Edits,
) -> Option<ImportRequirement> {
    let requirement = ImportRequirement::from_wiring(wiring)?;
    let module = &parsed.module;
    if has_i18n_import(module) {
        debug!("i18n import already present");
        return None;
    }

    let lt = scaffold.line_terminator();
    let statement = requirement.statement(scaffold);

    let last_import = module.body.iter().rev().find_map(|item| match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => Some(import.span),
        _ => None,
    });

    if let Some(span) = last_import {
        let end = statement_line_end(&parsed.source, parsed.offset(span.hi));
        edits.insert(end, format!("{lt}{statement}"));
    } else if let Some(first) = module.body.iter().find(|item| !is_directive(item)) {
        edits.insert(parsed.offset(first.span().lo), format!("{statement}{lt}"));
    } else if let Some(last) = module.body.last() {
        edits.insert(parsed.offset(last.span().hi), format!("{lt}{statement}"));
    } else {
        edits.insert(0, format!("{statement}{lt}"));
    }

    debug!(?requirement, "added i18n import");
    Some(requirement)
}
