use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, Globals, SourceMap, Span};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed JSX/TSX source file.
///
/// Owns the original text so rewrites can be spliced back by byte offset.
pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub source: String,
    /// Position of the first byte of `source` inside `source_map`.
    start_pos: BytePos,
}

impl ParsedJSX {
    /// Byte offset of `pos` inside [`ParsedJSX::source`].
    pub fn offset(&self, pos: BytePos) -> usize {
        (pos.0.saturating_sub(self.start_pos.0)) as usize
    }

    /// Byte range of `span` inside [`ParsedJSX::source`].
    pub fn range(&self, span: Span) -> (usize, usize) {
        (self.offset(span.lo), self.offset(span.hi))
    }

    /// Source text covered by `span`.
    pub fn snippet(&self, span: Span) -> &str {
        let (lo, hi) = self.range(span);
        self.source.get(lo..hi).unwrap_or_default()
    }

    /// 1-indexed line of `pos`.
    pub fn line(&self, pos: BytePos) -> usize {
        self.source_map.lookup_char_pos(pos).line
    }
}

/// Parse JSX/TSX source code string into an AST.
///
/// Every call owns a fresh `SourceMap`, so files can be parsed on parallel
/// threads without coordination. Recoverable syntax errors are reported as
/// failures too: rewriting a partially understood file is never safe.
pub fn parse_jsx_source(code: String, file_path: &str) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    let source_map: Arc<SourceMap> = Default::default();

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        let recovered = parser.take_errors();
        if let Some(error) = recovered.first() {
            return Err(anyhow!("Failed to parse {}: {:?}", file_path, error));
        }

        Ok(ParsedJSX {
            module,
            source_map: source_map.clone(),
            source: code,
            start_pos: source_file.start_pos,
        })
    })
}
