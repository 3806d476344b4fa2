//! Fixed names and code snippets the codemod emits.

use crate::config::PrintOptions;

/// Module every synthesized import is drawn from.
pub const I18N_MODULE: &str = "react-i18next";

/// Translation function called with a single key argument.
pub const TRANSLATE_FN: &str = "t";

/// Hook that exposes the translation function inside a component body.
pub const HOOK_NAME: &str = "useTranslation";

/// Higher-order wrapper that injects the translation function as a prop.
pub const WRAPPER_NAME: &str = "withTranslation";

/// Indentation unit for lines the codemod adds inside new blocks.
pub const INDENT_UNIT: &str = "  ";

/// Renders snippets according to the configured print options.
#[derive(Debug, Clone, Copy)]
pub struct Scaffold<'a> {
    options: &'a PrintOptions,
}

impl<'a> Scaffold<'a> {
    pub fn new(options: &'a PrintOptions) -> Self {
        Self { options }
    }

    pub fn line_terminator(&self) -> &'a str {
        &self.options.line_terminator
    }

    /// A string literal in the configured quote style.
    pub fn string_literal(&self, value: &str) -> String {
        let quote = self.options.quote.as_char();
        let mut out = String::with_capacity(value.len() + 2);
        out.push(quote);
        for c in value.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c => out.push(c),
            }
        }
        out.push(quote);
        out
    }

    /// `t('key')`
    pub fn translation_call(&self, key: &str) -> String {
        format!("{}({})", TRANSLATE_FN, self.string_literal(key))
    }

    /// `const { t } = useTranslation();`
    pub fn hook_binding(&self) -> String {
        format!("const {{ {} }} = {}();", TRANSLATE_FN, HOOK_NAME)
    }

    /// Opening half of the wrapper double invocation: `withTranslation()(`
    pub fn wrapper_open(&self) -> String {
        format!("{}()(", WRAPPER_NAME)
    }

    /// `withTranslation()(inner)`
    pub fn wrapper_call(&self, inner: &str) -> String {
        format!("{}{})", self.wrapper_open(), inner)
    }

    /// `import { a, b } from 'react-i18next';`
    pub fn import_statement(&self, bindings: &[&str]) -> String {
        format!(
            "import {{ {} }} from {};",
            bindings.join(", "),
            self.string_literal(I18N_MODULE)
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::QuoteStyle;

    #[test]
    fn test_translation_call_single_quotes() {
        let options = PrintOptions::default();
        let scaffold = Scaffold::new(&options);
        assert_eq!(scaffold.translation_call("hello"), "t('hello')");
    }

    #[test]
    fn test_translation_call_double_quotes() {
        let options = PrintOptions {
            quote: QuoteStyle::Double,
            ..Default::default()
        };
        let scaffold = Scaffold::new(&options);
        assert_eq!(scaffold.translation_call("hello"), "t(\"hello\")");
    }

    #[test]
    fn test_string_literal_escapes() {
        let options = PrintOptions::default();
        let scaffold = Scaffold::new(&options);
        assert_eq!(scaffold.string_literal("it's"), r"'it\'s'");
        assert_eq!(scaffold.string_literal(r"a\b"), r"'a\\b'");
        assert_eq!(scaffold.string_literal("say \"hi\""), "'say \"hi\"'");
    }

    #[test]
    fn test_wiring_snippets() {
        let options = PrintOptions::default();
        let scaffold = Scaffold::new(&options);
        assert_eq!(scaffold.hook_binding(), "const { t } = useTranslation();");
        assert_eq!(scaffold.wrapper_call("App"), "withTranslation()(App)");
        assert_eq!(
            scaffold.import_statement(&[HOOK_NAME, WRAPPER_NAME]),
            "import { useTranslation, withTranslation } from 'react-i18next';"
        );
    }
}
