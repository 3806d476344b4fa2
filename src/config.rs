use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".glot-codemod.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
];

/// Path suffixes of test files that are never rewritten.
pub const TEST_FILE_SUFFIXES: &[&str] = &[
    ".test.tsx",
    ".test.ts",
    ".test.jsx",
    ".test.js",
    ".spec.tsx",
    ".spec.ts",
    ".spec.jsx",
    ".spec.js",
];

/// Quote style used for string literals the codemod synthesizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Formatting policy for inserted and replaced code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintOptions {
    #[serde(default)]
    pub quote: QuoteStyle,
    /// Accepted for printer parity; synthesized code never contains
    /// multi-element lists, so it has no effect on output.
    #[serde(default)]
    pub trailing_comma: bool,
    #[serde(default = "default_line_terminator")]
    pub line_terminator: String,
}

fn default_line_terminator() -> String {
    "\n".to_string()
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            quote: QuoteStyle::Single,
            trailing_comma: false,
            line_terminator: default_line_terminator(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    /// Callee names whose string arguments are never rewritten (e.g. `require`).
    #[serde(default)]
    pub ignored_callees: Vec<String>,
    /// JSX attribute names whose literal values are never rewritten (e.g. `className`).
    #[serde(default)]
    pub ignored_attributes: Vec<String>,
    #[serde(default)]
    pub print_options: PrintOptions,
}

fn default_includes() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_ignores() -> Vec<String> {
    ["**/node_modules/**", "**/dist/**", "**/build/**"]
        .map(String::from)
        .to_vec()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            includes: default_includes(),
            ignore_test_files: default_ignore_test_files(),
            ignored_callees: Vec::new(),
            ignored_attributes: Vec::new(),
            print_options: PrintOptions::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern is invalid or the line terminator
    /// is not a line break.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directory paths.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        let terminator = self.print_options.line_terminator.as_str();
        if !matches!(terminator, "\n" | "\r\n") {
            anyhow::bail!(
                "Invalid 'printOptions.lineTerminator': {:?} (expected \"\\n\" or \"\\r\\n\")",
                terminator
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
