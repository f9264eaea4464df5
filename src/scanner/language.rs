//! Per-language extraction patterns.
//!
//! Extraction is lexical: each supported language gets an ordered list of
//! regexes describing its environment-access idioms, with the variable name
//! as capture group 1. There is no tokenizer, so matches inside strings or
//! comments are reported too — an accepted limitation of regex scanning.
//!
//! Names are constrained to the conventional constant shape
//! `[A-Z_][A-Z0-9_]*`; lowercase or mixed-case identifiers never match.

use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Python,
    Ruby,
    Go,
    Php,
}

static JAVASCRIPT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // process.env.VAR_NAME
        Regex::new(r"process\.env\.([A-Z_][A-Z0-9_]*)").unwrap(),
        // process.env['VAR_NAME'] / process.env["VAR_NAME"]
        Regex::new(r#"process\.env\[['"]([A-Z_][A-Z0-9_]*)['"]\]"#).unwrap(),
    ]
});

static PYTHON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"os\.getenv\(['"]([A-Z_][A-Z0-9_]*)['"]"#).unwrap(),
        Regex::new(r#"os\.environ\[['"]([A-Z_][A-Z0-9_]*)['"]\]"#).unwrap(),
        Regex::new(r#"os\.environ\.get\(['"]([A-Z_][A-Z0-9_]*)['"]"#).unwrap(),
    ]
});

static RUBY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"ENV\[['"]([A-Z_][A-Z0-9_]*)['"]\]"#).unwrap(),
        Regex::new(r#"ENV\.fetch\(['"]([A-Z_][A-Z0-9_]*)['"]"#).unwrap(),
    ]
});

static GO_PATTERNS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| vec![Regex::new(r#"os\.Getenv\("([A-Z_][A-Z0-9_]*)"\)"#).unwrap()]);

static PHP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"getenv\(['"]([A-Z_][A-Z0-9_]*)['"]\)"#).unwrap(),
        Regex::new(r#"\$_ENV\[['"]([A-Z_][A-Z0-9_]*)['"]\]"#).unwrap(),
        Regex::new(r#"\$_SERVER\[['"]([A-Z_][A-Z0-9_]*)['"]\]"#).unwrap(),
    ]
});

impl Language {
    /// Resolve the language for a file extension (without the leading dot).
    /// Returns `None` for unrecognized extensions; such files are skipped
    /// entirely by the extractor.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "js" | "jsx" | "ts" | "tsx" | "mjs" | "cjs" => Some(Language::JavaScript),
            "py" => Some(Language::Python),
            "rb" => Some(Language::Ruby),
            "go" => Some(Language::Go),
            "php" => Some(Language::Php),
            _ => None,
        }
    }

    /// Ordered extraction patterns for this language. All patterns are
    /// applied to every file of the language.
    pub fn patterns(self) -> &'static [Regex] {
        match self {
            Language::JavaScript => &JAVASCRIPT_PATTERNS,
            Language::Python => &PYTHON_PATTERNS,
            Language::Ruby => &RUBY_PATTERNS,
            Language::Go => &GO_PATTERNS,
            Language::Php => &PHP_PATTERNS,
        }
    }
}
