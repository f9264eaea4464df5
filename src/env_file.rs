//! Declared-environment file handling: parsing, cross-checking, generation.
//!
//! The file format is the usual dotenv shape — one `NAME=value` per line,
//! blank lines and `#` comments ignored. Only names matter here; values are
//! never read or written.

use std::{
    collections::HashSet,
    fs,
    io::Write,
    path::Path,
    sync::LazyLock,
};

use anyhow::{Context, Result};
use regex::Regex;

use crate::scanner::{VariableRecord, category};

static DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z_][A-Z0-9_]*)=").unwrap());

/// Names declared in an environment file, in file order.
#[derive(Debug, Default)]
pub struct DeclaredEnv {
    names: Vec<String>,
    set: HashSet<String>,
}

impl DeclaredEnv {
    pub fn contains(&self, name: &str) -> bool {
        self.set.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn insert(&mut self, name: &str) {
        if self.set.insert(name.to_string()) {
            self.names.push(name.to_string());
        }
    }
}

/// Parse a declared-environment file into its set of names.
///
/// A missing file is an empty set, not an error. Lines that are blank,
/// comments, or don't declare a well-formed `NAME=` are skipped silently.
pub fn parse_env_file(path: &Path) -> Result<DeclaredEnv> {
    let mut declared = DeclaredEnv::default();

    if !path.exists() {
        return Ok(declared);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read env file: {}", path.display()))?;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some(captures) = DECLARATION_REGEX.captures(trimmed) {
            declared.insert(&captures[1]);
        }
    }

    Ok(declared)
}

/// Partition scanned records against a declared set.
///
/// Returns `(missing, existing)`: records absent from the declared set and
/// records present in it. Order-preserving, exhaustive, disjoint.
pub fn partition<'a>(
    variables: &'a [VariableRecord],
    declared: &DeclaredEnv,
) -> (Vec<&'a VariableRecord>, Vec<&'a VariableRecord>) {
    variables.iter().partition(|v| !declared.contains(&v.name))
}

/// Declared names that no scanned record references.
pub fn unused_declarations<'a>(
    declared: &'a DeclaredEnv,
    variables: &[VariableRecord],
) -> Vec<&'a String> {
    let referenced: HashSet<&str> = variables.iter().map(|v| v.name.as_str()).collect();
    declared
        .names()
        .iter()
        .filter(|name| !referenced.contains(name.as_str()))
        .collect()
}

/// Render an example env file for the scanned variables.
///
/// Every line is `NAME=` — names only, never values. With `categorize`
/// enabled, variables are grouped under `#` category headers in category
/// priority order; otherwise they are listed flat in discovery order.
pub fn render_example(variables: &[VariableRecord], categorize: bool) -> String {
    let mut out = String::from("# Generated by envsweep\n# Fill in the values for your environment\n");

    if categorize {
        for bucket in category::display_order() {
            let in_bucket: Vec<_> = variables.iter().filter(|v| v.category == bucket).collect();
            if in_bucket.is_empty() {
                continue;
            }
            out.push_str(&format!("\n# {}\n", bucket));
            for variable in in_bucket {
                out.push_str(&variable.name);
                out.push_str("=\n");
            }
        }
    } else {
        out.push('\n');
        for variable in variables {
            out.push_str(&variable.name);
            out.push_str("=\n");
        }
    }

    out
}

/// Write an example env file, replacing any previous one at `path`.
pub fn write_example(path: &Path, variables: &[VariableRecord], categorize: bool) -> Result<()> {
    let mut file = fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    file.write_all(render_example(variables, categorize).as_bytes())
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}
