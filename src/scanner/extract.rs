//! Single-file extraction of environment-variable references.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::scanner::{category::categorize, language::Language, types::Finding};

/// Extract all environment-variable references from one file.
///
/// Files with an unrecognized extension yield an empty list without being
/// read. Every pattern of the resolved language is applied to the whole
/// text, so a single line can yield several findings and the same name can
/// appear many times — deduplication happens later, in the aggregator.
///
/// A file that cannot be read fails the scan: at this point the walker has
/// already seen the file, so a read failure means the filesystem changed
/// underneath us or permissions are off, and the caller should know.
pub fn extract_file(path: &Path) -> Result<Vec<Finding>> {
    let Some(language) = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(Language::from_extension)
    else {
        return Ok(Vec::new());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let mut findings = Vec::new();

    for pattern in language.patterns() {
        for captures in pattern.captures_iter(&content) {
            let overall = captures.get(0).unwrap();
            let name = captures[1].to_string();
            let line = line_number(&content, overall.start());

            findings.push(Finding {
                category: categorize(&name),
                name,
                file: path.to_string_lossy().into_owned(),
                line,
            });
        }
    }

    Ok(findings)
}

/// 1-based line number of a byte offset: the number of newline-delimited
/// segments preceding it, so a match on the first line reports line 1.
fn line_number(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}
