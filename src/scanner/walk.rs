//! File enumeration with exclusion rules.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Directory names pruned at any depth, regardless of caller exclusions:
/// dependency dirs, build output, VCS, vendored code, framework caches,
/// coverage reports.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    ".git",
    "vendor",
    ".next",
    "coverage",
];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory names.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Caller-supplied exclusions, split into literal directory names and
/// compiled glob patterns. Names match any path component exactly at any
/// depth; wildcards are matched against the root-relative path.
struct Exclusions {
    literal_names: Vec<String>,
    glob_patterns: Vec<Pattern>,
}

impl Exclusions {
    fn new(ignore_patterns: &[String], verbose: bool) -> Self {
        let mut literal_names = Vec::new();
        let mut glob_patterns = Vec::new();

        for p in ignore_patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => glob_patterns.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                literal_names.push(p.clone());
            }
        }

        Self {
            literal_names,
            glob_patterns,
        }
    }

    fn excludes_dir(&self, name: &str) -> bool {
        DEFAULT_EXCLUDED_DIRS.contains(&name) || self.literal_names.iter().any(|n| n == name)
    }

    fn excludes_path(&self, relative: &Path) -> bool {
        self.glob_patterns
            .iter()
            .any(|pattern| pattern.matches_path(relative))
    }
}

/// Enumerate all files under `root`, pruning excluded directories.
///
/// Returned order follows the walker's filesystem enumeration order; it is
/// stable for a stable filesystem but not contractually sorted. Enumeration
/// failures (e.g. an unreadable directory) abort the walk, matching the
/// extractor's abort-on-unreadable policy.
pub fn collect_files(root: &Path, ignore_patterns: &[String], verbose: bool) -> Result<Vec<PathBuf>> {
    let exclusions = Exclusions::new(ignore_patterns, verbose);

    let keep_entry = |entry: &DirEntry| {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !exclusions.excludes_dir(&name)
    };

    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(keep_entry) {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if exclusions.excludes_path(relative) {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}
