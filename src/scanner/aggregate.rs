//! Directory-wide aggregation of findings into a deduplicated summary.

use std::{collections::HashMap, path::Path};

use anyhow::Result;
use rayon::prelude::*;

use crate::scanner::{
    extract::extract_file,
    types::{Finding, Location, ScanSummary, VariableRecord},
    walk::collect_files,
};

/// Scan a directory tree and aggregate every finding into one summary.
///
/// Extraction runs per file in parallel; the fold into records is
/// sequential over the order-preserving per-file results, so first
/// discovery (and with it the record order) is deterministic for a given
/// file enumeration order. Any unreadable file aborts the scan.
pub fn scan_directory(
    root: &Path,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<ScanSummary> {
    let files = collect_files(root, ignore_patterns, verbose)?;
    let total_files = files.len();

    let per_file: Vec<Vec<Finding>> = files
        .par_iter()
        .map(|file| extract_file(file))
        .collect::<Result<_>>()?;

    Ok(fold_findings(root, total_files, per_file))
}

/// Fold findings into variable records keyed by name.
///
/// The first occurrence of a name creates its record; every occurrence
/// appends a location with the file path made relative to the scan root.
fn fold_findings(root: &Path, total_files: usize, per_file: Vec<Vec<Finding>>) -> ScanSummary {
    let mut records: Vec<VariableRecord> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();
    let mut total_occurrences = 0;

    for finding in per_file.into_iter().flatten() {
        total_occurrences += 1;

        let location = Location {
            file: relative_to(&finding.file, root),
            line: finding.line,
        };

        match index_by_name.get(&finding.name) {
            Some(&i) => records[i].locations.push(location),
            None => {
                index_by_name.insert(finding.name.clone(), records.len());
                records.push(VariableRecord {
                    name: finding.name,
                    category: finding.category,
                    locations: vec![location],
                });
            }
        }
    }

    ScanSummary {
        variables: records,
        total_files,
        total_occurrences,
    }
}

fn relative_to(file: &str, root: &Path) -> String {
    Path::new(file)
        .strip_prefix(root)
        .unwrap_or_else(|_| Path::new(file))
        .to_string_lossy()
        .into_owned()
}
