//! Data types produced by the scanning pipeline.

use serde::Serialize;

use crate::scanner::category::Category;

/// One raw textual match of a variable-access pattern.
///
/// Findings are produced per regex match during extraction and folded into
/// [`VariableRecord`]s by the aggregator; they are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub name: String,
    pub file: String,
    /// 1-based line number at the start of the match.
    pub line: usize,
    pub category: Category,
}

/// Where a variable was referenced, relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
}

/// Deduplicated entry for one variable name across a whole scan.
///
/// Created on the first finding for a name; every subsequent finding for
/// the same name appends another location. The category is fixed on
/// creation — it is a pure function of the name, so which occurrence
/// triggered discovery does not matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableRecord {
    pub name: String,
    pub category: Category,
    pub locations: Vec<Location>,
}

/// Complete output of scanning a directory tree.
#[derive(Debug, Serialize)]
pub struct ScanSummary {
    /// Unique variables in first-discovery order.
    pub variables: Vec<VariableRecord>,
    /// Files visited after exclusions, whether or not they matched a language.
    pub total_files: usize,
    /// Raw findings across all files; equals the sum of all locations.
    pub total_occurrences: usize,
}

impl ScanSummary {
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
