use std::path::PathBuf;

use crate::scanner::{ScanSummary, VariableRecord};

#[derive(Debug)]
pub enum CommandSummary {
    Scan(ScanReport),
    Generate(GenerateSummary),
    Check(CheckReport),
}

/// Scan output: the full summary plus its partition against `.env`.
#[derive(Debug)]
pub struct ScanReport {
    pub summary: ScanSummary,
    pub missing: Vec<VariableRecord>,
    pub existing: Vec<VariableRecord>,
    /// Emit the report as JSON instead of the human-readable form.
    pub json: bool,
}

#[derive(Debug)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub variable_count: usize,
    pub total_files: usize,
    /// False when the scan found nothing and no file was written.
    pub written: bool,
}

#[derive(Debug)]
pub struct CheckReport {
    pub env_path: PathBuf,
    pub total_files: usize,
    pub scanned_count: usize,
    /// Referenced in code, absent from the env file.
    pub missing: Vec<VariableRecord>,
    /// Declared in the env file, never referenced in code.
    pub unused: Vec<String>,
}

impl CheckReport {
    pub fn issue_count(&self) -> usize {
        self.missing.len() + self.unused.len()
    }
}

/// Result of running an envsweep command.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Number of issues found (check command only, 0 otherwise).
    pub issue_count: usize,
    /// If true, exit code 1 should be returned when issue_count > 0.
    pub exit_on_issues: bool,
}
