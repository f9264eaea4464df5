use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ScanReport};
use crate::{
    cli::args::ScanCommand,
    env_file::{parse_env_file, partition},
    scanner::scan_directory,
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let dir = args
        .common
        .dir
        .canonicalize()
        .with_context(|| format!("Invalid directory: {}", args.common.dir.display()))?;

    let summary = scan_directory(&dir, &args.common.ignore_patterns(), args.common.verbose)?;

    // Scan always compares against the conventional .env next to the root;
    // a missing file just means everything is reported as missing.
    let declared = parse_env_file(&dir.join(".env"))?;
    let (missing, existing) = partition(&summary.variables, &declared);
    let missing = missing.into_iter().cloned().collect();
    let existing = existing.into_iter().cloned().collect();

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanReport {
            summary,
            missing,
            existing,
            json: args.json,
        }),
        issue_count: 0,
        exit_on_issues: false,
    })
}
