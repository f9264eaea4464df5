use anyhow::{Context, Result};

use super::{CheckReport, CommandResult, CommandSummary};
use crate::{
    cli::args::CheckCommand,
    env_file::{parse_env_file, partition, unused_declarations},
    scanner::scan_directory,
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let dir = args
        .common
        .dir
        .canonicalize()
        .with_context(|| format!("Invalid directory: {}", args.common.dir.display()))?;

    let summary = scan_directory(&dir, &args.common.ignore_patterns(), args.common.verbose)?;

    let env_path = if args.env.is_absolute() {
        args.env.clone()
    } else {
        dir.join(&args.env)
    };
    let declared = parse_env_file(&env_path)?;

    let (missing, _existing) = partition(&summary.variables, &declared);
    let missing: Vec<_> = missing.into_iter().cloned().collect();
    let unused: Vec<String> = unused_declarations(&declared, &summary.variables)
        .into_iter()
        .cloned()
        .collect();

    let report = CheckReport {
        env_path,
        total_files: summary.total_files,
        scanned_count: summary.variables.len(),
        missing,
        unused,
    };
    let issue_count = report.issue_count();

    Ok(CommandResult {
        summary: CommandSummary::Check(report),
        issue_count,
        exit_on_issues: args.strict,
    })
}
