use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, GenerateSummary};
use crate::{cli::args::GenerateCommand, env_file::write_example, scanner::scan_directory};

pub fn generate(cmd: GenerateCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let dir = args
        .common
        .dir
        .canonicalize()
        .with_context(|| format!("Invalid directory: {}", args.common.dir.display()))?;

    let summary = scan_directory(&dir, &args.common.ignore_patterns(), args.common.verbose)?;

    // Nothing found means nothing to write; leave any existing file alone.
    let written = !summary.is_empty();
    if written {
        write_example(&args.output, &summary.variables, !args.no_categorize)?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Generate(GenerateSummary {
            output: args.output.clone(),
            variable_count: summary.variables.len(),
            total_files: summary.total_files,
            written,
        }),
        issue_count: 0,
        exit_on_issues: false,
    })
}
