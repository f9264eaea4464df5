//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! envsweep commands, using clap's derive API.
//!
//! ## Commands
//!
//! - `scan`: Scan a codebase and report environment variables against `.env`
//! - `generate`: Write a `.env.example` from detected variables
//! - `check`: Cross-check detected variables against a declared env file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.common.verbose,
            Some(Command::Generate(cmd)) => cmd.args.common.verbose,
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to scan
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Comma-separated directory names or glob patterns to ignore,
    /// in addition to the built-in exclusions
    #[arg(short, long)]
    pub ignore: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Split the comma-separated ignore option into individual patterns.
    pub fn ignore_patterns(&self) -> Vec<String> {
        self.ignore
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect()
    }
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output the scan result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file
    #[arg(short, long, default_value = ".env.example")]
    pub output: PathBuf,

    /// Do not group variables by category
    #[arg(long)]
    pub no_categorize: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Env file to check against
    #[arg(short, long, default_value = ".env")]
    pub env: PathBuf,

    /// Exit with a non-zero status when issues are found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the codebase for environment variable references
    Scan(ScanCommand),
    /// Generate .env.example from detected variables
    Generate(GenerateCommand),
    /// Check for missing or unused environment variables
    Check(CheckCommand),
}
