//! envsweep - environment variable usage auditor
//!
//! envsweep is a CLI tool and library for finding environment-variable
//! references in a codebase (JavaScript/TypeScript, Python, Ruby, Go, PHP),
//! categorizing them, and cross-checking them against a declared `.env`
//! file. Extraction is regex-based by design: it trades a real parser for
//! speed and zero per-language tooling, and accepts the occasional match
//! inside a string or comment.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `scanner`: Core scanning engine (patterns, extraction, aggregation)
//! - `env_file`: Declared-env file parsing, cross-checking, and generation

pub mod cli;
pub mod env_file;
pub mod scanner;
