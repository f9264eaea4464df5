//! Core scanning engine.
//!
//! The pipeline runs in three steps: enumerate files under the scan root
//! ([`walk`]), extract per-file findings with the per-language pattern
//! registry ([`extract`], [`language`]), then fold everything into a
//! deduplicated [`types::ScanSummary`] ([`aggregate`]). Categorization
//! ([`category`]) is a pure function of the variable name.

pub mod aggregate;
pub mod category;
pub mod extract;
pub mod language;
pub mod types;
pub mod walk;

pub use aggregate::scan_directory;
pub use category::{Category, categorize};
pub use extract::extract_file;
pub use types::{Finding, Location, ScanSummary, VariableRecord};
