//! Report page assembly and output
//!
//! This module handles:
//! - Wrapping each report's rendered content in the shared page shell
//! - Building the navigation bar embedded in every page
//! - Writing one HTML document per report, under an overwrite policy

mod page;
mod writer;

pub use page::ReportDriver;
pub use writer::{AlwaysOverwrite, Decision, NeverOverwrite, OverwritePolicy, ReportWriter};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing report pages
#[derive(Debug, Error)]
pub enum OutputError {
    /// The overwrite policy declined to replace an existing file. This
    /// is a deliberate abort of the run, not a failure.
    #[error("refused to overwrite {path}")]
    WriteDenied { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
