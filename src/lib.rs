//! Linkatlas: a link-graph report renderer
//!
//! This crate turns a previously crawled link graph into a set of
//! cross-linked HTML report pages (site map, recently changed pages,
//! broken links, page problems). The crawl itself happens elsewhere;
//! linkatlas reads the snapshot database the crawler produced and
//! treats the graph as read-only.

pub mod config;
pub mod graph;
pub mod output;
pub mod render;
pub mod report;
pub mod storage;

use thiserror::Error;

/// Main error type for linkatlas operations
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Graph error: {0}")]
    Graph(#[from] graph::GraphError),

    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Report error: {0}")]
    Report(#[from] report::ReportError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AtlasError {
    /// Returns true if this error is a deliberate abort (an output file
    /// write declined by policy) rather than a failure.
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            AtlasError::Output(output::OutputError::WriteDenied { .. })
        )
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for linkatlas operations
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use graph::{Link, LinkGraph};
pub use output::ReportDriver;
pub use report::Report;
