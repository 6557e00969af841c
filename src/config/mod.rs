//! Configuration module for linkatlas
//!
//! This module handles loading, parsing, and validating TOML
//! configuration files.
//!
//! # Example
//!
//! ```no_run
//! use linkatlas::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("linkatlas.toml")).unwrap();
//! println!("Reports go to: {}", config.output.directory);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, GeneratorConfig, InputConfig, OutputConfig, OverwriteMode, ReportsConfig, SiteConfig,
};

// Re-export parser functions
pub use parser::load_config;
