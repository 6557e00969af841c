//! Snapshot database input
//!
//! The crawler collaborator persists the link graph into a SQLite
//! snapshot database. This module loads that snapshot into a
//! `LinkGraph`; the report engine never writes to it.

mod schema;
mod sqlite;

pub use schema::{initialize_schema, SCHEMA_SQL};
pub use sqlite::SnapshotStore;

use crate::graph::GraphError;
use thiserror::Error;

/// Errors that can occur while loading a snapshot
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Snapshot is empty: no pages recorded")]
    EmptySnapshot,

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// One row of the `pages` table
#[derive(Debug, Clone)]
pub struct PageRow {
    pub id: i64,
    pub url: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub status: Option<String>,
    pub mimetype: Option<String>,
    pub size: Option<u64>,
    pub mtime: Option<String>,
    pub is_internal: bool,
    pub is_yanked: bool,
    pub is_page: bool,
    pub redirect_depth: u32,
    pub is_bad: bool,
}
