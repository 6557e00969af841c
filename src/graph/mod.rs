//! The in-memory link graph
//!
//! This module holds the crawl graph consumed by every report:
//! - `Link`: one node per distinct URL, with the metadata the crawler
//!   recorded for it
//! - `LinkGraph`: the exclusive owner of all links, keyed by URL, plus
//!   the designated base link and the bad-link registry
//! - `GraphBuilder`: the only construction path, used by the snapshot
//!   loader and by tests
//!
//! The graph may contain cycles and nodes referenced from many parents.
//! Report code never mutates it.

mod link;
mod map;

pub use link::Link;
pub use map::{GraphBuilder, LinkGraph};

use thiserror::Error;

/// Errors raised by graph construction and lookup
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no link registered for {0}")]
    NotFound(String),

    #[error("duplicate link for {0}")]
    Duplicate(String),

    #[error("base link {0} missing from graph")]
    MissingBase(String),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;
