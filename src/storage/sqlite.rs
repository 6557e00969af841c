//! SQLite snapshot loading
//!
//! Reads the snapshot database the crawler produced and materializes
//! the full `LinkGraph` through the graph builder, so the graph's
//! invariants (URL uniqueness, parent/child symmetry) hold regardless
//! of what the snapshot contains.

use crate::graph::{GraphBuilder, Link, LinkGraph};
use crate::storage::schema::initialize_schema;
use crate::storage::{PageRow, StorageError, StorageResult};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::collections::HashMap;
use std::path::Path;

/// Read-only handle on a crawl snapshot database
pub struct SnapshotStore {
    conn: Connection,
}

impl SnapshotStore {
    /// Opens a snapshot database.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite snapshot file
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA temp_store = MEMORY;
        ",
        )?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Creates an empty in-memory snapshot (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Gives direct access to the underlying connection, for fixture
    /// setup in tests and crawler integrations.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Loads the complete link graph from the snapshot.
    ///
    /// # Arguments
    ///
    /// * `base_url` - URL of the site root; must be among the pages
    /// * `reference` - Instant ages are derived against
    ///
    /// # Returns
    ///
    /// * `Ok(LinkGraph)` - The fully populated, read-only graph
    /// * `Err(StorageError)` - Empty snapshot, missing base, or database failure
    pub fn load_graph(
        &self,
        base_url: &str,
        reference: DateTime<Utc>,
    ) -> StorageResult<LinkGraph> {
        let pages = self.load_pages()?;
        if pages.is_empty() {
            return Err(StorageError::EmptySnapshot);
        }

        let mut builder = GraphBuilder::new();
        let mut urls_by_id: HashMap<i64, String> = HashMap::new();

        for row in &pages {
            urls_by_id.insert(row.id, row.url.clone());
            builder.add(link_from_row(row))?;
            if row.is_bad {
                builder.mark_bad(&row.url);
            }
        }

        for (page_id, message) in self.load_problems()? {
            // problem rows reference pages by id; an unknown id is a
            // corrupt snapshot row and is skipped with a diagnostic
            let Some(url) = urls_by_id.get(&page_id) else {
                tracing::warn!("problem row references unknown page id {}", page_id);
                continue;
            };
            builder.add_problem(url, message)?;
        }

        for (parent_id, child_id) in self.load_links()? {
            let (Some(parent), Some(child)) =
                (urls_by_id.get(&parent_id), urls_by_id.get(&child_id))
            else {
                tracing::warn!(
                    "link row references unknown page ids {} -> {}",
                    parent_id,
                    child_id
                );
                continue;
            };
            builder.connect(parent, child)?;
        }

        builder.derive_ages(reference);
        let graph = builder.build(base_url)?;
        tracing::debug!(
            "loaded {} links from snapshot, base {}",
            graph.len(),
            base_url
        );
        Ok(graph)
    }

    fn load_pages(&self) -> StorageResult<Vec<PageRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url, title, author, status, mimetype, size, mtime,
             is_internal, is_yanked, is_page, redirect_depth, is_bad
             FROM pages ORDER BY id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(PageRow {
                    id: row.get(0)?,
                    url: row.get(1)?,
                    title: row.get(2)?,
                    author: row.get(3)?,
                    status: row.get(4)?,
                    mimetype: row.get(5)?,
                    size: row.get::<_, Option<i64>>(6)?.map(|s| s.max(0) as u64),
                    mtime: row.get(7)?,
                    is_internal: row.get(8)?,
                    is_yanked: row.get(9)?,
                    is_page: row.get(10)?,
                    redirect_depth: row.get(11)?,
                    is_bad: row.get(12)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn load_links(&self) -> StorageResult<Vec<(i64, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT parent_id, child_id FROM links ORDER BY parent_id, position, id",
        )?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn load_problems(&self) -> StorageResult<Vec<(i64, String)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT page_id, message FROM problems ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn link_from_row(row: &PageRow) -> Link {
    let mut link = Link::new(row.url.clone());
    link.title = row.title.clone();
    link.author = row.author.clone();
    link.status = row.status.clone();
    link.mimetype = row.mimetype.clone();
    link.size = row.size;
    link.mtime = row.mtime.as_deref().and_then(|raw| parse_mtime(&row.url, raw));
    link.is_internal = row.is_internal;
    link.is_yanked = row.is_yanked;
    link.is_page = row.is_page;
    link.redirect_depth = row.redirect_depth;
    link
}

// An unparseable mtime degrades the row to "modification time unknown"
// rather than failing the whole load.
fn parse_mtime(url: &str, raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!("ignoring bad mtime '{}' for {}: {}", raw, url, e);
            None
        }
    }
}
