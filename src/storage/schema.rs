//! Snapshot database schema
//!
//! The DDL for the snapshot database the crawler writes and linkatlas
//! reads. Exposed publicly so fixture databases can be created by tests
//! and by crawler integrations.

/// SQL schema for the snapshot database
pub const SCHEMA_SQL: &str = r#"
-- One row per distinct URL the crawler encountered
CREATE TABLE IF NOT EXISTS pages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    url TEXT NOT NULL UNIQUE,
    title TEXT,
    author TEXT,
    status TEXT,
    mimetype TEXT,
    size INTEGER,
    mtime TEXT,
    is_internal INTEGER NOT NULL DEFAULT 0,
    is_yanked INTEGER NOT NULL DEFAULT 0,
    is_page INTEGER NOT NULL DEFAULT 0,
    redirect_depth INTEGER NOT NULL DEFAULT 0,
    is_bad INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_pages_url ON pages(url);

-- Parent/child references; position preserves the order links were
-- found on the parent page
CREATE TABLE IF NOT EXISTS links (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    parent_id INTEGER NOT NULL REFERENCES pages(id),
    child_id INTEGER NOT NULL REFERENCES pages(id),
    position INTEGER NOT NULL,
    UNIQUE(parent_id, child_id)
);

CREATE INDEX IF NOT EXISTS idx_links_parent ON links(parent_id);
CREATE INDEX IF NOT EXISTS idx_links_child ON links(child_id);

-- Diagnostic messages accumulated per page
CREATE TABLE IF NOT EXISTS problems (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    page_id INTEGER NOT NULL REFERENCES pages(id),
    message TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_problems_page ON problems(page_id);
"#;

/// Initializes the snapshot schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_initializes() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(initialize_schema(&conn).is_ok());
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        assert!(initialize_schema(&conn).is_ok());
    }

    #[test]
    fn test_tables_exist_after_init() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        for table in ["pages", "links", "problems"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table {} should exist", table);
        }
    }
}
