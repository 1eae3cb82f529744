use crate::models::LocalRecord;
use rusqlite::{Connection, OptionalExtension, Result};
use std::path::Path;

/// Local side of an import: anything that can look up and append bookmarks.
pub trait BookmarkStore {
    /// Id of the record stored under exactly `url`, or `None` when absent.
    fn get_rec_id(&self, url: &str) -> crate::error::Result<Option<usize>>;

    /// Append a record and return its id.
    fn add_rec(&self, url: &str, title: &str, tags: &str, desc: &str) -> crate::error::Result<usize>;
}

/// A Buku database
pub struct BukuDb {
    conn: Connection,
}

impl BukuDb {
    pub fn init_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.setup_tables()?;
        Ok(db)
    }

    pub fn init(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        db.setup_tables()?;
        Ok(db)
    }

    // Same layout Buku creates, so either tool can open the file.
    fn setup_tables(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE if not exists bookmarks (
                id integer PRIMARY KEY,
                URL text NOT NULL UNIQUE,
                metadata text default '',
                tags text default ',',
                desc text default '',
                flags integer default 0
            )",
            [],
        )?;
        Ok(())
    }

    pub fn get_rec_id(&self, url: &str) -> Result<Option<usize>> {
        self.conn
            .query_row("SELECT id FROM bookmarks WHERE URL = ?1 LIMIT 1", [url], |row| {
                row.get(0)
            })
            .optional()
    }

    pub fn add_rec(&self, url: &str, title: &str, tags: &str, desc: &str) -> Result<usize> {
        self.conn.execute(
            "INSERT INTO bookmarks (URL, metadata, tags, desc, flags) VALUES (?1, ?2, ?3, ?4, 0)",
            (url, title, tags, desc),
        )?;
        Ok(self.conn.last_insert_rowid() as usize)
    }

    pub fn get_rec_by_id(&self, id: usize) -> Result<Option<LocalRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT URL, metadata, tags, desc FROM bookmarks WHERE id = ?1")?;
        let mut rows = stmt.query([id])?;

        if let Some(row) = rows.next()? {
            Ok(Some(LocalRecord::new(
                id,
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
            )))
        } else {
            Ok(None)
        }
    }

    pub fn get_rec_all(&self) -> Result<Vec<LocalRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, URL, metadata, tags, desc FROM bookmarks ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(LocalRecord::new(
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

impl BookmarkStore for BukuDb {
    fn get_rec_id(&self, url: &str) -> crate::error::Result<Option<usize>> {
        Ok(BukuDb::get_rec_id(self, url)?)
    }

    fn add_rec(&self, url: &str, title: &str, tags: &str, desc: &str) -> crate::error::Result<usize> {
        Ok(BukuDb::add_rec(self, url, title, tags, desc)?)
    }
}
