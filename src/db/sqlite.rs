//! SQLite-backed document store: connection pool and schema bootstrap.
//!
//! The pool is built once at startup and handed to every request handler
//! through `AppState`; there is no lazy first-use initialization to race on.

use std::fs;
use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Result as SqliteResult;

pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    pub fn new(database_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let manager = SqliteConnectionManager::file(database_url);
        let pool = Pool::new(manager)?;

        let db = Self { pool };
        db.init_schema()?;
        Ok(db)
    }

    pub fn conn(&self) -> DbConn {
        self.pool
            .get()
            .expect("Failed to get database connection from pool")
    }

    fn init_schema(&self) -> SqliteResult<()> {
        let conn = self.conn();
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS words (
                id TEXT NOT NULL,
                filename TEXT NOT NULL,
                created_at TEXT NOT NULL,
                kanji TEXT NOT NULL,
                traduction_fr TEXT,
                traduction_en TEXT,
                onyomi TEXT,
                kunyomi TEXT,
                word_type TEXT,
                theme TEXT,
                tags TEXT
            );",
        )?;
        Ok(())
    }
}
