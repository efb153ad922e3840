use crate::config::Config;
use anyhow::Result;
use chrono::FixedOffset;
use libsql::{Builder, Connection, Database as LibsqlDatabase};
use std::path::Path;

/// Process-wide handle on the embedded store.
///
/// Opened once at startup, shared through `AppState`, and closed explicitly
/// on shutdown.
pub struct Database {
    db: LibsqlDatabase,
    conn: Connection,
    utc_offset: FixedOffset,
}

impl Database {
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Offset applied when stamping `created_at` on new rows.
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    pub async fn new(cfg: &Config, data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(cfg.app.get_db());
        Self::open(&path, cfg.board.utc_offset()?).await
    }

    /// Opens (creating if needed) the database file at `path` and brings the
    /// schema up to date. Safe to call repeatedly against the same file.
    pub async fn open(path: &Path, utc_offset: FixedOffset) -> Result<Self> {
        tracing::info!(path = ?path, "[db] opening local database");
        let db = Builder::new_local(path).build().await?;

        let conn = db.connect()?;
        conn.query("SELECT 1", ()).await?;

        crate::wishes::ensure_schema(&conn).await?;

        Ok(Database {
            db,
            conn,
            utc_offset,
        })
    }

    pub fn close(self) {
        let Database { db, conn, .. } = self;
        drop(conn);
        drop(db);
        tracing::info!("[db] database closed");
    }
}
