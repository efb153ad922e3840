//! Wishes Module
//!
//! The board's single table and its HTTP surface. Wishes are created and
//! liked, never edited or deleted.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wishboard::wishes;
//!
//! let app = Router::new()
//!     .nest("/wishes", wishes::routes())
//!     .with_state(app_state);
//!
//! let store = wishes::Wishes::new(db.connection(), db.utc_offset());
//! let wish = store.create("새해 복 많이 받으세요").await?;
//! ```

mod handler;
mod routes;
mod store;

pub use routes::routes;
pub use store::*;

use anyhow::Result;
use libsql::Connection;

const SCHEMA: &str = include_str!("migrations/001_schema.sql");

const ADD_LIKES_COLUMN: &str = "ALTER TABLE wishes ADD COLUMN likes INTEGER DEFAULT 0";

/// Creates the table and index if absent and makes sure databases from
/// before the `likes` column existed gain it. Idempotent.
pub async fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .await
        .map_err(|e| anyhow::anyhow!("failed to apply wishes schema: {e}"))?;

    match conn.execute(ADD_LIKES_COLUMN, ()).await {
        Ok(_) => tracing::info!("[db] added likes column to wishes"),
        Err(e) if e.to_string().contains("duplicate column") => {
            tracing::debug!("[db] likes column already present");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
