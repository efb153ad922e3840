use anyhow::Result;
use chrono::{DateTime, FixedOffset, Utc};
use libsql::Connection;

use crate::model::Wish;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats `now` as wall-clock time at `offset`, without a zone suffix.
pub fn timestamp_at(now: DateTime<Utc>, offset: FixedOffset) -> String {
    now.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string()
}

/// Queries over the `wishes` table.
///
/// Performs no validation; callers pass content that has already been
/// trimmed, length-checked and escaped.
pub struct Wishes<'a> {
    conn: &'a Connection,
    utc_offset: FixedOffset,
}

impl<'a> Wishes<'a> {
    pub fn new(conn: &'a Connection, utc_offset: FixedOffset) -> Self {
        Self { conn, utc_offset }
    }

    /// Newest first. Rows sharing a `created_at` second come back in
    /// reverse insertion order.
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<Wish>> {
        let query = r#"
            SELECT id, content, likes, created_at
            FROM wishes
            ORDER BY created_at DESC, id DESC
            LIMIT ?
        "#;

        let mut rows = self
            .conn
            .query(query, libsql::params![i64::from(limit)])
            .await?;
        let mut wishes = Vec::new();

        while let Some(row) = rows.next().await? {
            wishes.push(self.row_to_wish(&row)?);
        }

        Ok(wishes)
    }

    pub async fn create(&self, content: &str) -> Result<Wish> {
        let created_at = timestamp_at(Utc::now(), self.utc_offset);
        self.create_at(content, &created_at).await
    }

    /// Inserts with an explicit `created_at`.
    pub async fn create_at(&self, content: &str, created_at: &str) -> Result<Wish> {
        let query = r#"
            INSERT INTO wishes (content, likes, created_at)
            VALUES (?, 0, ?)
            RETURNING id, content, likes, created_at
        "#;

        let mut rows = self
            .conn
            .query(query, libsql::params![content, created_at])
            .await?;

        if let Some(row) = rows.next().await? {
            Ok(self.row_to_wish(&row)?)
        } else {
            anyhow::bail!("Failed to create wish")
        }
    }

    /// Adds one like and returns the row as written by the same statement.
    /// `Ok(None)` when no wish has this id.
    pub async fn increment_like(&self, id: i64) -> Result<Option<Wish>> {
        let query = r#"
            UPDATE wishes SET likes = COALESCE(likes, 0) + 1
            WHERE id = ?
            RETURNING id, content, likes, created_at
        "#;

        let mut rows = self.conn.query(query, libsql::params![id]).await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(self.row_to_wish(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn get(&self, id: i64) -> Result<Option<Wish>> {
        let query = r#"
            SELECT id, content, likes, created_at
            FROM wishes WHERE id = ?
        "#;

        let mut rows = self.conn.query(query, libsql::params![id]).await?;

        if let Some(row) = rows.next().await? {
            Ok(Some(self.row_to_wish(&row)?))
        } else {
            Ok(None)
        }
    }

    pub async fn count(&self) -> Result<i64> {
        let mut rows = self.conn.query("SELECT COUNT(*) FROM wishes", ()).await?;

        match rows.next().await? {
            Some(row) => Ok(row.get(0)?),
            None => Ok(0),
        }
    }

    fn row_to_wish(&self, row: &libsql::Row) -> Result<Wish> {
        Ok(Wish {
            id: row.get(0)?,
            content: row.get(1)?,
            likes: row.get::<Option<i64>>(2)?.unwrap_or(0),
            created_at: row.get::<Option<String>>(3)?.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stamps_board_local_time_without_zone() {
        let now = Utc.with_ymd_and_hms(2025, 12, 31, 15, 0, 0).unwrap();
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(timestamp_at(now, kst), "2026-01-01 00:00:00");
    }

    #[test]
    fn stamping_does_not_depend_on_utc_date() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 23, 59, 59).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(timestamp_at(now, utc), "2026-03-01 23:59:59");
    }
}
