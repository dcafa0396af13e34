use anyhow::Context;
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::Booking;

use super::{BookingStore, STORE_KEY};

/// Durable key-value store over a single SQLite table. One row holds the
/// serialized booking list under [`STORE_KEY`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> anyhow::Result<Self> {
        let conn = Connection::open(path).context("failed to open database")?;

        conn.execute_batch(
            "PRAGMA journal_mode=WAL;
             CREATE TABLE IF NOT EXISTS store (
                 key TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             );",
        )
        .context("failed to initialize store table")?;

        Ok(Self { conn })
    }
}

impl BookingStore for SqliteStore {
    fn load(&self) -> anyhow::Result<Vec<Booking>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM store WHERE key = ?1",
                params![STORE_KEY],
                |row| row.get(0),
            )
            .optional()
            .context("failed to read booking store")?;

        match value {
            Some(json) => serde_json::from_str(&json).context("corrupt booking store record"),
            None => Ok(Vec::new()),
        }
    }

    fn replace(&mut self, bookings: &[Booking]) -> anyhow::Result<()> {
        let json = serde_json::to_string(bookings)?;
        self.conn
            .execute(
                "INSERT INTO store (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![STORE_KEY, json],
            )
            .context("failed to write booking store")?;
        Ok(())
    }
}
