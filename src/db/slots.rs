//! Durable key-value slots.
//!
//! Each slot holds one serialized value and is always replaced wholesale.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;

/// Named, persistent key-value storage on top of SQLite.
#[derive(Clone)]
pub struct SlotStorage {
    pool: SqlitePool,
}

impl SlotStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read the raw contents of a slot.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query("SELECT value FROM slots WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| row.get("value")))
    }

    /// Replace the contents of a slot in a single statement.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO slots (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(key, bytes = value.len(), "Slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn open_slots(dir: &TempDir) -> SlotStorage {
        let pool = init_database(&dir.path().join("slots.sqlite"))
            .await
            .unwrap();
        SlotStorage::new(pool)
    }

    #[tokio::test]
    async fn test_missing_slot_is_none() {
        let dir = TempDir::new().unwrap();
        let slots = open_slots(&dir).await;

        assert!(slots.get("employees").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let dir = TempDir::new().unwrap();
        let slots = open_slots(&dir).await;

        slots.set("employees", "[]").await.unwrap();
        slots.set("employees", "[{\"id\":\"1\"}]").await.unwrap();

        assert_eq!(
            slots.get("employees").await.unwrap().as_deref(),
            Some("[{\"id\":\"1\"}]")
        );
    }

    #[tokio::test]
    async fn test_slots_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let slots = open_slots(&dir).await;
            slots.set("theme", "dark").await.unwrap();
        }

        let slots = open_slots(&dir).await;
        assert_eq!(slots.get("theme").await.unwrap().as_deref(), Some("dark"));
    }
}
