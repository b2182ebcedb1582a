//! Key-value repository over the persisted session slot.
//!
//! Uses prepared statements; the user slot is read once at session open and
//! rewritten on every identity change.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::User;

/// Key of the slot holding the serialized current user.
const USER_SLOT: &str = "user";

/// Repository for the durable key-value slots.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load the persisted user, if any.
    ///
    /// Returns `Ok(None)` both when the slot is empty and when the stored
    /// blob no longer deserializes; a corrupt slot is logged and cleared
    /// rather than surfaced, so a damaged file never locks a user out of an
    /// anonymous session.
    pub async fn load_user(&self) -> Result<Option<User>, AppError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(USER_SLOT)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let value: String = row.get("value");
        match serde_json::from_str(&value) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                tracing::warn!("Discarding unreadable session slot: {}", err);
                self.clear_user().await?;
                Ok(None)
            }
        }
    }

    /// Persist the given user into the slot, replacing any previous value.
    pub async fn save_user(&self, user: &User) -> Result<(), AppError> {
        let value = serde_json::to_string(user)?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(USER_SLOT)
        .bind(&value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the persisted user slot.
    pub async fn clear_user(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(USER_SLOT)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Whether the user slot currently holds a value.
    pub async fn has_user(&self) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT 1 AS present FROM kv WHERE key = ?")
            .bind(USER_SLOT)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.is_some())
    }
}
