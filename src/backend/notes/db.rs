//! Database operations for notes
//!
//! Every query is scoped by owner: a note that belongs to someone else is
//! indistinguishable from one that does not exist.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::StoreError;
use crate::shared::NoteResponse;

/// Row of the `notes` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

/// Timestamps are stored as fixed-width RFC3339 text (microseconds, `Z`)
/// so that `ORDER BY` on the column sorts chronologically.
fn db_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// SQLite-backed note repository
#[derive(Debug, Clone)]
pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All notes of `owner`, most recently updated first
    pub async fn list_notes(&self, owner: Uuid) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE user_id = ?1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    /// Create a note
    pub async fn create_note(
        &self,
        owner: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Note, StoreError> {
        let id = Uuid::new_v4();
        let now = db_timestamp(Utc::now());

        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (id, user_id, title, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?5)
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(owner)
        .bind(title)
        .bind(content)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    /// Get one note of `owner`
    pub async fn get_note(&self, owner: Uuid, id: Uuid) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, user_id, title, content, created_at, updated_at
            FROM notes
            WHERE id = ?1 AND user_id = ?2
            "#,
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    /// Update the given fields of a note; `None` keeps the stored value
    ///
    /// Returns `None` when the note does not exist for this owner.
    pub async fn update_note(
        &self,
        owner: Uuid,
        id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = COALESCE(?1, title),
                content = COALESCE(?2, content),
                updated_at = ?3
            WHERE id = ?4 AND user_id = ?5
            RETURNING id, user_id, title, content, created_at, updated_at
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(db_timestamp(Utc::now()))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    /// Delete a note; `false` if there was nothing to delete
    pub async fn delete_note(&self, owner: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?1 AND user_id = ?2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
