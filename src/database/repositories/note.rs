//! Note repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::note::{Note, CreateNoteRequest};
use crate::utils::errors::AssistantError;

#[derive(Clone)]
#[derive(Debug)]
pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new note
    pub async fn create(&self, request: CreateNoteRequest) -> Result<Note, AssistantError> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO user_notes (text, user_id, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, text, user_id, created_at
            "#
        )
        .bind(request.text)
        .bind(request.user_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    /// All notes of a user, oldest first
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<Note>, AssistantError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, text, user_id, created_at FROM user_notes WHERE user_id = $1 ORDER BY created_at ASC, id ASC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }
}
