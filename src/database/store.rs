//! User store seam used by the dialogue handlers
//!
//! Handlers only see the [`UserStore`] trait; [`PgUserStore`] is the
//! Postgres-backed implementation wired up in `main`.

use async_trait::async_trait;
use tracing::{debug, info};
use crate::models::{User, Note, CreateNoteRequest};
use crate::utils::errors::Result;
use super::connection::DatabasePool;
use super::repositories::{UserRepository, NoteRepository};

/// CRUD interface over user and note records, keyed by Telegram user id
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether the user has been registered
    async fn is_known_user(&self, user_id: i64) -> Result<bool>;

    /// Fetch a user by Telegram id
    async fn get_user(&self, user_id: i64) -> Result<Option<User>>;

    /// Persist a newly registered user
    async fn add_user(&self, user: &User) -> Result<()>;

    /// Persist the full user record
    async fn update_user(&self, user: &User) -> Result<()>;

    /// Notes of a user in listing order
    async fn get_user_notes(&self, user_id: i64) -> Result<Vec<Note>>;

    /// Persist a new note
    async fn add_note(&self, request: CreateNoteRequest) -> Result<Note>;
}

/// Postgres-backed user store
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pub users: UserRepository,
    pub notes: NoteRepository,
}

impl PgUserStore {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            notes: NoteRepository::new(pool),
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn is_known_user(&self, user_id: i64) -> Result<bool> {
        self.users.exists(user_id).await
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        debug!(user_id = user_id, "Getting user");
        self.users.find_by_id(user_id).await
    }

    async fn add_user(&self, user: &User) -> Result<()> {
        self.users.create(user).await?;
        info!(user_id = user.id, "Added user to system");
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        self.users.update(user).await?;
        info!(user_id = user.id, units = %user.units, "User updated");
        Ok(())
    }

    async fn get_user_notes(&self, user_id: i64) -> Result<Vec<Note>> {
        self.notes.find_by_user(user_id).await
    }

    async fn add_note(&self, request: CreateNoteRequest) -> Result<Note> {
        let note = self.notes.create(request).await?;
        info!(user_id = note.user_id, note_id = note.id, "Added note to system");
        Ok(note)
    }
}
