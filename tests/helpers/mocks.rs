//! Recording mock implementations of the handler seams

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicI64, Ordering};
use std::sync::Mutex;
use async_trait::async_trait;
use chrono::Utc;

use assistant_bot::database::UserStore;
use assistant_bot::gateway::{Keyboard, Messenger};
use assistant_bot::models::{CreateNoteRequest, Note, User};
use assistant_bot::utils::errors::{AssistantError, Result};

/// Outgoing message captured by [`MockMessenger`]
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub message_id: i32,
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

/// Messenger that records everything instead of talking to Telegram
#[derive(Debug)]
pub struct MockMessenger {
    sent: Mutex<Vec<SentMessage>>,
    deleted: Mutex<Vec<(i64, i32)>>,
    next_message_id: AtomicI32,
    fail_sends: AtomicBool,
}

impl Default for MockMessenger {
    fn default() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            next_message_id: AtomicI32::new(100),
            fail_sends: AtomicBool::new(false),
        }
    }
}

impl MockMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|m| m.text).collect()
    }

    pub fn last(&self) -> Option<SentMessage> {
        self.sent().last().cloned()
    }

    pub fn last_text(&self) -> Option<String> {
        self.last().map(|m| m.text)
    }

    pub fn deleted(&self) -> Vec<(i64, i32)> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
        self.deleted.lock().unwrap().clear();
    }

    pub fn set_fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Messenger for MockMessenger {
    async fn send_text(&self, chat_id: i64, text: &str, keyboard: Option<Keyboard>) -> Result<i32> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(AssistantError::Gateway("send failed".to_string()));
        }
        let message_id = self.next_message_id.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(SentMessage {
            chat_id,
            message_id,
            text: text.to_string(),
            keyboard,
        });
        Ok(message_id)
    }

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<()> {
        self.deleted.lock().unwrap().push((chat_id, message_id));
        Ok(())
    }
}

/// In-memory user store recording update calls
#[derive(Debug)]
pub struct MockUserStore {
    users: Mutex<HashMap<i64, User>>,
    notes: Mutex<Vec<Note>>,
    updates: Mutex<Vec<User>>,
    next_note_id: AtomicI64,
    fail_updates: AtomicBool,
    fail_all: AtomicBool,
}

impl Default for MockUserStore {
    fn default() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            notes: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
            next_note_id: AtomicI64::new(1),
            fail_updates: AtomicBool::new(false),
            fail_all: AtomicBool::new(false),
        }
    }
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub fn remove_user(&self, user_id: i64) {
        self.users.lock().unwrap().remove(&user_id);
    }

    pub fn user(&self, user_id: i64) -> Option<User> {
        self.users.lock().unwrap().get(&user_id).cloned()
    }

    pub fn update_calls(&self) -> Vec<User> {
        self.updates.lock().unwrap().clone()
    }

    pub fn notes_of(&self, user_id: i64) -> Vec<Note> {
        self.notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn set_fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    /// Make every store operation fail
    pub fn set_fail_all(&self, fail: bool) {
        self.fail_all.store(fail, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(AssistantError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn is_known_user(&self, user_id: i64) -> Result<bool> {
        self.check_available()?;
        Ok(self.users.lock().unwrap().contains_key(&user_id))
    }

    async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        self.check_available()?;
        Ok(self.user(user_id))
    }

    async fn add_user(&self, user: &User) -> Result<()> {
        self.check_available()?;
        self.insert_user(user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<()> {
        self.check_available()?;
        self.updates.lock().unwrap().push(user.clone());
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(AssistantError::Database(sqlx::Error::PoolTimedOut));
        }
        let mut users = self.users.lock().unwrap();
        match users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(AssistantError::UserNotFound { user_id: user.id }),
        }
    }

    async fn get_user_notes(&self, user_id: i64) -> Result<Vec<Note>> {
        self.check_available()?;
        Ok(self.notes_of(user_id))
    }

    async fn add_note(&self, request: CreateNoteRequest) -> Result<Note> {
        self.check_available()?;
        let note = Note {
            id: self.next_note_id.fetch_add(1, Ordering::SeqCst),
            text: request.text,
            user_id: request.user_id,
            created_at: Utc::now(),
        };
        self.notes.lock().unwrap().push(note.clone());
        Ok(note)
    }
}
