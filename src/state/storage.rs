//! Conversation state storage
//!
//! Keyed by user id. The in-memory store is process-local; a restart returns
//! every user to idle.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use super::dialogue::DialogueState;

/// Per-user dialogue state persistence
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Current state, `None` when the user is idle
    async fn get(&self, user_id: i64) -> Option<DialogueState>;

    async fn set(&self, user_id: i64, state: DialogueState);

    /// Return the user to idle
    async fn delete(&self, user_id: i64);
}

/// HashMap-backed state store
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStore {
    states: Arc<RwLock<HashMap<i64, DialogueState>>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users currently inside a flow
    pub async fn active_count(&self) -> usize {
        self.states.read().await.len()
    }
}

#[async_trait]
impl ConversationStore for InMemoryStateStore {
    async fn get(&self, user_id: i64) -> Option<DialogueState> {
        self.states.read().await.get(&user_id).cloned()
    }

    async fn set(&self, user_id: i64, state: DialogueState) {
        debug!(user_id = user_id, step = state.name(), "Saving dialogue state");
        self.states.write().await.insert(user_id, state);
    }

    async fn delete(&self, user_id: i64) {
        if self.states.write().await.remove(&user_id).is_some() {
            debug!(user_id = user_id, "Cleared dialogue state");
        }
    }
}
