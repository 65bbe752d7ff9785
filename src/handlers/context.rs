//! Handler context
//!
//! Shared collaborators of the dialogue handlers, injected once at startup.

use std::sync::Arc;
use crate::database::UserStore;
use crate::gateway::{Keyboard, Messenger};
use crate::services::ProviderClient;
use crate::state::{ConversationStore, DialogueState, UserLocks, step_name};
use crate::utils::errors::Result;
use crate::utils::logging::log_transition;

#[derive(Clone)]
pub struct BotContext {
    pub messenger: Arc<dyn Messenger>,
    pub users: Arc<dyn UserStore>,
    pub states: Arc<dyn ConversationStore>,
    pub providers: ProviderClient,
    pub locks: UserLocks,
}

impl BotContext {
    pub fn new(
        messenger: Arc<dyn Messenger>,
        users: Arc<dyn UserStore>,
        states: Arc<dyn ConversationStore>,
        providers: ProviderClient,
    ) -> Self {
        Self {
            messenger,
            users,
            states,
            providers,
            locks: UserLocks::new(),
        }
    }

    pub async fn reply(&self, chat_id: i64, text: &str) -> Result<i32> {
        self.messenger.send_text(chat_id, text, None).await
    }

    pub async fn reply_with(&self, chat_id: i64, text: &str, keyboard: Keyboard) -> Result<i32> {
        self.messenger.send_text(chat_id, text, Some(keyboard)).await
    }

    /// Store the next step for a user
    pub async fn transition(&self, user_id: i64, from: Option<&DialogueState>, to: DialogueState) {
        log_transition(user_id, step_name(from), to.name());
        self.states.set(user_id, to).await;
    }

    /// Return a user to idle
    pub async fn finish(&self, user_id: i64, from: Option<&DialogueState>) {
        log_transition(user_id, step_name(from), step_name(None));
        self.states.delete(user_id).await;
    }
}
