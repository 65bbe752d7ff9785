//! Messaging gateway
//!
//! The outbound seam between the dialogue handlers and the chat platform.
//! Handlers describe keyboards with [`Keyboard`]; the platform adapter turns
//! them into native markup.

pub mod telegram;

pub use telegram::TelegramMessenger;

use async_trait::async_trait;
use crate::utils::errors::Result;

/// Inline button with callback data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub data: String,
}

impl InlineButton {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// Keyboard attached to an outgoing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Buttons under the message that answer with a callback
    Inline(Vec<Vec<InlineButton>>),
    /// One-time reply keyboard whose buttons send their label as text
    Reply(Vec<Vec<String>>),
    /// Single reply button that shares the user's location
    RequestLocation { label: String },
    /// Remove any reply keyboard still shown
    Remove,
}

impl Keyboard {
    pub fn inline_row(buttons: Vec<InlineButton>) -> Self {
        Self::Inline(vec![buttons])
    }

    pub fn reply_row<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self::Reply(vec![labels.into_iter().map(Into::into).collect()])
    }
}

/// Outbound messaging operations used by the handlers
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a text message and return its message id
    async fn send_text(&self, chat_id: i64, text: &str, keyboard: Option<Keyboard>) -> Result<i32>;

    /// Delete a previously sent message
    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<()>;
}
