//! Personal Assistant Telegram Bot
//!
//! A Telegram bot that onboards users through a short location dialogue,
//! reports the weather for their city, shares inspirational quotes and keeps
//! personal notes.

pub mod config;
pub mod database;
pub mod dispatcher;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AssistantError, Result};

// Re-export main components for easy access
pub use database::{PgUserStore, UserStore};
pub use gateway::{Messenger, TelegramMessenger};
pub use handlers::{BotContext, InboundEvent};
pub use services::ProviderClient;
pub use state::{ConversationStore, DialogueState, InMemoryStateStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
