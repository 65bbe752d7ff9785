//! State management module
//!
//! This module handles per-user dialogue state and event serialization

pub mod dialogue;
pub mod locks;
pub mod storage;

// Re-export commonly used state components
pub use dialogue::{DialogueState, ProfileDraft, step_name};
pub use locks::UserLocks;
pub use storage::{ConversationStore, InMemoryStateStore};
