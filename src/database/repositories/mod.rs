//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod note;
pub mod user;

// Re-export repositories
pub use note::NoteRepository;
pub use user::UserRepository;
