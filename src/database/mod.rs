//! Database module
//!
//! This module handles database connections and user/note persistence

pub mod connection;
pub mod repositories;
pub mod store;

// Re-export commonly used database components
pub use connection::{DatabasePool, DatabaseConfig, create_pool, run_migrations};
pub use repositories::{UserRepository, NoteRepository};
pub use store::{UserStore, PgUserStore};
