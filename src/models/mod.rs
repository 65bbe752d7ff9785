//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod note;
pub mod provider;
pub mod user;

// Re-export commonly used models
pub use note::{Note, CreateNoteRequest};
pub use provider::{WeatherInfo, Quote, LocationInfo};
pub use user::{User, UserRow, UnitSystem};
