//! Error handling for the assistant bot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the assistant bot
#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Messaging gateway error: {0}")]
    Gateway(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Data provider specific errors (weather, quotes, geocoding)
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    RequestFailed(String),

    #[error("Provider timeout")]
    Timeout,

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned no results")]
    EmptyResult,

    #[error("Provider service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for assistant bot operations
pub type Result<T> = std::result::Result<T, AssistantError>;

/// Result type alias for provider operations
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_connect() {
            ProviderError::ServiceUnavailable
        } else if e.is_decode() {
            ProviderError::InvalidResponse(e.to_string())
        } else {
            ProviderError::RequestFailed(e.to_string())
        }
    }
}

/// How a failure should be treated by the dialogue handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Gateway, provider or store unreachable
    Transport,
    /// Empty or malformed data
    Data,
    /// No dialogue where one was expected
    State,
    /// Missing configuration or backend at boot
    Startup,
}

impl AssistantError {
    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            AssistantError::Migration(_)
            | AssistantError::Config(_)
            | AssistantError::UrlParse(_) => ErrorCategory::Startup,
            AssistantError::Provider(ProviderError::EmptyResult)
            | AssistantError::Provider(ProviderError::InvalidResponse(_))
            | AssistantError::Serialization(_)
            | AssistantError::InvalidInput(_) => ErrorCategory::Data,
            AssistantError::UserNotFound { .. } => ErrorCategory::State,
            _ => ErrorCategory::Transport,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Startup => ErrorSeverity::Critical,
            ErrorCategory::Transport => ErrorSeverity::Error,
            ErrorCategory::State => ErrorSeverity::Warning,
            ErrorCategory::Data => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
