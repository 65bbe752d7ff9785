//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub database: DatabaseConfig,
    pub providers: ProvidersConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Custom Bot API server; the public Telegram endpoint is used when unset
    pub api_url: Option<String>,
    pub debug: bool,
    /// Extra attempts to reach the Bot API at startup before giving up
    pub connect_retries: u32,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// External data provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProvidersConfig {
    pub weather_url: String,
    pub quote_url: String,
    pub geocoding_url: String,
    pub geocoding_api_key: String,
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when unset
    pub file_path: Option<String>,
}

/// Environment variables kept from the bot's earlier deployments, mapped onto
/// their configuration keys.
const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("TELEGRAM_BOT_TOKEN", "bot.token"),
    ("BOT_API_SERVER", "bot.api_url"),
    ("DATABASE_URL", "database.url"),
    ("GEOAPIFY_API_KEY", "providers.geocoding_api_key"),
];

impl Settings {
    /// Load settings from defaults, configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let defaults = config::Config::try_from(&Settings::default())?;
        let mut builder = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("ASSISTANT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        for (env_key, config_key) in LEGACY_ENV_KEYS {
            let value = std::env::var(env_key).ok().filter(|v| !v.is_empty());
            builder = builder.set_override_option(*config_key, value)?;
        }

        if std::env::var("BOT_DEBUG").map(|v| v == "true").unwrap_or(false) {
            builder = builder.set_override("bot.debug", true)?;
        }

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if settings.bot.debug {
            settings.logging.level = "debug".to_string();
        }

        Ok(settings)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AssistantError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                api_url: None,
                debug: false,
                connect_retries: 5,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/assistant".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            providers: ProvidersConfig {
                weather_url: "https://wttr.in".to_string(),
                quote_url: "https://thequoteshub.com/api/".to_string(),
                geocoding_url: "https://api.geoapify.com/v1/geocode".to_string(),
                geocoding_api_key: String::new(),
                timeout_seconds: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
