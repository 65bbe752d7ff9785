//! Personal Assistant Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn, error};

use assistant_bot::{
    config::Settings,
    database::{create_pool, run_migrations, DatabaseConfig, PgUserStore},
    dispatcher,
    gateway::TelegramMessenger,
    handlers::{BotContext, Command},
    services::ProviderClient,
    state::InMemoryStateStore,
    utils::logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let settings = Settings::new()?;
    if let Err(e) = settings.validate() {
        eprintln!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    // Initialize logging; the guard flushes the file writer on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", assistant_bot::info());

    // Initialize database connection
    info!("Connecting to database...");
    let db_pool = create_pool(&DatabaseConfig::from(&settings.database)).await?;

    // Run database migrations
    info!("Running database migrations...");
    run_migrations(&db_pool).await?;

    // Initialize bot
    let mut bot = Bot::new(&settings.bot.token);
    if let Some(api_url) = &settings.bot.api_url {
        info!(api_url = %api_url, "Using custom Bot API server");
        bot = bot.set_api_url(url::Url::parse(api_url)?);
    }

    let me = match connect(&bot, settings.bot.connect_retries).await {
        Ok(me) => me,
        Err(e) => {
            error!(error = %e, "Could not reach the Telegram Bot API");
            return Err(e.into());
        }
    };
    info!(username = ?me.username, "Connected to Telegram");

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let providers = ProviderClient::new(&settings.providers)?;
    let context = Arc::new(BotContext::new(
        Arc::new(TelegramMessenger::new(bot.clone())),
        Arc::new(PgUserStore::new(db_pool)),
        Arc::new(InMemoryStateStore::new()),
        providers,
    ));

    // Create dispatcher with dependencies registered
    let mut dispatcher = Dispatcher::builder(bot, dispatcher::schema())
        .dependencies(dptree::deps![context])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd.kind);
        })
        .enable_ctrlc_handler()
        .build();

    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;

    info!("Bot has been shut down.");

    Ok(())
}

/// Call `get_me`, retrying up to `retries` more times before giving up
async fn connect(bot: &Bot, retries: u32) -> Result<Me, teloxide::RequestError> {
    let mut attempt = 0;
    loop {
        match bot.get_me().await {
            Ok(me) => return Ok(me),
            Err(e) if attempt < retries => {
                attempt += 1;
                warn!(attempt = attempt, retries = retries, error = %e, "Telegram connection failed, retrying");
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
            Err(e) => return Err(e),
        }
    }
}
