//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod help;
pub mod inspire;
pub mod start;
pub mod weather;

use teloxide::utils::command::BotCommands;
use tracing::debug;
use crate::state::DialogueState;
use crate::utils::errors::Result;
use super::context::BotContext;
use super::event::Sender;
use super::notes;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Current weather for your city")]
    Weather,
    #[command(description = "Get an inspirational quote")]
    Inspire,
    #[command(description = "Show your notes")]
    Notes,
    #[command(description = "Daily brief")]
    Brief,
    #[command(description = "Your calendar")]
    Calendar,
    #[command(description = "Set a reminder")]
    Remind,
    #[command(description = "Send a request")]
    Request,
    #[command(description = "Change your location and units")]
    Location,
    #[command(description = "Cancel the current dialogue")]
    Cancel,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Weather => "weather",
            Command::Inspire => "inspire",
            Command::Notes => "notes",
            Command::Brief => "brief",
            Command::Calendar => "calendar",
            Command::Remind => "remind",
            Command::Request => "request",
            Command::Location => "location",
            Command::Cancel => "cancel",
        }
    }
}

/// Run a command. Commands other than the dialogue entry points leave any
/// active dialogue untouched.
pub async fn handle_command(
    ctx: &BotContext,
    sender: &Sender,
    command: Command,
    current: Option<DialogueState>,
) -> Result<()> {
    debug!(user_id = sender.user_id, command = command.name(), "Processing command");

    match command {
        Command::Start => start::handle_start(ctx, sender, current).await,
        Command::Location => start::handle_location(ctx, sender, current).await,
        Command::Cancel => start::handle_cancel(ctx, sender, current).await,
        Command::Help => help::handle_help(ctx, sender).await,
        Command::Weather => weather::handle_weather(ctx, sender).await,
        Command::Inspire => inspire::handle_inspire(ctx, sender).await,
        Command::Notes => notes::show_notes(ctx, sender).await,
        Command::Brief | Command::Calendar | Command::Remind | Command::Request => {
            help::handle_placeholder(ctx, sender, &command).await
        }
    }
}
