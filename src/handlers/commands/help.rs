//! Help command handler

use teloxide::utils::command::BotCommands;
use crate::utils::errors::Result;
use crate::handlers::context::BotContext;
use crate::handlers::event::Sender;
use crate::handlers::texts;
use super::Command;

/// Handle /help command
pub async fn handle_help(ctx: &BotContext, sender: &Sender) -> Result<()> {
    ctx.reply(sender.chat_id, &Command::descriptions().to_string()).await?;
    Ok(())
}

/// /brief, /calendar, /remind and /request have no behavior yet
pub async fn handle_placeholder(ctx: &BotContext, sender: &Sender, command: &Command) -> Result<()> {
    tracing::debug!(user_id = sender.user_id, command = command.name(), "Placeholder command");
    ctx.reply(sender.chat_id, texts::NOT_AVAILABLE).await?;
    Ok(())
}
