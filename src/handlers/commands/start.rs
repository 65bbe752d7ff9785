//! Start command handler
//!
//! Handles /start (registration and onboarding), /location (the edit-address
//! entry point) and /cancel.

use tracing::info;
use crate::gateway::Keyboard;
use crate::models::User;
use crate::state::DialogueState;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;
use crate::handlers::context::BotContext;
use crate::handlers::event::Sender;
use crate::handlers::{location, texts};

/// Handle /start command - main entry point for user onboarding
pub async fn handle_start(ctx: &BotContext, sender: &Sender, current: Option<DialogueState>) -> Result<()> {
    let user_id = sender.user_id;

    if ctx.users.is_known_user(user_id).await? {
        info!(user_id = user_id, "Existing user started bot");
        ctx.reply(sender.chat_id, &texts::welcome_back(&sender.first_name)).await?;
        return Ok(());
    }

    info!(user_id = user_id, "New user starting onboarding");
    let user = User::new(user_id, sender.display_name(), sender.language_code.as_deref());
    ctx.users.add_user(&user).await?;
    log_user_action(user_id, "registered", Some(&user.language));

    ctx.reply(sender.chat_id, &texts::greeting(&sender.first_name)).await?;
    location::start_location_flow(ctx, sender, current.as_ref()).await
}

/// Handle /location command - restart the location dialogue for a known user
pub async fn handle_location(ctx: &BotContext, sender: &Sender, current: Option<DialogueState>) -> Result<()> {
    if !ctx.users.is_known_user(sender.user_id).await? {
        ctx.reply(sender.chat_id, texts::NOT_REGISTERED).await?;
        return Ok(());
    }

    location::start_location_flow(ctx, sender, current.as_ref()).await
}

/// Handle /cancel command
pub async fn handle_cancel(ctx: &BotContext, sender: &Sender, current: Option<DialogueState>) -> Result<()> {
    match current {
        Some(state) => {
            ctx.finish(sender.user_id, Some(&state)).await;
            ctx.reply_with(sender.chat_id, texts::DIALOGUE_CANCELLED, Keyboard::Remove).await?;
        }
        None => {
            ctx.reply(sender.chat_id, texts::NOTHING_TO_CANCEL).await?;
        }
    }
    Ok(())
}
