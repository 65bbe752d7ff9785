//! Callback query handlers module
//!
//! This module contains handlers for all inline keyboard button callbacks.
//! Callbacks are acknowledged by the dispatcher before they get here.

use tracing::{info, warn};
use crate::state::DialogueState;
use crate::utils::errors::Result;
use super::context::BotContext;
use super::event::{CallbackAction, Sender};
use super::{location, notes, texts};

/// Main callback query dispatcher
pub async fn handle_callback(
    ctx: &BotContext,
    sender: &Sender,
    data: &str,
    message_text: Option<&str>,
    current: Option<DialogueState>,
) -> Result<()> {
    info!(user_id = sender.user_id, callback_data = %data, "Processing callback query");

    match CallbackAction::parse(data) {
        CallbackAction::ShareLocation => location::handle_share_location(ctx, sender, current).await,
        CallbackAction::ManualLocation => location::handle_manual_location(ctx, sender, current).await,
        CallbackAction::SaveToNotes => notes::save_message_as_note(ctx, sender, message_text).await,
        CallbackAction::Notes(action) => notes::start_note_action(ctx, sender, current, action).await,
        CallbackAction::Unknown(data) => {
            warn!(user_id = sender.user_id, callback_data = %data, "Unknown callback data");
            ctx.reply(sender.chat_id, texts::UNSUPPORTED_ACTION).await?;
            Ok(())
        }
    }
}
