//! Bot handlers module
//!
//! The dialogue engine. Every inbound event runs under its user's lock: the
//! current state is read once, one step is taken, and the next state written.
//!
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for text and location messages

pub mod callbacks;
pub mod commands;
pub mod context;
pub mod event;
pub mod location;
pub mod messages;
pub mod notes;
pub mod texts;

pub use commands::Command;
pub use context::BotContext;
pub use event::{CallbackAction, EventKind, InboundEvent, NoteAction, Sender};

use tracing::{debug, error, warn};
use crate::state::step_name;
use crate::utils::errors::{AssistantError, ErrorCategory, Result};

/// Process one inbound event.
///
/// Store and provider failures are answered with an apology and leave the
/// dialogue state as it was. Only failures to talk to the messaging gateway
/// are returned.
pub async fn handle_event(ctx: &BotContext, event: InboundEvent) -> Result<()> {
    let user_id = event.user_id();
    let _guard = ctx.locks.acquire(user_id).await;

    let current = ctx.states.get(user_id).await;
    debug!(
        user_id = user_id,
        event = event.kind_name(),
        step = step_name(current.as_ref()),
        "Handling event"
    );

    let sender = &event.sender;
    let result = match &event.kind {
        EventKind::Command(command) => {
            commands::handle_command(ctx, sender, command.clone(), current).await
        }
        EventKind::Callback { data, message_text } => {
            callbacks::handle_callback(ctx, sender, data, message_text.as_deref(), current).await
        }
        EventKind::Text(text) => messages::handle_text(ctx, sender, text, current).await,
        EventKind::Location { latitude, longitude } => {
            messages::handle_location(ctx, sender, *latitude, *longitude, current).await
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e @ (AssistantError::Telegram(_) | AssistantError::Gateway(_))) => {
            error!(user_id = user_id, error = %e, "Failed to reach the messaging gateway");
            Err(e)
        }
        Err(e) => {
            warn!(
                user_id = user_id,
                error = %e,
                category = ?e.category(),
                severity = %e.severity(),
                "Event handling failed"
            );
            let text = match e.category() {
                ErrorCategory::State => texts::START_AGAIN,
                _ => texts::GENERIC_ERROR,
            };
            ctx.reply(sender.chat_id, text).await?;
            Ok(())
        }
    }
}
