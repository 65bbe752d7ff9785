//! Update routing
//!
//! dptree routing table that turns Telegram updates into [`InboundEvent`]s
//! and hands them to the dialogue engine. Callback queries are acknowledged
//! here before anything else happens.

use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Message, User as TelegramUser};
use tracing::{debug, error, warn};
use crate::handlers::{self, BotContext, Command, EventKind, InboundEvent, Sender};

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// Create the main update handler
pub fn schema() -> UpdateHandler<HandlerError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter(|msg: Message| msg.chat.is_private())
                .branch(
                    // Handle commands
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(on_command),
                )
                .branch(
                    // Handle text and location messages
                    dptree::endpoint(on_message),
                ),
        )
        .branch(
            // Handle callback queries
            Update::filter_callback_query().endpoint(on_callback),
        )
}

fn sender_from(user: &TelegramUser, chat_id: i64) -> Sender {
    Sender {
        user_id: user.id.0 as i64,
        chat_id,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        language_code: user.language_code.clone(),
    }
}

/// Event for a non-command message, `None` for content the bot does not read
pub fn message_event(msg: &Message) -> Option<InboundEvent> {
    let user = msg.from.as_ref()?;
    let sender = sender_from(user, msg.chat.id.0);

    if let Some(location) = msg.location() {
        return Some(InboundEvent::new(
            sender,
            EventKind::Location {
                latitude: location.latitude,
                longitude: location.longitude,
            },
        ));
    }

    msg.text()
        .map(|text| InboundEvent::new(sender, EventKind::Text(text.to_string())))
}

/// Whether the pressed button sits in a private chat with the bot
pub fn from_private_chat(query: &CallbackQuery) -> bool {
    query
        .message
        .as_ref()
        .is_some_and(|message| message.chat().is_private())
}

pub fn callback_event(query: &CallbackQuery) -> Option<InboundEvent> {
    let data = query.data.clone()?;
    let message = query.message.as_ref();
    let chat_id = message
        .map(|m| m.chat().id.0)
        .unwrap_or(query.from.id.0 as i64);

    Some(InboundEvent::new(
        sender_from(&query.from, chat_id),
        EventKind::Callback {
            data,
            message_text: message
                .and_then(|m| m.regular_message())
                .and_then(|m| m.text())
                .map(str::to_string),
        },
    ))
}

async fn run(ctx: &BotContext, event: InboundEvent) -> HandlerResult {
    let user_id = event.user_id();
    if let Err(e) = handlers::handle_event(ctx, event).await {
        error!(user_id = user_id, error = %e, "Failed to handle event");
        return Err(Box::new(e));
    }
    Ok(())
}

async fn on_command(msg: Message, cmd: Command, ctx: Arc<BotContext>) -> HandlerResult {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let event = InboundEvent::new(sender_from(user, msg.chat.id.0), EventKind::Command(cmd));
    run(&ctx, event).await
}

async fn on_message(msg: Message, ctx: Arc<BotContext>) -> HandlerResult {
    match message_event(&msg) {
        Some(event) => run(&ctx, event).await,
        None => {
            debug!(chat_id = msg.chat.id.0, "Ignoring unsupported message");
            Ok(())
        }
    }
}

async fn on_callback(bot: Bot, query: CallbackQuery, ctx: Arc<BotContext>) -> HandlerResult {
    // Answer the callback query first to remove loading state
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        warn!(error = %e, callback_id = %query.id, "Failed to answer callback query");
    }

    if !from_private_chat(&query) {
        debug!(user_id = query.from.id.0, "Ignoring callback outside a private chat");
        return Ok(());
    }

    match callback_event(&query) {
        Some(event) => run(&ctx, event).await,
        None => {
            debug!(user_id = query.from.id.0, "Callback query without data");
            Ok(())
        }
    }
}
