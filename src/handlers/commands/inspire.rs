//! Inspire command handler

use crate::gateway::{InlineButton, Keyboard};
use crate::models::Quote;
use crate::utils::errors::Result;
use crate::handlers::context::BotContext;
use crate::handlers::event::{Sender, SAVE_TO_NOTES};
use crate::handlers::texts;

pub fn format_quote(quote: &Quote) -> String {
    format!("“{}”\n— {}", quote.text, quote.author)
}

pub fn save_to_notes_keyboard() -> Keyboard {
    Keyboard::inline_row(vec![InlineButton::new(texts::SAVE_TO_NOTES_BUTTON, SAVE_TO_NOTES)])
}

/// Handle /inspire command
pub async fn handle_inspire(ctx: &BotContext, sender: &Sender) -> Result<()> {
    let language = sender.language_code.as_deref().unwrap_or("en");
    match ctx.providers.fetch_quote(language).await {
        Some(quote) => {
            ctx.reply_with(sender.chat_id, &format_quote(&quote), save_to_notes_keyboard())
                .await?;
        }
        None => {
            ctx.reply(sender.chat_id, texts::QUOTE_FAILED).await?;
        }
    }
    Ok(())
}
