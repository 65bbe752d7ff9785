//! Telegram implementation of the messaging gateway

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    KeyboardRemove, MessageId, ReplyMarkup,
};
use tracing::debug;
use crate::utils::errors::Result;
use super::{Keyboard, Messenger};

/// Messenger backed by the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

impl From<Keyboard> for ReplyMarkup {
    fn from(keyboard: Keyboard) -> Self {
        match keyboard {
            Keyboard::Inline(rows) => {
                let rows = rows.into_iter().map(|row| {
                    row.into_iter()
                        .map(|button| InlineKeyboardButton::callback(button.label, button.data))
                        .collect::<Vec<_>>()
                });
                InlineKeyboardMarkup::new(rows).into()
            }
            Keyboard::Reply(rows) => {
                let rows = rows.into_iter().map(|row| {
                    row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>()
                });
                KeyboardMarkup::new(rows)
                    .resize_keyboard()
                    .one_time_keyboard()
                    .into()
            }
            Keyboard::RequestLocation { label } => {
                let button = KeyboardButton::new(label).request(ButtonRequest::Location);
                KeyboardMarkup::new(vec![vec![button]])
                    .resize_keyboard()
                    .one_time_keyboard()
                    .into()
            }
            Keyboard::Remove => KeyboardRemove::new().into(),
        }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, chat_id: i64, text: &str, keyboard: Option<Keyboard>) -> Result<i32> {
        let mut request = self.bot.send_message(ChatId(chat_id), text);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(ReplyMarkup::from(keyboard));
        }
        let sent = request.await?;
        debug!(chat_id = chat_id, message_id = sent.id.0, "Message sent");
        Ok(sent.id.0)
    }

    async fn delete_message(&self, chat_id: i64, message_id: i32) -> Result<()> {
        self.bot.delete_message(ChatId(chat_id), MessageId(message_id)).await?;
        debug!(chat_id = chat_id, message_id = message_id, "Message deleted");
        Ok(())
    }
}
