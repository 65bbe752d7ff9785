//! Notes
//!
//! Listing, the notes menu, the save-to-notes button and the note sub-flows.
//! Only adding is backed by the store; edit, delete and share stop after the
//! note number is validated. Every sub-flow takes exactly one more message.

use tracing::{debug, info, warn};
use crate::gateway::{InlineButton, Keyboard};
use crate::models::{CreateNoteRequest, Note};
use crate::state::DialogueState;
use crate::utils::errors::Result;
use crate::utils::helpers;
use crate::utils::logging::log_user_action;
use super::context::BotContext;
use super::event::{NoteAction, Sender};
use super::texts;

pub fn notes_menu_keyboard() -> Keyboard {
    Keyboard::Inline(vec![
        vec![
            InlineButton::new(texts::NOTES_ADD_BUTTON, NoteAction::Add.callback_data()),
            InlineButton::new(texts::NOTES_EDIT_BUTTON, NoteAction::Edit.callback_data()),
        ],
        vec![
            InlineButton::new(texts::NOTES_DELETE_BUTTON, NoteAction::Delete.callback_data()),
            InlineButton::new(texts::NOTES_SHARE_BUTTON, NoteAction::Share.callback_data()),
        ],
    ])
}

/// Numbered listing, starting at 1
pub fn format_notes(notes: &[Note]) -> String {
    let mut text = String::from(texts::NOTES_HEADER);
    if notes.is_empty() {
        text.push_str(texts::NO_NOTES);
        return text;
    }
    for (i, note) in notes.iter().enumerate() {
        text.push_str(&format!("{}. {}\n\n", i + 1, note.text));
    }
    text
}

/// Parse a 1-based note number against the number of notes
pub fn parse_note_number(text: &str, count: usize) -> Option<usize> {
    text.trim()
        .trim_start_matches('#')
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=count).contains(n))
}

/// `/notes`
pub async fn show_notes(ctx: &BotContext, sender: &Sender) -> Result<()> {
    let notes = ctx.users.get_user_notes(sender.user_id).await?;
    info!(user_id = sender.user_id, count = notes.len(), "Listing notes");
    ctx.reply_with(sender.chat_id, &format_notes(&notes), notes_menu_keyboard()).await?;
    Ok(())
}

/// `save_to_notes` button under a quote: store the quote text
pub async fn save_message_as_note(
    ctx: &BotContext,
    sender: &Sender,
    message_text: Option<&str>,
) -> Result<()> {
    let Some(text) = message_text.filter(|t| !t.trim().is_empty()) else {
        warn!(user_id = sender.user_id, "Save to notes pressed on a message without text");
        ctx.reply(sender.chat_id, texts::GENERIC_ERROR).await?;
        return Ok(());
    };

    add_note(ctx, sender, text, None).await
}

/// Notes menu button
pub async fn start_note_action(
    ctx: &BotContext,
    sender: &Sender,
    current: Option<DialogueState>,
    action: NoteAction,
) -> Result<()> {
    let next = match action {
        NoteAction::Add => {
            ctx.reply(sender.chat_id, texts::SEND_NOTE).await?;
            ctx.transition(sender.user_id, current.as_ref(), DialogueState::WaitingForNoteAdd)
                .await;
            return Ok(());
        }
        NoteAction::Edit => DialogueState::WaitingForNoteEditId,
        NoteAction::Delete => DialogueState::WaitingForNoteDeleteId,
        NoteAction::Share => DialogueState::WaitingForNoteShareId,
    };

    let notes = ctx.users.get_user_notes(sender.user_id).await?;
    if notes.is_empty() {
        info!(user_id = sender.user_id, action = action.verb(), "Note action without notes");
        ctx.reply(sender.chat_id, texts::NO_NOTES).await?;
        return Ok(());
    }

    ctx.reply(sender.chat_id, &texts::note_number_prompt(action.verb())).await?;
    ctx.transition(sender.user_id, current.as_ref(), next).await;
    Ok(())
}

/// Free text while a note sub-flow is active
pub async fn handle_text(
    ctx: &BotContext,
    sender: &Sender,
    current: DialogueState,
    text: &str,
) -> Result<()> {
    let action = match &current {
        DialogueState::WaitingForNoteAdd => {
            if text.trim().is_empty() {
                ctx.reply(sender.chat_id, texts::EMPTY_NOTE).await?;
                return Ok(());
            }
            return add_note(ctx, sender, text, Some(&current)).await;
        }
        DialogueState::WaitingForNoteEditId => NoteAction::Edit,
        DialogueState::WaitingForNoteDeleteId => NoteAction::Delete,
        DialogueState::WaitingForNoteShareId => NoteAction::Share,
        other => {
            warn!(user_id = sender.user_id, step = other.name(), "Not a note dialogue step");
            return Ok(());
        }
    };

    let notes = ctx.users.get_user_notes(sender.user_id).await?;
    ctx.finish(sender.user_id, Some(&current)).await;

    match parse_note_number(text, notes.len()) {
        Some(number) => {
            ctx.reply(sender.chat_id, &texts::note_action_unavailable(action.verb(), number))
                .await?;
        }
        None => {
            debug!(user_id = sender.user_id, action = action.verb(), "Invalid note number");
            ctx.reply(sender.chat_id, texts::INVALID_NOTE_NUMBER).await?;
        }
    }
    Ok(())
}

/// Store a note, ending `finishing` first when the note came from a sub-flow
async fn add_note(
    ctx: &BotContext,
    sender: &Sender,
    text: &str,
    finishing: Option<&DialogueState>,
) -> Result<()> {
    let note = ctx
        .users
        .add_note(CreateNoteRequest {
            text: text.to_string(),
            user_id: sender.user_id,
        })
        .await?;
    if let Some(current) = finishing {
        ctx.finish(sender.user_id, Some(current)).await;
    }
    log_user_action(sender.user_id, "note_saved", Some(&helpers::truncate_text(&note.text, 40)));
    ctx.reply(sender.chat_id, texts::NOTE_SAVED).await?;
    Ok(())
}
