//! Inbound events
//!
//! Platform-neutral form of an update, produced by the dispatcher and
//! consumed by the dialogue handlers.

use crate::utils::helpers;
use super::commands::Command;

/// Originating user of an event
#[derive(Debug, Clone, PartialEq)]
pub struct Sender {
    pub user_id: i64,
    pub chat_id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub language_code: Option<String>,
}

impl Sender {
    pub fn display_name(&self) -> String {
        helpers::display_name(&self.first_name, self.last_name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Command(Command),
    Callback {
        data: String,
        /// Text of the message the pressed button belongs to
        message_text: Option<String>,
    },
    Text(String),
    Location { latitude: f64, longitude: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    pub sender: Sender,
    pub kind: EventKind,
}

impl InboundEvent {
    pub fn new(sender: Sender, kind: EventKind) -> Self {
        Self { sender, kind }
    }

    pub fn user_id(&self) -> i64 {
        self.sender.user_id
    }

    /// Short label for logs
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EventKind::Command(_) => "command",
            EventKind::Callback { .. } => "callback",
            EventKind::Text(_) => "text",
            EventKind::Location { .. } => "location",
        }
    }
}

/// Note menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteAction {
    Add,
    Edit,
    Delete,
    Share,
}

impl NoteAction {
    pub fn callback_data(&self) -> &'static str {
        match self {
            NoteAction::Add => "notes_add",
            NoteAction::Edit => "notes_edit",
            NoteAction::Delete => "notes_delete",
            NoteAction::Share => "notes_share",
        }
    }

    /// Verb used in prompts
    pub fn verb(&self) -> &'static str {
        match self {
            NoteAction::Add => "add",
            NoteAction::Edit => "edit",
            NoteAction::Delete => "delete",
            NoteAction::Share => "share",
        }
    }
}

pub const SHARE_LOCATION: &str = "share_location";
pub const MANUAL_LOCATION: &str = "manual_location";
pub const SAVE_TO_NOTES: &str = "save_to_notes";

/// Parsed callback data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    ShareLocation,
    ManualLocation,
    SaveToNotes,
    Notes(NoteAction),
    Unknown(String),
}

impl CallbackAction {
    pub fn parse(data: &str) -> Self {
        match data {
            SHARE_LOCATION => CallbackAction::ShareLocation,
            MANUAL_LOCATION => CallbackAction::ManualLocation,
            SAVE_TO_NOTES => CallbackAction::SaveToNotes,
            "notes_add" => CallbackAction::Notes(NoteAction::Add),
            "notes_edit" => CallbackAction::Notes(NoteAction::Edit),
            "notes_delete" => CallbackAction::Notes(NoteAction::Delete),
            "notes_share" => CallbackAction::Notes(NoteAction::Share),
            other => CallbackAction::Unknown(other.to_string()),
        }
    }
}
