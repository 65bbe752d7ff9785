//! Message handlers module
//!
//! Handles free text and shared locations. Text only means something while a
//! dialogue is active; with no dialogue it is ignored.

use tracing::debug;
use crate::state::DialogueState;
use crate::utils::errors::Result;
use super::context::BotContext;
use super::event::Sender;
use super::{location, notes};

/// Handle incoming text messages
pub async fn handle_text(
    ctx: &BotContext,
    sender: &Sender,
    text: &str,
    current: Option<DialogueState>,
) -> Result<()> {
    let Some(state) = current else {
        debug!(user_id = sender.user_id, "Text outside a dialogue, ignoring");
        return Ok(());
    };

    if state.is_location_flow() {
        location::handle_text(ctx, sender, state, text).await
    } else {
        notes::handle_text(ctx, sender, state, text).await
    }
}

/// Handle incoming location messages
pub async fn handle_location(
    ctx: &BotContext,
    sender: &Sender,
    latitude: f64,
    longitude: f64,
    current: Option<DialogueState>,
) -> Result<()> {
    location::handle_shared_location(ctx, sender, current, latitude, longitude).await
}
