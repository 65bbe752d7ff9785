//! Location dialogue
//!
//! Collects city, country and unit system for a user:
//! location choice, then either a shared location (reverse geocoded) or
//! manual city/country entry, then units, then confirmation. The collected
//! values live in a [`ProfileDraft`] until the user confirms.

use tracing::{debug, info, warn};
use crate::gateway::{InlineButton, Keyboard};
use crate::models::UnitSystem;
use crate::state::{step_name, DialogueState, ProfileDraft};
use crate::utils::errors::{ProviderError, Result};
use crate::utils::logging::{log_provider_error, log_user_action};
use super::context::BotContext;
use super::event::{Sender, MANUAL_LOCATION, SHARE_LOCATION};
use super::texts;

pub fn location_choice_keyboard() -> Keyboard {
    Keyboard::inline_row(vec![
        InlineButton::new(texts::SHARE_LOCATION_BUTTON, SHARE_LOCATION),
        InlineButton::new(texts::MANUAL_INPUT_BUTTON, MANUAL_LOCATION),
    ])
}

pub fn units_keyboard() -> Keyboard {
    Keyboard::Reply(vec![
        vec![UnitSystem::Metric.label().to_string()],
        vec![UnitSystem::Imperial.label().to_string()],
    ])
}

pub fn confirmation_keyboard() -> Keyboard {
    Keyboard::reply_row([texts::CONFIRM, texts::CANCEL])
}

/// Ask how the user wants to provide a location and wait for the choice
pub async fn start_location_flow(
    ctx: &BotContext,
    sender: &Sender,
    current: Option<&DialogueState>,
) -> Result<()> {
    let prompt_id = ctx
        .reply_with(sender.chat_id, texts::LOCATION_REQUEST, location_choice_keyboard())
        .await?;
    ctx.transition(sender.user_id, current, DialogueState::waiting_for_location(Some(prompt_id)))
        .await;
    Ok(())
}

/// Location callbacks only act before city/country entry has started
fn accepts_location_choice(current: Option<&DialogueState>) -> bool {
    match current {
        Some(DialogueState::WaitingForLocation { .. }) => true,
        Some(state) => !state.is_location_flow(),
        None => true,
    }
}

async fn report_in_progress(ctx: &BotContext, sender: &Sender, current: Option<&DialogueState>) -> Result<()> {
    debug!(
        user_id = sender.user_id,
        step = step_name(current),
        "Location choice pressed while the dialogue is past it"
    );
    ctx.reply(sender.chat_id, texts::LOCATION_IN_PROGRESS).await?;
    Ok(())
}

/// `share_location` button: ask for the location through the attachment menu
pub async fn handle_share_location(
    ctx: &BotContext,
    sender: &Sender,
    current: Option<DialogueState>,
) -> Result<()> {
    if !accepts_location_choice(current.as_ref()) {
        return report_in_progress(ctx, sender, current.as_ref()).await;
    }

    let draft = match &current {
        Some(DialogueState::WaitingForLocation { draft, .. }) => draft.clone(),
        _ => ProfileDraft::default(),
    };

    let prompt_id = ctx
        .reply_with(
            sender.chat_id,
            texts::SEND_LOCATION,
            Keyboard::RequestLocation { label: texts::SHARE_LOCATION_BUTTON.to_string() },
        )
        .await?;

    ctx.transition(
        sender.user_id,
        current.as_ref(),
        DialogueState::WaitingForLocation { prompt_message_id: Some(prompt_id), draft },
    )
    .await;
    Ok(())
}

/// `manual_location` button: switch to typed city and country entry
pub async fn handle_manual_location(
    ctx: &BotContext,
    sender: &Sender,
    current: Option<DialogueState>,
) -> Result<()> {
    if !accepts_location_choice(current.as_ref()) {
        return report_in_progress(ctx, sender, current.as_ref()).await;
    }

    let draft = match &current {
        Some(DialogueState::WaitingForLocation { prompt_message_id, draft }) => {
            if let Some(message_id) = prompt_message_id {
                delete_prompt(ctx, sender.chat_id, *message_id).await;
            }
            draft.clone()
        }
        _ => ProfileDraft::default(),
    };

    ctx.reply_with(sender.chat_id, texts::ENTER_CITY, Keyboard::Remove).await?;
    ctx.transition(sender.user_id, current.as_ref(), DialogueState::WaitingForCity { draft })
        .await;
    Ok(())
}

/// Shared location while waiting for one: reverse geocode and ask for units
pub async fn handle_shared_location(
    ctx: &BotContext,
    sender: &Sender,
    current: Option<DialogueState>,
    latitude: f64,
    longitude: f64,
) -> Result<()> {
    let Some(DialogueState::WaitingForLocation { prompt_message_id, mut draft }) = current.clone() else {
        debug!(user_id = sender.user_id, "Location received outside the location dialogue, ignoring");
        return Ok(());
    };

    let location = match ctx.providers.reverse_geocode(latitude, longitude).await {
        Ok(location) => location,
        Err(e) => {
            log_provider_error("geocoding", &e.to_string(), None);
            ctx.reply(sender.chat_id, texts::GEOCODING_FAILED).await?;
            return Ok(());
        }
    };

    let city = if location.city.trim().is_empty() { location.state } else { location.city };
    if city.trim().is_empty() || location.country.trim().is_empty() {
        log_provider_error("geocoding", &ProviderError::EmptyResult.to_string(), None);
        ctx.reply(sender.chat_id, texts::GEOCODING_FAILED).await?;
        return Ok(());
    }
    info!(user_id = sender.user_id, city = %city, country = %location.country, "Location resolved");
    draft.city = Some(city);
    draft.country = Some(location.country);

    if let Some(message_id) = prompt_message_id {
        delete_prompt(ctx, sender.chat_id, message_id).await;
    }

    ctx.reply_with(sender.chat_id, texts::CHOOSE_UNITS, units_keyboard()).await?;
    ctx.transition(sender.user_id, current.as_ref(), DialogueState::WaitingForUnits { draft })
        .await;
    Ok(())
}

/// Free text while a location dialogue step is active
pub async fn handle_text(
    ctx: &BotContext,
    sender: &Sender,
    current: DialogueState,
    text: &str,
) -> Result<()> {
    let chat_id = sender.chat_id;
    let user_id = sender.user_id;

    match &current {
        DialogueState::WaitingForLocation { .. } => {
            ctx.reply(chat_id, texts::INVALID_CHOICE).await?;
        }
        DialogueState::WaitingForCity { draft } => {
            let city = text.trim();
            if city.is_empty() {
                ctx.reply(chat_id, texts::ENTER_CITY).await?;
                return Ok(());
            }
            let mut draft = draft.clone();
            draft.city = Some(city.to_string());
            ctx.reply(chat_id, texts::ENTER_COUNTRY).await?;
            ctx.transition(user_id, Some(&current), DialogueState::WaitingForCountry { draft })
                .await;
        }
        DialogueState::WaitingForCountry { draft } => {
            let country = text.trim();
            if country.is_empty() {
                ctx.reply(chat_id, texts::ENTER_COUNTRY).await?;
                return Ok(());
            }
            let mut draft = draft.clone();
            draft.country = Some(country.to_string());
            ctx.reply_with(chat_id, texts::CHOOSE_UNITS, units_keyboard()).await?;
            ctx.transition(user_id, Some(&current), DialogueState::WaitingForUnits { draft })
                .await;
        }
        DialogueState::WaitingForUnits { draft } => {
            let Some(units) = UnitSystem::from_label(text) else {
                ctx.reply_with(chat_id, texts::INVALID_CHOICE, units_keyboard()).await?;
                return Ok(());
            };
            let mut draft = draft.clone();
            draft.units = Some(units);
            ctx.reply_with(chat_id, &draft.summary(), confirmation_keyboard()).await?;
            ctx.transition(user_id, Some(&current), DialogueState::WaitingForConfirmation { draft })
                .await;
        }
        DialogueState::WaitingForConfirmation { draft } => match text {
            texts::CONFIRM => confirm(ctx, sender, &current, draft).await?,
            texts::CANCEL => {
                ctx.finish(user_id, Some(&current)).await;
                ctx.reply_with(chat_id, texts::ONBOARDING_CANCELLED, Keyboard::Remove).await?;
                log_user_action(user_id, "location_cancelled", None);
            }
            _ => {
                ctx.reply_with(chat_id, texts::INVALID_CHOICE, confirmation_keyboard()).await?;
            }
        },
        other => {
            warn!(user_id = user_id, step = other.name(), "Not a location dialogue step");
        }
    }

    Ok(())
}

/// Persist the draft onto the stored user and end the dialogue
async fn confirm(
    ctx: &BotContext,
    sender: &Sender,
    current: &DialogueState,
    draft: &ProfileDraft,
) -> Result<()> {
    let user_id = sender.user_id;

    let mut user = match ctx.users.get_user(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(user_id = user_id, "Confirmation for a user missing from the store");
            ctx.finish(user_id, Some(current)).await;
            ctx.reply_with(sender.chat_id, texts::START_AGAIN, Keyboard::Remove).await?;
            return Ok(());
        }
        Err(e) => {
            warn!(user_id = user_id, error = %e, "Failed to load user for confirmation");
            ctx.reply(sender.chat_id, texts::SAVE_FAILED).await?;
            return Ok(());
        }
    };

    draft.apply_to(&mut user);

    if let Err(e) = ctx.users.update_user(&user).await {
        warn!(user_id = user_id, error = %e, "Failed to save user profile");
        ctx.reply(sender.chat_id, texts::SAVE_FAILED).await?;
        return Ok(());
    }

    ctx.finish(user_id, Some(current)).await;
    ctx.reply_with(sender.chat_id, texts::PROFILE_SAVED, Keyboard::Remove).await?;
    log_user_action(user_id, "location_saved", user.city.as_deref());
    Ok(())
}

/// Delete a prompt message; failures only get logged
async fn delete_prompt(ctx: &BotContext, chat_id: i64, message_id: i32) {
    if let Err(e) = ctx.messenger.delete_message(chat_id, message_id).await {
        warn!(chat_id = chat_id, message_id = message_id, error = %e, "Failed to delete prompt message");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_keyboard_labels() {
        match units_keyboard() {
            Keyboard::Reply(rows) => {
                assert_eq!(rows, vec![
                    vec!["Metric (Celsius)".to_string()],
                    vec!["Imperial (Fahrenheit)".to_string()],
                ]);
            }
            other => panic!("unexpected keyboard: {:?}", other),
        }
    }

    #[test]
    fn test_location_choice_callbacks() {
        match location_choice_keyboard() {
            Keyboard::Inline(rows) => {
                let data: Vec<_> = rows[0].iter().map(|b| b.data.as_str()).collect();
                assert_eq!(data, vec!["share_location", "manual_location"]);
            }
            other => panic!("unexpected keyboard: {:?}", other),
        }
    }
}
