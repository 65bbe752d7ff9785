//! Dialogue states
//!
//! One enum value per user in a multi-step flow. A user with no stored state
//! is idle.

use serde::{Deserialize, Serialize};
use crate::models::{UnitSystem, User};

/// Profile fields collected during the location dialogue.
///
/// Kept out of the user store until the user confirms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub city: Option<String>,
    pub country: Option<String>,
    pub units: Option<UnitSystem>,
}

impl ProfileDraft {
    pub fn with_location(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            country: Some(country.into()),
            units: None,
        }
    }

    /// Copy the collected fields onto a stored user
    pub fn apply_to(&self, user: &mut User) {
        if let Some(city) = &self.city {
            user.city = Some(city.clone());
        }
        if let Some(country) = &self.country {
            user.country = Some(country.clone());
        }
        if let Some(units) = self.units {
            user.units = units;
        }
    }

    /// Confirmation summary shown before saving
    pub fn summary(&self) -> String {
        format!(
            "Please confirm your details:\nCity: {}\nCountry: {}\nUnits: {}",
            self.city.as_deref().unwrap_or_default(),
            self.country.as_deref().unwrap_or_default(),
            self.units.map(|u| u.as_str()).unwrap_or_default(),
        )
    }
}

/// Where a user currently is in a multi-step flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum DialogueState {
    WaitingForLocation {
        /// Message carrying the location prompt, deleted once a location arrives
        prompt_message_id: Option<i32>,
        #[serde(default)]
        draft: ProfileDraft,
    },
    WaitingForCity {
        #[serde(default)]
        draft: ProfileDraft,
    },
    WaitingForCountry {
        #[serde(default)]
        draft: ProfileDraft,
    },
    WaitingForUnits {
        #[serde(default)]
        draft: ProfileDraft,
    },
    WaitingForConfirmation {
        #[serde(default)]
        draft: ProfileDraft,
    },
    WaitingForNoteAdd,
    WaitingForNoteEditId,
    WaitingForNoteDeleteId,
    WaitingForNoteShareId,
}

impl DialogueState {
    pub fn waiting_for_location(prompt_message_id: Option<i32>) -> Self {
        Self::WaitingForLocation {
            prompt_message_id,
            draft: ProfileDraft::default(),
        }
    }

    /// Stable step name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::WaitingForLocation { .. } => "waiting_for_location",
            Self::WaitingForCity { .. } => "waiting_for_city",
            Self::WaitingForCountry { .. } => "waiting_for_country",
            Self::WaitingForUnits { .. } => "waiting_for_units",
            Self::WaitingForConfirmation { .. } => "waiting_for_confirmation",
            Self::WaitingForNoteAdd => "waiting_for_note_add",
            Self::WaitingForNoteEditId => "waiting_for_note_edit_id",
            Self::WaitingForNoteDeleteId => "waiting_for_note_delete_id",
            Self::WaitingForNoteShareId => "waiting_for_note_share_id",
        }
    }

    pub fn is_location_flow(&self) -> bool {
        matches!(
            self,
            Self::WaitingForLocation { .. }
                | Self::WaitingForCity { .. }
                | Self::WaitingForCountry { .. }
                | Self::WaitingForUnits { .. }
                | Self::WaitingForConfirmation { .. }
        )
    }
}

/// Log name for an optional state, `idle` when absent
pub fn step_name(state: Option<&DialogueState>) -> &'static str {
    state.map(DialogueState::name).unwrap_or("idle")
}
