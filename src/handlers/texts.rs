//! User-facing message texts and button labels

pub const LOCATION_REQUEST: &str = "To provide you with weather updates, can I use your location?";
pub const SEND_LOCATION: &str = "Please send me your location from the pin menu";
pub const ENTER_CITY: &str = "Please enter your city:";
pub const ENTER_COUNTRY: &str = "Please enter your country:";
pub const CHOOSE_UNITS: &str = "Great! Now, do you prefer metric (Celsius) or imperial (Fahrenheit) units?";
pub const INVALID_CHOICE: &str = "Invalid input. Please select from the options provided.";
pub const PROFILE_SAVED: &str = "Your information has been saved. Welcome!";
pub const ONBOARDING_CANCELLED: &str = "Onboarding cancelled. You can start again with /start";
pub const GEOCODING_FAILED: &str = "Error getting location information. Please try again later.";
pub const SAVE_FAILED: &str = "Error updating user information. Please try again later.";
pub const START_AGAIN: &str = "Sorry, I didn't understand that. Please start again with /start";
pub const NOT_REGISTERED: &str = "Please use /start first.";
pub const NO_LOCATION: &str = "I don't know your location yet. Set it with /location";
pub const LOCATION_IN_PROGRESS: &str =
    "You're already setting your location. Finish the current step or send /cancel.";
pub const DIALOGUE_CANCELLED: &str = "Cancelled.";
pub const NOTHING_TO_CANCEL: &str = "Nothing to cancel.";

pub const NOTE_SAVED: &str = "Saved! Check with /notes";
pub const SEND_NOTE: &str = "Send me your note";
pub const EMPTY_NOTE: &str = "The note is empty. Send me your note";
pub const NOTES_HEADER: &str = "Your Notes:\n-------------\n\n";
pub const NO_NOTES: &str = "You have no notes yet.";
pub const INVALID_NOTE_NUMBER: &str = "That note number is not in the list. Open /notes to try again.";
pub const UNSUPPORTED_ACTION: &str = "Unsupported action. Contact developer!";

pub const QUOTE_FAILED: &str = "Error Getting Quote";
pub const WEATHER_FAILED: &str = "Error getting weather information. Please try again later.";
pub const GENERIC_ERROR: &str = "Error occured. Contact developer!";
pub const NOT_AVAILABLE: &str = "This feature is not available yet.";

pub const SHARE_LOCATION_BUTTON: &str = "📍 Share Location";
pub const MANUAL_INPUT_BUTTON: &str = "✏️ Manual Input";
pub const SAVE_TO_NOTES_BUTTON: &str = "💾 Save to Notes";
pub const CONFIRM: &str = "Confirm";
pub const CANCEL: &str = "Cancel";

pub const NOTES_ADD_BUTTON: &str = "➕ Add";
pub const NOTES_EDIT_BUTTON: &str = "✏️ Edit";
pub const NOTES_DELETE_BUTTON: &str = "🗑 Delete";
pub const NOTES_SHARE_BUTTON: &str = "📤 Share";

pub fn greeting(first_name: &str) -> String {
    format!("Hello {}, I'm here to help you!", first_name)
}

pub fn welcome_back(first_name: &str) -> String {
    format!("Hello {}, welcome back!", first_name)
}

/// Prompt asking for a note number for one of the id-based note actions
pub fn note_number_prompt(action: &str) -> String {
    format!("Send me (#) of the note you want to {}", action)
}

pub fn note_action_unavailable(action: &str, number: usize) -> String {
    format!("Note #{} selected. The {} action is not available yet.", number, action)
}
