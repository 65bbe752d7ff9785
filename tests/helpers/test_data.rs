//! Event builders and provider payloads

use serde_json::{json, Value};
use assistant_bot::handlers::{Command, EventKind, InboundEvent, Sender};
use assistant_bot::models::{UnitSystem, User};

pub const USER_ID: i64 = 500001;

pub fn sender(user_id: i64) -> Sender {
    Sender {
        user_id,
        chat_id: user_id,
        first_name: "Ada".to_string(),
        last_name: Some("Lovelace".to_string()),
        language_code: Some("en".to_string()),
    }
}

pub fn command(user_id: i64, command: Command) -> InboundEvent {
    InboundEvent::new(sender(user_id), EventKind::Command(command))
}

pub fn text(user_id: i64, text: &str) -> InboundEvent {
    InboundEvent::new(sender(user_id), EventKind::Text(text.to_string()))
}

pub fn callback(user_id: i64, data: &str) -> InboundEvent {
    InboundEvent::new(
        sender(user_id),
        EventKind::Callback {
            data: data.to_string(),
            message_text: None,
        },
    )
}

pub fn callback_on_message(user_id: i64, data: &str, message_text: &str) -> InboundEvent {
    InboundEvent::new(
        sender(user_id),
        EventKind::Callback {
            data: data.to_string(),
            message_text: Some(message_text.to_string()),
        },
    )
}

pub fn location(user_id: i64, latitude: f64, longitude: f64) -> InboundEvent {
    InboundEvent::new(sender(user_id), EventKind::Location { latitude, longitude })
}

/// Registered user with a saved location
pub fn located_user(user_id: i64, units: UnitSystem) -> User {
    let mut user = User::new(user_id, "Ada Lovelace", Some("en"));
    user.city = Some("Jableh".to_string());
    user.country = Some("Syria".to_string());
    user.units = units;
    user
}

pub fn geocode_body(city: &str, country: &str) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "country": country,
                "city": city,
                "state": "Latakia Governorate",
                "postcode": "00000",
                "lat": 35.3614,
                "lon": 35.9256
            }
        }]
    })
}

pub fn empty_geocode_body() -> Value {
    json!({ "type": "FeatureCollection", "features": [] })
}

pub fn weather_body() -> Value {
    json!({
        "current_condition": [{
            "FeelsLikeC": "31",
            "FeelsLikeF": "88",
            "cloudcover": "0",
            "humidity": "62",
            "precipInches": "0.0",
            "precipMM": "0.0",
            "pressure": "1012",
            "pressureInches": "30",
            "temp_C": "29",
            "temp_F": "84",
            "uvIndex": "7",
            "visibility": "10",
            "visibilityMiles": "6",
            "weatherDesc": [{ "value": "Sunny" }],
            "winddir16Point": "WSW",
            "windspeedKmph": "13",
            "windspeedMiles": "8"
        }],
        "nearest_area": [{ "areaName": [{ "value": "Some Other Place" }] }]
    })
}

pub fn quote_body() -> Value {
    json!({ "text": "Simplicity is prerequisite for reliability.", "author": "Edsger W. Dijkstra" })
}
