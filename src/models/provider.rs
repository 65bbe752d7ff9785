//! Value records returned by the external data providers

use serde::{Deserialize, Serialize};
use super::user::UnitSystem;

/// Current weather conditions, already expressed in the requested unit system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    pub temp: String,
    pub feels_like: String,
    pub weather_description: String,
    pub uv_index: String,
    pub wind: String,
    pub precipitation: String,
    pub humidity: String,
    pub pressure: String,
    pub clouds: String,
    pub visibility: String,
    pub city: String,
    pub country: String,
    pub units: UnitSystem,
}

/// Inspirational quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    pub source: String,
    pub language: String,
}

/// Reverse-geocoded location
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationInfo {
    pub country: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
