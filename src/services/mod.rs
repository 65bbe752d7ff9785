//! Services module
//!
//! Outbound clients for the external data providers. Every call is a single
//! HTTP request with the configured timeout and no retry.

pub mod geocoding;
pub mod quotes;
pub mod weather;

pub use geocoding::GeocodingService;
pub use quotes::QuoteService;
pub use weather::WeatherService;

use std::time::Duration;
use reqwest::Client;
use crate::config::ProvidersConfig;
use crate::models::{LocationInfo, Quote, UnitSystem, WeatherInfo};
use crate::utils::errors::{AssistantError, ProviderResult, Result};

/// Provider gateway client bundling the weather, quote and geocoding services
#[derive(Debug, Clone)]
pub struct ProviderClient {
    pub weather: WeatherService,
    pub quotes: QuoteService,
    pub geocoding: GeocodingService,
}

impl ProviderClient {
    /// Create all provider services sharing one HTTP client
    pub fn new(config: &ProvidersConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()
            .map_err(AssistantError::Http)?;

        Ok(Self {
            weather: WeatherService::new(client.clone(), &config.weather_url),
            quotes: QuoteService::new(client.clone(), &config.quote_url),
            geocoding: GeocodingService::new(client, &config.geocoding_url, &config.geocoding_api_key),
        })
    }

    pub async fn fetch_weather(&self, city: &str, country: &str, units: UnitSystem) -> Option<WeatherInfo> {
        self.weather.fetch_weather(city, country, units).await
    }

    pub async fn fetch_quote(&self, language_hint: &str) -> Option<Quote> {
        self.quotes.fetch_quote(language_hint).await
    }

    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> ProviderResult<LocationInfo> {
        self.geocoding.reverse_geocode(latitude, longitude).await
    }
}
