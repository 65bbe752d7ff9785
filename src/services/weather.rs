//! Weather provider (wttr.in JSON API)
//!
//! Fetches the current condition for a city and maps the provider's parallel
//! metric/imperial fields onto a [`WeatherInfo`] in the requested unit system.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};
use crate::models::{UnitSystem, WeatherInfo};
use crate::utils::errors::{ProviderError, ProviderResult};
use crate::utils::logging::log_provider_error;

/// wttr.in `format=j1` response, reduced to what the bot reports
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub current_condition: Vec<CurrentCondition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CurrentCondition {
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    #[serde(rename = "FeelsLikeF")]
    pub feels_like_f: String,
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "temp_F")]
    pub temp_f: String,
    #[serde(rename = "uvIndex")]
    pub uv_index: String,
    #[serde(rename = "winddir16Point")]
    pub wind_dir_16_point: String,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: String,
    #[serde(rename = "windspeedMiles")]
    pub windspeed_miles: String,
    #[serde(rename = "precipInches")]
    pub precip_inches: String,
    #[serde(rename = "precipMM")]
    pub precip_mm: String,
    pub humidity: String,
    pub pressure: String,
    #[serde(rename = "pressureInches")]
    pub pressure_inches: String,
    #[serde(rename = "cloudcover")]
    pub cloud_cover: String,
    pub visibility: String,
    #[serde(rename = "visibilityMiles")]
    pub visibility_miles: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WeatherDescription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeatherDescription {
    pub value: String,
}

impl CurrentCondition {
    /// Select the fields for a unit system. City and country come from the
    /// caller, not from the provider body.
    pub fn to_weather_info(&self, city: &str, country: &str, units: UnitSystem) -> WeatherInfo {
        let description = self
            .weather_desc
            .first()
            .map(|d| d.value.trim().to_string())
            .unwrap_or_default();

        let (temp, feels_like, wind, precipitation, pressure, visibility) = match units {
            UnitSystem::Metric => (
                &self.temp_c,
                &self.feels_like_c,
                format!("{} km/h {}", self.windspeed_kmph, self.wind_dir_16_point),
                &self.precip_mm,
                &self.pressure,
                &self.visibility,
            ),
            UnitSystem::Imperial => (
                &self.temp_f,
                &self.feels_like_f,
                format!("{} mph {}", self.windspeed_miles, self.wind_dir_16_point),
                &self.precip_inches,
                &self.pressure_inches,
                &self.visibility_miles,
            ),
        };

        WeatherInfo {
            temp: temp.clone(),
            feels_like: feels_like.clone(),
            weather_description: description,
            uv_index: self.uv_index.clone(),
            wind,
            precipitation: precipitation.clone(),
            humidity: self.humidity.clone(),
            pressure: pressure.clone(),
            clouds: self.cloud_cover.clone(),
            visibility: visibility.clone(),
            city: city.to_string(),
            country: country.to_string(),
            units,
        }
    }
}

/// Weather lookups by city and country
#[derive(Debug, Clone)]
pub struct WeatherService {
    client: Client,
    base_url: String,
}

impl WeatherService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Current weather for a city; `None` when the provider has no data or
    /// the call fails for any reason.
    pub async fn fetch_weather(&self, city: &str, country: &str, units: UnitSystem) -> Option<WeatherInfo> {
        match self.request_weather(city, country, units).await {
            Ok(info) => Some(info),
            Err(ProviderError::EmptyResult) => {
                debug!(city = %city, country = %country, "No weather data found for city");
                None
            }
            Err(e) => {
                log_provider_error("weather", &e.to_string(), Some(city));
                None
            }
        }
    }

    async fn request_weather(&self, city: &str, country: &str, units: UnitSystem) -> ProviderResult<WeatherInfo> {
        let url = format!(
            "{}/{}-{}?format=j1",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(country),
            urlencoding::encode(city),
        );

        debug!(url = %url, "Making weather API request");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(status = %status, city = %city, "Weather provider returned an error status");
            return Err(ProviderError::RequestFailed(format!("HTTP {}", status)));
        }

        let body: WeatherResponse = response.json().await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        body.current_condition
            .first()
            .map(|condition| condition.to_weather_info(city, country, units))
            .ok_or(ProviderError::EmptyResult)
    }
}
