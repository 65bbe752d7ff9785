//! Reverse geocoding provider (Geoapify)

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use crate::models::LocationInfo;
use crate::utils::errors::{ProviderError, ProviderResult};

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeatureProperties {
    pub country: String,
    pub city: String,
    pub state: String,
    #[serde(alias = "postcode")]
    pub zip: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl GeocodingResponse {
    /// Location of the first feature; an empty feature list is an error
    pub fn into_location(self) -> ProviderResult<LocationInfo> {
        let feature = self.features.into_iter().next().ok_or(ProviderError::EmptyResult)?;
        let props = feature.properties;
        Ok(LocationInfo {
            country: props.country,
            city: props.city,
            state: props.state,
            zip: props.zip,
            lat: props.lat,
            lon: props.lon,
        })
    }
}

/// Coordinates to city/country lookups
#[derive(Debug, Clone)]
pub struct GeocodingService {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeocodingService {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve coordinates into a location
    pub async fn reverse_geocode(&self, latitude: f64, longitude: f64) -> ProviderResult<LocationInfo> {
        let url = format!("{}/reverse", self.base_url.trim_end_matches('/'));
        debug!(latitude = latitude, longitude = longitude, "Making reverse geocoding request");

        let response = self.client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.clone()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ProviderError::RequestFailed(format!("HTTP {}", response.status())));
        }

        let body: GeocodingResponse = response.json().await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        body.into_location()
    }
}
