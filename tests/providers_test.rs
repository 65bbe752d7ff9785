//! Provider gateway client tests against a wiremock server

mod helpers;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use assistant_bot::models::UnitSystem;
use assistant_bot::services::ProviderClient;
use assistant_bot::utils::errors::ProviderError;
use helpers::*;

async fn client(server: &MockServer) -> ProviderClient {
    ProviderClient::new(&providers_config(&server.uri())).unwrap()
}

#[tokio::test]
async fn test_weather_city_and_country_come_from_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/Syria-Jableh"))
        .and(query_param("format", "j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body()))
        .mount(&server)
        .await;

    let weather = client(&server)
        .await
        .fetch_weather("Jableh", "Syria", UnitSystem::Metric)
        .await
        .expect("weather present");

    assert_eq!(weather.city, "Jableh");
    assert_eq!(weather.country, "Syria");
    assert_eq!(weather.temp, "29");
    assert_eq!(weather.wind, "13 km/h WSW");
}

#[tokio::test]
async fn test_weather_city_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/United%20Kingdom-St%20Albans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(weather_body()))
        .mount(&server)
        .await;

    let weather = client(&server)
        .await
        .fetch_weather("St Albans", "United Kingdom", UnitSystem::Metric)
        .await;

    assert_eq!(weather.map(|w| w.city), Some("St Albans".to_string()));
}

#[tokio::test]
async fn test_weather_absent_on_empty_conditions_or_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather/Nowhere-Empty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "current_condition": [] })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/weather/Nowhere-Broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let providers = client(&server).await;
    assert!(providers.fetch_weather("Empty", "Nowhere", UnitSystem::Metric).await.is_none());
    assert!(providers.fetch_weather("Broken", "Nowhere", UnitSystem::Metric).await.is_none());
    assert!(providers.fetch_weather("Missing", "Nowhere", UnitSystem::Metric).await.is_none());
}

#[tokio::test]
async fn test_quote_is_tagged_english() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(quote_body()))
        .mount(&server)
        .await;

    let quote = client(&server).await.fetch_quote("de").await.expect("quote present");

    assert_eq!(quote.author, "Edsger W. Dijkstra");
    assert_eq!(quote.source, "The Quote Hub");
    assert_eq!(quote.language, "en");
}

#[tokio::test]
async fn test_reverse_geocode_first_feature() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/reverse"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("lat", "35.36"))
        .and(query_param("lon", "35.92"))
        .respond_with(ResponseTemplate::new(200).set_body_json(geocode_body("Jableh", "Syria")))
        .mount(&server)
        .await;

    let location = client(&server).await.reverse_geocode(35.36, 35.92).await.unwrap();

    assert_eq!(location.city, "Jableh");
    assert_eq!(location.country, "Syria");
    assert_eq!(location.zip, "00000");
}

#[tokio::test]
async fn test_reverse_geocode_zero_features_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/reverse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_geocode_body()))
        .mount(&server)
        .await;

    let result = client(&server).await.reverse_geocode(0.0, 0.0).await;

    assert_matches!(result, Err(ProviderError::EmptyResult));
}

#[tokio::test]
async fn test_reverse_geocode_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/geocode/reverse"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid apiKey" })))
        .mount(&server)
        .await;

    let result = client(&server).await.reverse_geocode(1.0, 2.0).await;

    assert_matches!(result, Err(ProviderError::RequestFailed(_)));
}
