//! Handler context backed by mocks and a wiremock provider server

use std::sync::Arc;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use assistant_bot::config::ProvidersConfig;
use assistant_bot::handlers::{self, BotContext, InboundEvent};
use assistant_bot::services::ProviderClient;
use assistant_bot::state::{ConversationStore, DialogueState, InMemoryStateStore};

use super::mocks::{MockMessenger, MockUserStore};

pub struct TestContext {
    pub bot: BotContext,
    pub messenger: Arc<MockMessenger>,
    pub users: Arc<MockUserStore>,
    pub states: Arc<InMemoryStateStore>,
    pub server: MockServer,
}

pub fn providers_config(base_url: &str) -> ProvidersConfig {
    ProvidersConfig {
        weather_url: format!("{}/weather", base_url),
        quote_url: format!("{}/quote", base_url),
        geocoding_url: format!("{}/v1/geocode", base_url),
        geocoding_api_key: "test-key".to_string(),
        timeout_seconds: 5,
    }
}

impl TestContext {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let providers = ProviderClient::new(&providers_config(&server.uri()))
            .expect("Failed to build provider client");

        let messenger = Arc::new(MockMessenger::new());
        let users = Arc::new(MockUserStore::new());
        let states = Arc::new(InMemoryStateStore::new());

        let bot = BotContext::new(messenger.clone(), users.clone(), states.clone(), providers);

        Self { bot, messenger, users, states, server }
    }

    /// Handle an event, failing the test on a gateway error
    pub async fn send(&self, event: InboundEvent) {
        handlers::handle_event(&self.bot, event)
            .await
            .expect("Event handling failed");
    }

    pub async fn state(&self, user_id: i64) -> Option<DialogueState> {
        self.states.get(user_id).await
    }

    pub async fn mock_geocode(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/v1/geocode/reverse"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_weather(&self, city_path: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/weather/{}", city_path)))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_quote(&self, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/quote"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}
