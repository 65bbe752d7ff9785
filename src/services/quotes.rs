//! Quote provider (The Quote Hub)

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use crate::models::Quote;
use crate::utils::errors::{ProviderError, ProviderResult};
use crate::utils::logging::log_provider_error;

const QUOTE_SOURCE: &str = "The Quote Hub";

#[derive(Debug, Clone, Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    text: String,
    #[serde(default)]
    author: String,
}

/// Random inspirational quotes
#[derive(Debug, Clone)]
pub struct QuoteService {
    client: Client,
    url: String,
}

impl QuoteService {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// One quote, or `None` on any failure.
    ///
    /// The language hint is accepted but the provider only serves English,
    /// so the returned quote is always tagged `en`.
    pub async fn fetch_quote(&self, language_hint: &str) -> Option<Quote> {
        debug!(language_hint = %language_hint, "Fetching quote");
        match self.request_quote().await {
            Ok(quote) => Some(quote),
            Err(e) => {
                log_provider_error("quotes", &e.to_string(), None);
                None
            }
        }
    }

    async fn request_quote(&self) -> ProviderResult<Quote> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::RequestFailed(format!("HTTP {}", response.status())));
        }

        let body: QuoteResponse = response.json().await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        if body.text.trim().is_empty() {
            return Err(ProviderError::EmptyResult);
        }

        Ok(Quote {
            text: body.text,
            author: body.author,
            source: QUOTE_SOURCE.to_string(),
            language: "en".to_string(),
        })
    }
}
