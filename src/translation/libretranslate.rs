//! LibreTranslate HTTP API provider.

use crate::config::Config;
use crate::models::TranslationRequest;
use crate::translation::error::ProviderError;
use crate::translation::provider::{ProviderResult, TranslationProvider};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// LibreTranslate `/translate` request body
#[derive(Debug, Serialize)]
struct LibreTranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText", default)]
    translated_text: String,
}

/// Calls a LibreTranslate-compatible endpoint.
///
/// One POST per call, bounded by the client timeout. Any failure is returned
/// as a [`ProviderError`] so the service can fall through to the next provider.
#[derive(Debug, Clone)]
pub struct LibreTranslateProvider {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl LibreTranslateProvider {
    pub const NAME: &'static str = "libretranslate";

    /// Build a provider with its own HTTP client using the configured timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client for LibreTranslate")?;

        Ok(Self::with_client(client, config))
    }

    /// Build a provider around an existing client.
    ///
    /// The client's own timeout applies; `config.request_timeout_seconds` is not
    /// consulted here.
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            url: config.libretranslate_url.clone(),
            api_key: config.libretranslate_api_key.clone(),
        }
    }
}

#[async_trait]
impl TranslationProvider for LibreTranslateProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<ProviderResult, ProviderError> {
        let body = LibreTranslateRequest {
            q: request.text(),
            source: request.source_language(),
            target: request.target_language(),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|source| ProviderError::Request {
                provider: Self::NAME,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            debug!("LibreTranslate error body ({}): {}", status, body);
            return Err(ProviderError::UpstreamStatus {
                provider: Self::NAME,
                status,
            });
        }

        let parsed: LibreTranslateResponse =
            response
                .json()
                .await
                .map_err(|source| ProviderError::InvalidBody {
                    provider: Self::NAME,
                    source,
                })?;

        ProviderResult::new(parsed.translated_text.trim(), Self::NAME)
    }
}
