//! Translation provider trait.
//!
//! A provider turns a validated [`TranslationRequest`] into translated text or
//! fails with a [`ProviderError`]. The service holds an ordered list of
//! providers and tries them one after another, so implementations should
//! fail fast instead of retrying internally.

use crate::models::TranslationRequest;
use crate::translation::error::ProviderError;
use async_trait::async_trait;

/// Text produced by a provider, tagged with the provider's name.
///
/// The text is never blank; [`ProviderResult::new`] refuses blank output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResult {
    text: String,
    provider_name: &'static str,
}

impl ProviderResult {
    pub fn new(text: impl Into<String>, provider_name: &'static str) -> Result<Self, ProviderError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyTranslation {
                provider: provider_name,
            });
        }
        Ok(Self {
            text,
            provider_name,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Identifier reported in responses and logs (e.g. "libretranslate").
    fn name(&self) -> &'static str;

    /// Translate `request.text()` from its source to its target language.
    async fn translate(&self, request: &TranslationRequest) -> Result<ProviderResult, ProviderError>;
}
