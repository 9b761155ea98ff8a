//! Offline last-resort provider.

use crate::models::TranslationRequest;
use crate::translation::error::ProviderError;
use crate::translation::provider::{ProviderResult, TranslationProvider};
use async_trait::async_trait;

/// Marks the original text with the target language instead of translating it.
///
/// `"Hello"` to `es` becomes `"[ES] Hello"`. Deterministic and side-effect
/// free, so it always succeeds and keeps the request flow alive when every
/// remote provider is down.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFallbackProvider;

impl LocalFallbackProvider {
    pub const NAME: &'static str = "local-fallback";

    pub fn new() -> Self {
        Self
    }
}

/// Format the fallback output for a target language and text.
pub fn fallback_text(target_language: &str, text: &str) -> String {
    format!("[{}] {}", target_language.to_uppercase(), text)
}

#[async_trait]
impl TranslationProvider for LocalFallbackProvider {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<ProviderResult, ProviderError> {
        ProviderResult::new(
            fallback_text(request.target_language(), request.text()),
            Self::NAME,
        )
    }
}
