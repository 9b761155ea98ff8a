use crate::languages::LanguageRegistry;
use crate::models::{TranslationRequest, TranslationResponse};
use crate::translation::error::{ProviderError, TranslationError};
use crate::translation::metrics::TranslationMetrics;
use crate::translation::provider::TranslationProvider;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Validates requests and walks providers in priority order.
///
/// The provider list is fixed at construction and its order is the failover
/// order: the first provider to succeed wins, and later ones are never
/// called. The service keeps no per-request state, so one instance can be
/// shared behind an `Arc` by every request handler.
pub struct TranslationService {
    providers: Vec<Arc<dyn TranslationProvider>>,
    registry: &'static LanguageRegistry,
    metrics: TranslationMetrics,
}

impl TranslationService {
    pub fn new(providers: Vec<Arc<dyn TranslationProvider>>) -> Self {
        Self {
            providers,
            registry: LanguageRegistry::get(),
            metrics: TranslationMetrics::new(),
        }
    }

    /// Provider names in failover order.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    /// Translate `request` with the first provider that succeeds.
    ///
    /// Language checks run before any provider, in this order: unsupported
    /// source, unsupported target, identical languages. When every provider
    /// fails the last provider error is kept as the source of
    /// [`TranslationError::AllProvidersFailed`].
    pub async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, TranslationError> {
        self.metrics.record_request();

        if let Err(e) = self.check_languages(request) {
            self.metrics.record_rejected();
            return Err(e);
        }

        let mut last_error: Option<ProviderError> = None;

        for provider in &self.providers {
            self.metrics.record_provider_attempt();

            match provider.translate(request).await {
                Ok(result) => {
                    info!(
                        "Translated {} -> {} with {}",
                        self.language_label(request.source_language()),
                        self.language_label(request.target_language()),
                        result.provider_name()
                    );
                    let provider_name = result.provider_name();
                    return Ok(TranslationResponse::new(
                        result.into_text(),
                        provider_name,
                        request,
                    ));
                }
                Err(e) => {
                    self.metrics.record_provider_failure();
                    warn!("Provider {} failed: {}", provider.name(), e);
                    last_error = Some(e);
                }
            }
        }

        self.metrics.record_exhausted();
        match &last_error {
            Some(e) => error!(
                "All {} translation providers failed, last error: {}",
                self.providers.len(),
                e
            ),
            None => error!("No translation providers configured"),
        }

        Err(TranslationError::AllProvidersFailed { last_error })
    }

    /// Display name for a code, or the code itself when it is unknown.
    fn language_label<'a>(&self, code: &'a str) -> &'a str {
        self.registry.name_of(code).unwrap_or(code)
    }

    fn check_languages(&self, request: &TranslationRequest) -> Result<(), TranslationError> {
        let source = request.source_language();
        let target = request.target_language();

        if !self.registry.is_supported(source) {
            return Err(TranslationError::UnsupportedSourceLanguage(source.to_string()));
        }
        if !self.registry.is_supported(target) {
            return Err(TranslationError::UnsupportedTargetLanguage(target.to_string()));
        }
        if source == target {
            return Err(TranslationError::IdenticalLanguages);
        }
        Ok(())
    }
}
