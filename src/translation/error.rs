//! Error types for providers and the translation service.

use reqwest::StatusCode;
use thiserror::Error;

/// A single provider could not produce a translation.
///
/// Recoverable: the service logs it and moves on to the next provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} request failed: {source}")]
    Request {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned HTTP {status}")]
    UpstreamStatus {
        provider: &'static str,
        status: StatusCode,
    },

    #[error("{provider} returned an unreadable response: {source}")]
    InvalidBody {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned an empty translation")]
    EmptyTranslation { provider: &'static str },
}

impl ProviderError {
    /// Name of the provider that failed.
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Request { provider, .. }
            | Self::UpstreamStatus { provider, .. }
            | Self::InvalidBody { provider, .. }
            | Self::EmptyTranslation { provider } => provider,
        }
    }
}

/// Terminal failure of a translate call.
///
/// The display text is safe to show to end users; diagnostic detail lives in
/// the `source()` chain of [`TranslationError::AllProvidersFailed`].
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Unsupported source language.")]
    UnsupportedSourceLanguage(String),

    #[error("Unsupported target language.")]
    UnsupportedTargetLanguage(String),

    #[error("Source and target languages must be different.")]
    IdenticalLanguages,

    #[error("All translation providers failed.")]
    AllProvidersFailed {
        #[source]
        last_error: Option<ProviderError>,
    },
}

impl TranslationError {
    /// Stable machine-readable code for API responses and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedSourceLanguage(_) => "UNSUPPORTED_SOURCE_LANGUAGE",
            Self::UnsupportedTargetLanguage(_) => "UNSUPPORTED_TARGET_LANGUAGE",
            Self::IdenticalLanguages => "IDENTICAL_LANGUAGES",
            Self::AllProvidersFailed { .. } => "ALL_PROVIDERS_FAILED",
        }
    }
}
