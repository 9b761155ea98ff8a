//! Request and response shapes for the translate operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Maximum number of characters accepted in a single request
pub const MAX_TEXT_CHARS: usize = 5000;

/// Raw translate payload as it arrives on the wire.
///
/// Nothing here is trusted yet; convert it into a [`TranslationRequest`]
/// to check the field constraints.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct TranslationPayload {
    #[validate(length(min = 1, message = "Text cannot be empty."))]
    pub text: String,

    #[validate(length(min = 2, max = 5, message = "Language codes must be 2 to 5 characters."))]
    pub source_language: String,

    #[validate(length(min = 2, max = 5, message = "Language codes must be 2 to 5 characters."))]
    pub target_language: String,
}

fn blank_text_error() -> ValidationError {
    ValidationError::new("blank").with_message(Cow::Borrowed("Text cannot be blank."))
}

fn text_too_long_error() -> ValidationError {
    ValidationError::new("length").with_message(Cow::Owned(format!(
        "Text must be between 1 and {MAX_TEXT_CHARS} characters."
    )))
}

/// A translation request whose fields have passed shape validation.
///
/// Language codes are only checked for length here; whether they are
/// supported is decided by the translation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    source_language: String,
    target_language: String,
}

impl TranslationRequest {
    /// Build and validate a request.
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Result<Self, ValidationErrors> {
        Self::try_from(TranslationPayload {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }
}

impl TryFrom<TranslationPayload> for TranslationRequest {
    type Error = ValidationErrors;

    fn try_from(payload: TranslationPayload) -> Result<Self, Self::Error> {
        let mut errors = payload.validate().err().unwrap_or_else(ValidationErrors::new);
        if payload.text.trim().is_empty() {
            errors.add("text", blank_text_error());
        }
        if payload.text.chars().count() > MAX_TEXT_CHARS {
            errors.add("text", text_too_long_error());
        }
        if !errors.errors().is_empty() {
            return Err(errors);
        }

        Ok(Self {
            text: payload.text,
            source_language: payload.source_language,
            target_language: payload.target_language,
        })
    }
}

/// Result of a successful translation, returned to the caller as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResponse {
    translated_text: String,
    provider: String,
    source_language: String,
    target_language: String,
    created_at: DateTime<Utc>,
}

impl TranslationResponse {
    /// Build a response for `request`, stamped with the current UTC time.
    pub fn new(
        translated_text: impl Into<String>,
        provider: impl Into<String>,
        request: &TranslationRequest,
    ) -> Self {
        Self {
            translated_text: translated_text.into(),
            provider: provider.into(),
            source_language: request.source_language.clone(),
            target_language: request.target_language.clone(),
            created_at: Utc::now(),
        }
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    /// Name of the provider that produced the translation.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
