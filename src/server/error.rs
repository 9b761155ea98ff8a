use crate::translation::TranslationError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::error::Error as _;
use validator::ValidationErrors;

/// Errors a translate call can surface to HTTP clients.
#[derive(Debug)]
pub enum ApiError {
    /// Body was not a JSON payload of the expected shape
    InvalidBody(JsonRejection),
    /// Payload failed field constraints (blank text, bad lengths)
    Validation(ValidationErrors),
    /// The service refused or could not complete the translation
    Translation(TranslationError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Translation(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Translation(e) => e.code(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err)
    }
}

impl From<TranslationError> for ApiError {
    fn from(err: TranslationError) -> Self {
        Self::Translation(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let detail = match &self {
            Self::InvalidBody(rejection) => rejection.body_text(),
            Self::Validation(e) => e.to_string(),
            Self::Translation(e) => {
                if let Some(cause) = e.source() {
                    tracing::debug!(code = code, cause = %cause, "Translation failed");
                }
                e.to_string()
            }
        };

        (status, Json(json!({ "detail": detail, "code": code }))).into_response()
    }
}
