use crate::languages::{LanguageOption, LanguageRegistry};
use crate::models::{TranslationPayload, TranslationRequest, TranslationResponse};
use crate::server::error::ApiError;
use crate::server::pages;
use crate::server::AppState;
use crate::translation::MetricsReport;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use serde_json::{json, Value};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let config = &state.config;
    Html(pages::render_index(
        &config.app_name,
        &LanguageRegistry::get().list_options(),
        &config.default_source_language,
        &config.default_target_language,
    ))
}

pub async fn health_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_health(
        &state.config.app_name,
        "ok",
        &state.config.app_env,
    ))
}

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "environment": state.config.app_env,
    }))
}

pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslationPayload>, JsonRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let Json(payload) = payload?;
    let request = TranslationRequest::try_from(payload)?;
    let response = state.service.translate(&request).await?;
    Ok(Json(response))
}

pub async fn languages() -> Json<Vec<LanguageOption>> {
    Json(LanguageRegistry::get().list_options())
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.service.metrics().report())
}
