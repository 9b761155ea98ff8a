//! Translation providers and the failover service that drives them.
//!
//! # Architecture
//!
//! - `provider`: the `TranslationProvider` trait and `ProviderResult`
//! - `libretranslate`: remote provider backed by a LibreTranslate endpoint
//! - `local`: deterministic offline fallback
//! - `service`: validation plus ordered failover across providers
//! - `metrics`: per-service counters
//!
//! # Example
//!
//! ```rust,ignore
//! let service = TranslationService::new(vec![
//!     Arc::new(LibreTranslateProvider::new(&config)?),
//!     Arc::new(LocalFallbackProvider::new()),
//! ]);
//! let response = service.translate(&request).await?;
//! ```

mod error;
mod libretranslate;
mod local;
mod metrics;
mod provider;
mod service;

pub use error::{ProviderError, TranslationError};
pub use libretranslate::LibreTranslateProvider;
pub use local::{fallback_text, LocalFallbackProvider};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use provider::{ProviderResult, TranslationProvider};
pub use service::TranslationService;
