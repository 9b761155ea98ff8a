//! Supported translation languages.
//!
//! The registry is the single source of truth for which language codes the
//! gateway accepts. It is built once on first access and never changes.
//!
//! # Example
//!
//! ```rust,ignore
//! use translation_gateway::languages::LanguageRegistry;
//!
//! let registry = LanguageRegistry::get();
//! assert!(registry.is_supported("fr"));
//! let options = registry.list_options(); // sorted by display name
//! ```

mod registry;

pub use registry::{LanguageConfig, LanguageOption, LanguageRegistry};
