//! Language registry: Single source of truth for all supported languages.
//!
//! Uses a `OnceLock` singleton so the table is initialized once and shared
//! read-only between every request handler.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// A supported language entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "es", "fr")
    pub code: &'static str,

    /// English display name of the language (e.g., "English", "Spanish")
    pub name: &'static str,
}

/// A `{code, name}` pair shaped for populating a language picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

impl From<&LanguageConfig> for LanguageOption {
    fn from(config: &LanguageConfig) -> Self {
        Self {
            code: config.code,
            name: config.name,
        }
    }
}

/// Global language registry singleton.
///
/// Immutable after initialization.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// Codes are matched exactly; "EN" is not the same as "en".
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Display name for a code, if supported.
    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.get_by_code(code).map(|lang| lang.name)
    }

    /// Mapping of every supported code to its display name.
    pub fn supported_languages(&self) -> BTreeMap<&'static str, &'static str> {
        self.languages
            .iter()
            .map(|lang| (lang.code, lang.name))
            .collect()
    }

    /// All languages as picker options, sorted by display name.
    pub fn list_options(&self) -> Vec<LanguageOption> {
        let mut options: Vec<LanguageOption> =
            self.languages.iter().map(LanguageOption::from).collect();
        options.sort_by(|a, b| a.name.cmp(b.name));
        options
    }
}

/// Default language configurations.
fn default_languages() -> Vec<LanguageConfig> {
    [
        ("en", "English"),
        ("es", "Spanish"),
        ("fr", "French"),
        ("de", "German"),
        ("it", "Italian"),
        ("pt", "Portuguese"),
        ("hi", "Hindi"),
        ("ja", "Japanese"),
        ("zh", "Chinese"),
        ("ar", "Arabic"),
    ]
    .into_iter()
    .map(|(code, name)| LanguageConfig { code, name })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_registry_has_ten_languages() {
        let languages = LanguageRegistry::get().supported_languages();
        assert_eq!(languages.len(), 10);
        for code in ["en", "es", "fr", "de", "it", "pt", "hi", "ja", "zh", "ar"] {
            assert!(languages.contains_key(code), "missing {}", code);
        }
    }

    #[test]
    fn test_get_by_code_spanish() {
        let config = LanguageRegistry::get()
            .get_by_code("es")
            .expect("Spanish should be registered");
        assert_eq!(config.code, "es");
        assert_eq!(config.name, "Spanish");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("xx").is_none());
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("zh"));
        assert!(!registry.is_supported("ru"));
        assert!(!registry.is_supported(""));
    }

    #[test]
    fn test_is_supported_is_case_sensitive() {
        assert!(!LanguageRegistry::get().is_supported("EN"));
    }

    #[test]
    fn test_name_of() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.name_of("ja"), Some("Japanese"));
        assert_eq!(registry.name_of("ko"), None);
    }

    #[test]
    fn test_list_options_sorted_by_name() {
        let options = LanguageRegistry::get().list_options();
        let names: Vec<&str> = options.iter().map(|o| o.name).collect();

        assert_eq!(
            names,
            vec![
                "Arabic",
                "Chinese",
                "English",
                "French",
                "German",
                "Hindi",
                "Italian",
                "Japanese",
                "Portuguese",
                "Spanish",
            ]
        );
        assert_eq!(options[0].code, "ar");
    }

    #[test]
    fn test_language_option_serializes_code_and_name() {
        let option = LanguageOption {
            code: "de",
            name: "German",
        };
        let json = serde_json::to_value(&option).expect("Should serialize");
        assert_eq!(json, serde_json::json!({"code": "de", "name": "German"}));
    }
}
