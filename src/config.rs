use anyhow::{bail, Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Application
    pub app_name: String,
    pub app_env: String,

    // Form defaults
    pub default_source_language: String,
    pub default_target_language: String,

    // LibreTranslate
    pub libretranslate_url: String,
    pub libretranslate_api_key: Option<String>,
    pub request_timeout_seconds: f64,

    // Server
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let request_timeout_seconds = match std::env::var("REQUEST_TIMEOUT_SECONDS") {
            Ok(raw) => raw
                .trim()
                .parse::<f64>()
                .with_context(|| format!("REQUEST_TIMEOUT_SECONDS is not a number: {}", raw))?,
            Err(_) => 10.0,
        };
        if !request_timeout_seconds.is_finite() || request_timeout_seconds <= 0.0 {
            bail!(
                "REQUEST_TIMEOUT_SECONDS must be a positive number of seconds, got {}",
                request_timeout_seconds
            );
        }

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {}", raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            // Application
            app_name: std::env::var("APP_NAME")
                .unwrap_or_else(|_| "AI Translation Studio".to_string()),
            app_env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),

            // Form defaults
            default_source_language: std::env::var("DEFAULT_SOURCE_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            default_target_language: std::env::var("DEFAULT_TARGET_LANGUAGE")
                .unwrap_or_else(|_| "es".to_string()),

            // LibreTranslate
            libretranslate_url: std::env::var("LIBRETRANSLATE_URL")
                .unwrap_or_else(|_| "https://libretranslate.com/translate".to_string()),
            libretranslate_api_key: std::env::var("LIBRETRANSLATE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            request_timeout_seconds,

            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        })
    }

    /// Upper bound for a single outbound translation call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.request_timeout_seconds)
    }

    /// Socket address string the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 10] = [
        "APP_NAME",
        "APP_ENV",
        "DEFAULT_SOURCE_LANGUAGE",
        "DEFAULT_TARGET_LANGUAGE",
        "LIBRETRANSLATE_URL",
        "LIBRETRANSLATE_API_KEY",
        "REQUEST_TIMEOUT_SECONDS",
        "HOST",
        "PORT",
        "STATIC_DIR",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("Defaults should load");

        assert_eq!(config.app_name, "AI Translation Studio");
        assert_eq!(config.app_env, "development");
        assert_eq!(config.default_source_language, "en");
        assert_eq!(config.default_target_language, "es");
        assert_eq!(config.libretranslate_url, "https://libretranslate.com/translate");
        assert!(config.libretranslate_api_key.is_none());
        assert_eq!(config.request_timeout_seconds, 10.0);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("APP_ENV", "production");
        std::env::set_var("LIBRETRANSLATE_URL", "http://localhost:5000/translate");
        std::env::set_var("LIBRETRANSLATE_API_KEY", "secret");
        std::env::set_var("REQUEST_TIMEOUT_SECONDS", "2.5");
        std::env::set_var("PORT", "3000");

        let config = Config::from_env().expect("Overrides should load");
        clear_env();

        assert_eq!(config.app_env, "production");
        assert_eq!(config.libretranslate_url, "http://localhost:5000/translate");
        assert_eq!(config.libretranslate_api_key.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout(), Duration::from_millis(2500));
        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_ignored() {
        clear_env();
        std::env::set_var("LIBRETRANSLATE_API_KEY", "   ");
        let config = Config::from_env().expect("Should load");
        clear_env();

        assert!(config.libretranslate_api_key.is_none());
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_is_rejected() {
        clear_env();
        std::env::set_var("REQUEST_TIMEOUT_SECONDS", "soon");
        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err().to_string();
        assert!(err.contains("REQUEST_TIMEOUT_SECONDS"), "{}", err);
    }

    #[test]
    #[serial]
    fn test_non_positive_timeout_is_rejected() {
        clear_env();
        std::env::set_var("REQUEST_TIMEOUT_SECONDS", "0");
        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_rejected() {
        clear_env();
        std::env::set_var("PORT", "99999");
        let result = Config::from_env();
        clear_env();

        assert!(result.unwrap_err().to_string().contains("PORT"));
    }
}
