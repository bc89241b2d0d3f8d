//! Runtime configuration
//!
//! Native builds read overrides from the environment (after `.env` is
//! loaded); the web build derives the API origin from the page.

use std::sync::OnceLock;
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_DEBOUNCE_MS: u64 = 2000;
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 3000;
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin the registration endpoint is resolved against
    pub api_url: String,
    /// Quiet period after the last edit before inline errors show
    pub debounce: Duration,
    /// Time the success notification stays up before redirecting
    pub redirect_delay: Duration,
    /// Storage key for the access token
    pub token_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_url: DEFAULT_API_URL.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            token_key: ACCESS_TOKEN_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Build from `API_URL`, `REGISTER_DEBOUNCE_MS` and `REDIRECT_DELAY_MS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Use the page origin so API requests stay same-origin
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Self {
        let api_url = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        AppConfig {
            api_url,
            ..AppConfig::default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = AppConfig::default();

        let api_url = lookup("API_URL").unwrap_or(defaults.api_url);

        let debounce = match lookup("REGISTER_DEBOUNCE_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .with_context(|| format!("REGISTER_DEBOUNCE_MS must be milliseconds, got {raw:?}"))?,
            ),
            None => defaults.debounce,
        };

        let redirect_delay = match lookup("REDIRECT_DELAY_MS") {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .with_context(|| format!("REDIRECT_DELAY_MS must be milliseconds, got {raw:?}"))?,
            ),
            None => defaults.redirect_delay,
        };

        Ok(AppConfig {
            api_url,
            debounce,
            redirect_delay,
            token_key: defaults.token_key,
        })
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn init_config(config: AppConfig) {
    let _ = APP_CONFIG.set(config);
}

/// Active configuration, falling back to defaults when `init_config` was never called
pub fn config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(AppConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.debounce, Duration::from_millis(2000));
        assert_eq!(config.redirect_delay, Duration::from_millis(3000));
        assert_eq!(config.token_key, "accessToken");
    }

    #[test]
    fn test_environment_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("API_URL", "https://admin.example.com"),
            ("REGISTER_DEBOUNCE_MS", "500"),
            ("REDIRECT_DELAY_MS", " 1000 "),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "https://admin.example.com");
        assert_eq!(config.debounce, Duration::from_millis(500));
        assert_eq!(config.redirect_delay, Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_delay_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("REGISTER_DEBOUNCE_MS", "soon")]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("REGISTER_DEBOUNCE_MS"));
    }
}
