//! Environment driven configuration.
//!
//! Values come from the process environment, after a `.env` file in the
//! working directory (if any) has been loaded. Unknown variables are ignored.

use std::time::Duration;

pub const DEFAULT_GREENHOUSE_BASE_URL: &str = "https://boards-api.greenhouse.io";
pub const DEFAULT_JOOBLE_BASE_URL: &str = "https://jooble.org";
pub const DEFAULT_GREENHOUSE_TIMEOUT: Duration = Duration::from_secs(6);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub jooble_api_key: Option<String>,
    pub jooble_base_url: String,
    pub greenhouse_base_url: String,
    pub greenhouse_timeout: Duration,
}

// Keep the API key out of logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("jooble_api_key", &self.jooble_api_key.as_ref().map(|_| "***"))
            .field("jooble_base_url", &self.jooble_base_url)
            .field("greenhouse_base_url", &self.greenhouse_base_url)
            .field("greenhouse_timeout", &self.greenhouse_timeout)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            jooble_api_key: None,
            jooble_base_url: DEFAULT_JOOBLE_BASE_URL.to_string(),
            greenhouse_base_url: DEFAULT_GREENHOUSE_BASE_URL.to_string(),
            greenhouse_timeout: DEFAULT_GREENHOUSE_TIMEOUT,
        }
    }
}

impl Settings {
    /// Loads `.env` (if present) and reads settings from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut settings = Settings::default();

        settings.jooble_api_key = get("JOOBLE_API_KEY");
        if let Some(url) = get("JOOBLE_BASE_URL") {
            settings.jooble_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = get("GREENHOUSE_BASE_URL") {
            settings.greenhouse_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(raw) = get("GREENHOUSE_TIMEOUT_SECS") {
            let secs: u64 = raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "GREENHOUSE_TIMEOUT_SECS",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "GREENHOUSE_TIMEOUT_SECS",
                    value: raw,
                    reason: "timeout must be at least one second".to_string(),
                });
            }
            settings.greenhouse_timeout = Duration::from_secs(secs);
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.greenhouse_timeout, Duration::from_secs(6));
        assert!(settings.jooble_api_key.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let settings = Settings::from_lookup(lookup(&[
            ("JOOBLE_API_KEY", "abc-123"),
            ("JOOBLE_BASE_URL", "http://localhost:9000/"),
            ("GREENHOUSE_BASE_URL", "http://localhost:9001"),
            ("GREENHOUSE_TIMEOUT_SECS", "15"),
            ("SOMETHING_ELSE", "ignored"),
        ]))
        .unwrap();

        assert_eq!(settings.jooble_api_key.as_deref(), Some("abc-123"));
        assert_eq!(settings.jooble_base_url, "http://localhost:9000");
        assert_eq!(settings.greenhouse_base_url, "http://localhost:9001");
        assert_eq!(settings.greenhouse_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let settings = Settings::from_lookup(lookup(&[("JOOBLE_API_KEY", "  ")])).unwrap();
        assert!(settings.jooble_api_key.is_none());
    }

    #[test]
    fn test_rejects_bad_timeout() {
        let err = Settings::from_lookup(lookup(&[("GREENHOUSE_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: "GREENHOUSE_TIMEOUT_SECS", .. }
        ));

        let err = Settings::from_lookup(lookup(&[("GREENHOUSE_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let settings = Settings::from_lookup(lookup(&[("JOOBLE_API_KEY", "secret-key")])).unwrap();
        let printed = format!("{:?}", settings);
        assert!(!printed.contains("secret-key"));
    }
}
