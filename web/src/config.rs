use std::time::Duration;
use thiserror::Error;

pub const INTAKE_WEBHOOK_VAR: &str = "PINE_INK_INTAKE_WEBHOOK";
pub const INTAKE_TIMEOUT_VAR: &str = "PINE_INK_INTAKE_TIMEOUT_SECS";
const DEFAULT_INTAKE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Server settings read from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub intake_webhook: Option<String>,
    pub intake_timeout: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            intake_webhook: None,
            intake_timeout: Duration::from_secs(DEFAULT_INTAKE_TIMEOUT_SECS),
        }
    }
}

impl SiteConfig {
    /// Loads `.env` (from the workspace root when run via `cargo leptos watch`
    /// inside `web/`, otherwise the current directory) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::from_filename("../.env")
            .or_else(|_| dotenvy::dotenv())
            .ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let intake_webhook = match lookup(INTAKE_WEBHOOK_VAR).map(|v| v.trim().to_string()) {
            None => None,
            Some(v) if v.is_empty() => None,
            Some(v) if is_webhook_url(&v) => Some(v),
            Some(v) => {
                return Err(ConfigError::InvalidUrl {
                    var: INTAKE_WEBHOOK_VAR,
                    value: v,
                })
            }
        };

        let intake_timeout = match lookup(INTAKE_TIMEOUT_VAR) {
            None => Duration::from_secs(DEFAULT_INTAKE_TIMEOUT_SECS),
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout {
                    var: INTAKE_TIMEOUT_VAR,
                    value: v,
                })?,
        };

        Ok(Self {
            intake_webhook,
            intake_timeout,
        })
    }
}

fn is_webhook_url(value: &str) -> bool {
    reqwest::Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        assert_eq!(SiteConfig::from_lookup(lookup(&[])), Ok(SiteConfig::default()));
    }

    #[test]
    fn reads_webhook_and_timeout() {
        let config = SiteConfig::from_lookup(lookup(&[
            (INTAKE_WEBHOOK_VAR, "https://hooks.example.com/intake"),
            (INTAKE_TIMEOUT_VAR, "3"),
        ]))
        .unwrap();
        assert_eq!(
            config.intake_webhook.as_deref(),
            Some("https://hooks.example.com/intake")
        );
        assert_eq!(config.intake_timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_webhook_means_log_only() {
        let config = SiteConfig::from_lookup(lookup(&[(INTAKE_WEBHOOK_VAR, "  ")])).unwrap();
        assert_eq!(config.intake_webhook, None);
    }

    #[test]
    fn rejects_bad_values() {
        for value in [
            "ftp://x",
            "https://",
            "http://not a url",
            "mailto:studio@pineink.ca",
            "hooks.example.com/intake",
            "httpx://hooks.example.com",
        ] {
            assert_matches!(
                SiteConfig::from_lookup(lookup(&[(INTAKE_WEBHOOK_VAR, value)])),
                Err(ConfigError::InvalidUrl { value: v, .. }) if v == value,
                "{value} should be rejected"
            );
        }
        assert_matches!(
            SiteConfig::from_lookup(lookup(&[(INTAKE_TIMEOUT_VAR, "ten")])),
            Err(ConfigError::InvalidTimeout { .. })
        );
    }

    #[test]
    fn accepts_webhook_with_port_and_query() {
        let config = SiteConfig::from_lookup(lookup(&[(
            INTAKE_WEBHOOK_VAR,
            "http://127.0.0.1:8080/intake?token=abc",
        )]))
        .unwrap();
        assert_eq!(
            config.intake_webhook.as_deref(),
            Some("http://127.0.0.1:8080/intake?token=abc")
        );
    }
}
