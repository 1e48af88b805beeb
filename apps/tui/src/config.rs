use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const API_URL_VAR: &str = "STAMP_API_URL";
pub const DETAILED_ERRORS_VAR: &str = "STAMP_DETAILED_ERRORS";
pub const TIMEOUT_VAR: &str = "STAMP_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STAMP_API_URL is not set; pass --api-url or add it to .env")]
    MissingApiUrl,
    #[error("STAMP_API_URL is not a usable base URL: {0}")]
    InvalidApiUrl(String),
    #[error("STAMP_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_url: Url,
    /// Show the HTTP status instead of the fixed "User not found" message.
    pub detailed_errors: bool,
    pub timeout: Option<Duration>,
}

/// Loads the configuration from the environment, reading `.env` first.
pub fn init_app_config() -> Result<AppConfig, ConfigError> {
    dotenv().ok();
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = lookup(API_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;
        let api_url = parse_api_url(&raw_url)?;

        let detailed_errors = lookup(DETAILED_ERRORS_VAR).is_some_and(|value| is_truthy(&value));

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(value) if !value.trim().is_empty() => Some(parse_timeout(&value)?),
            _ => None,
        };

        Ok(Self {
            api_url,
            detailed_errors,
            timeout,
        })
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidApiUrl(e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl(format!(
            "expected an http(s) URL, got {raw}"
        )));
    }
    Ok(url)
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_api_url_fails() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[])),
            Err(ConfigError::MissingApiUrl)
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[(API_URL_VAR, "  ")])),
            Err(ConfigError::MissingApiUrl)
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(API_URL_VAR, "not a url")])),
            Err(ConfigError::InvalidApiUrl(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[(API_URL_VAR, "mailto:cards@example.com")])),
            Err(ConfigError::InvalidApiUrl(_))
        ));
    }

    #[test]
    fn reads_all_options() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup(&[
            (API_URL_VAR, "https://api.example.com/v1"),
            (DETAILED_ERRORS_VAR, "true"),
            (TIMEOUT_VAR, "5"),
        ]))?;
        assert_eq!(config.api_url.as_str(), "https://api.example.com/v1");
        assert!(config.detailed_errors);
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        Ok(())
    }

    #[test]
    fn defaults_keep_fixed_messages_and_no_timeout() -> Result<(), ConfigError> {
        let config = AppConfig::from_lookup(lookup(&[(API_URL_VAR, "http://localhost:3000")]))?;
        assert!(!config.detailed_errors);
        assert_eq!(config.timeout, None);
        Ok(())
    }

    #[test]
    fn rejects_zero_timeout() {
        assert_eq!(
            AppConfig::from_lookup(lookup(&[
                (API_URL_VAR, "http://localhost:3000"),
                (TIMEOUT_VAR, "0"),
            ])),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
    }
}
