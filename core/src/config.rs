//! Client configuration.
//!
//! The base URL is required: deployments point the client at different hosts,
//! so nothing here defaults it. Timeout and user agent have defaults.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

pub const BASE_URL_ENV: &str = "PROFILE_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "PROFILE_API_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("profile-core/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unsupported URL scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    #[error("invalid timeout {0:?}, expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("failed to build HTTP client: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Settings for one long-lived `UserProfileClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Validate `base_url` and apply default timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns an error when `base_url` does not parse, is not http(s), or
    /// carries a query string or fragment.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
        // Endpoint paths are appended to the base URL as text.
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "query strings and fragments are not allowed".to_string(),
            });
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        })
    }

    /// Read `PROFILE_API_BASE_URL` and the optional `PROFILE_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL is missing or invalid, or the
    /// timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV).ok_or(ConfigError::MissingVar(BASE_URL_ENV))?;
        let mut config = Self::new(&base_url)?;
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config.timeout = parse_timeout(&raw)?;
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL with any trailing `/` removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://192.168.68.105:8000/api/").unwrap();
        assert_eq!(config.base_url(), "http://192.168.68.105:8000/api");
    }

    #[test]
    fn defaults_apply() {
        let config = ClientConfig::new("https://example.com").unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent().starts_with("profile-core/"));
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = ClientConfig::new("not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ClientConfig::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(s) if s == "ftp"));
    }

    #[test]
    fn rejects_query_and_fragment() {
        for url in [
            "http://127.0.0.1:8000/api?k=v",
            "http://127.0.0.1:8000/api/?",
            "http://127.0.0.1:8000/api#top",
            "https://example.com/?k=v#top",
        ] {
            let err = ClientConfig::new(url).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }), "{url}");
        }
    }

    #[test]
    fn env_requires_base_url() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(BASE_URL_ENV)));
    }

    #[test]
    fn env_reads_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "http://localhost:8000/api/"),
            (TIMEOUT_ENV, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000/api");
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn env_rejects_zero_and_garbage_timeouts() {
        for raw in ["0", "-3", "soon"] {
            let err = ClientConfig::from_lookup(lookup(&[
                (BASE_URL_ENV, "http://localhost:8000"),
                (TIMEOUT_ENV, raw),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout(_)), "{raw}");
        }
    }
}
