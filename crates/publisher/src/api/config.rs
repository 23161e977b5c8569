use std::env;
use std::fmt;
use std::time::Duration;

use dotenvy::dotenv;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.adrecord.com/v1/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const API_KEY_ENV: &str = "ADRECORD_API_KEY";
pub const API_URL_ENV: &str = "ADRECORD_API_URL";
pub const DECODE_JSON_ENV: &str = "ADRECORD_DECODE_JSON";
pub const TIMEOUT_SECS_ENV: &str = "ADRECORD_TIMEOUT_SECS";

/// Settings shared by every request a client sends.
///
/// Built once and handed to a client; clients never mutate it.
#[derive(Clone)]
pub struct Config {
    api_key: String,
    base_url: Url,
    decode_responses: bool,
    timeout: Option<Duration>,
}

impl Config {
    /// Configuration for the production endpoint with the given API key.
    ///
    /// An empty key is accepted; the server is the one to reject it.
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        if api_key.is_empty() {
            tracing::warn!("api key is empty, the server will reject requests");
        }

        Self {
            api_key,
            base_url: DEFAULT_API_URL.parse().expect("default api url is valid"),
            decode_responses: true,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    /// Read the configuration from the environment, loading a `.env` file first
    /// if one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv().is_err() {
            tracing::debug!("no .env file found");
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).ok_or(ConfigError::MissingEnv(API_KEY_ENV))?;
        let mut config = Config::new(api_key);

        if let Some(url) = lookup(API_URL_ENV) {
            config = config.with_base_url(url.parse()?);
        }

        if let Some(value) = lookup(DECODE_JSON_ENV) {
            let decode = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidBool(DECODE_JSON_ENV, value)),
            };
            config = config.with_decode_responses(decode);
        }

        if let Some(value) = lookup(TIMEOUT_SECS_ENV) {
            let secs: u64 = value.trim().parse()?;
            let timeout = (secs > 0).then(|| Duration::from_secs(secs));
            config = config.with_timeout(timeout);
        }

        Ok(config)
    }

    /// Point the client at another deployment of the API.
    ///
    /// A trailing `/` is added when missing so request paths are appended to
    /// the base instead of replacing its last segment.
    pub fn with_base_url(mut self, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        self.base_url = base_url;
        self
    }

    /// When false, response bodies are handed back untouched.
    pub fn with_decode_responses(mut self, decode_responses: bool) -> Self {
        self.decode_responses = decode_responses;
        self
    }

    /// Total time allowed per request. `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn decode_responses(&self) -> bool {
        self.decode_responses
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("decode_responses", &self.decode_responses)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing Env: {0}")]
    MissingEnv(&'static str),
    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),
    #[error("invalid boolean for {0}: {1:?}")]
    InvalidBool(&'static str, String),
    #[error("invalid timeout: {0}")]
    Timeout(#[from] std::num::ParseIntError),
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
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_point_at_production() {
        let config = Config::new("secret");
        assert_eq!(config.api_key(), "secret");
        assert_eq!(config.base_url().as_str(), DEFAULT_API_URL);
        assert!(config.decode_responses());
        assert_eq!(config.timeout(), Some(DEFAULT_TIMEOUT));
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let config = Config::new("k").with_base_url("http://localhost:9000/v1".parse().unwrap());
        assert_eq!(config.base_url().as_str(), "http://localhost:9000/v1/");
        assert_eq!(
            config.base_url().join("channels/3").unwrap().as_str(),
            "http://localhost:9000/v1/channels/3"
        );
    }

    #[test]
    fn debug_hides_api_key() {
        let rendered = format!("{:?}", Config::new("top-secret-key"));
        assert!(!rendered.contains("top-secret-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            (API_KEY_ENV, "abc"),
            (API_URL_ENV, "https://sandbox.example.com/v1/"),
            (DECODE_JSON_ENV, "false"),
            (TIMEOUT_SECS_ENV, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_key(), "abc");
        assert_eq!(config.base_url().as_str(), "https://sandbox.example.com/v1/");
        assert!(!config.decode_responses());
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config =
            Config::from_lookup(lookup(&[(API_KEY_ENV, "abc"), (TIMEOUT_SECS_ENV, "0")])).unwrap();
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(API_KEY_ENV)));
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[(API_KEY_ENV, "k"), (DECODE_JSON_ENV, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool(DECODE_JSON_ENV, _)));

        let err = Config::from_lookup(lookup(&[(API_KEY_ENV, "k"), (API_URL_ENV, "not a url")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Url(_)));

        let err = Config::from_lookup(lookup(&[(API_KEY_ENV, "k"), (TIMEOUT_SECS_ENV, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Timeout(_)));
    }
}
