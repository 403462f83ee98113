use crate::client::ResourcePath;
use crate::errors::{AssistantsError, AssistantsResult, ConfigurationError};
use http::{HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Default base URL of the provider.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default API version segment placed between the base URL and resource paths.
pub const DEFAULT_API_VERSION: &str = "v1";

/// Client configuration.
///
/// Built once before the first call and shared read-only afterwards; the
/// bearer token lives only here.
#[derive(Clone)]
pub struct AssistantsConfig {
    pub(crate) api_key: SecretString,
    pub base_url: String,
    pub api_version: String,
    /// `None` leaves the transport's default in place.
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub custom_headers: Vec<(String, String)>,
}

impl AssistantsConfig {
    /// Creates a new AssistantsConfig with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
            user_agent: default_user_agent(),
            custom_headers: Vec::new(),
        }
    }

    /// Creates a new AssistantsConfig from environment variables
    ///
    /// Reads the following environment variables:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_BASE_URL (optional, defaults to https://api.openai.com)
    /// - OPENAI_API_VERSION (optional, defaults to v1)
    /// - OPENAI_TIMEOUT_SECS (optional)
    pub fn from_env() -> AssistantsResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> AssistantsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY").ok_or_else(|| {
            ConfigurationError::MissingApiKey(
                "OPENAI_API_KEY environment variable not found".to_string(),
            )
        })?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }

        if let Some(api_version) = lookup("OPENAI_API_VERSION") {
            config.api_version = api_version;
        }

        if let Some(timeout) = lookup("OPENAI_TIMEOUT_SECS") {
            let secs = timeout.trim().parse::<u64>().map_err(|e| {
                ConfigurationError::InvalidTimeout(format!(
                    "Invalid OPENAI_TIMEOUT_SECS {:?}: {}",
                    timeout, e
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> AssistantsResult<()> {
        let api_key = self.api_key.expose_secret();

        if api_key.trim().is_empty() {
            return Err(ConfigurationError::MissingApiKey("API key is empty".to_string()).into());
        }

        if api_key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ConfigurationError::InvalidApiKeyFormat(
                "API key must not contain whitespace or control characters".to_string(),
            )
            .into());
        }

        let base_url = self.parsed_base_url()?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigurationError::InvalidBaseUrl(format!(
                "unsupported scheme {:?}, expected http or https",
                base_url.scheme()
            ))
            .into());
        }

        if self.api_version.contains('/') {
            return Err(ConfigurationError::InvalidBaseUrl(format!(
                "API version {:?} must be a single path segment",
                self.api_version
            ))
            .into());
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(ConfigurationError::InvalidTimeout(
                "Timeout must be greater than 0".to_string(),
            )
            .into());
        }

        for (name, value) in &self.custom_headers {
            HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ConfigurationError::InvalidHeader(format!("{}: {}", name, e)))?;
            HeaderValue::from_str(value)
                .map_err(|e| ConfigurationError::InvalidHeader(format!("{}: {}", name, e)))?;
        }

        Ok(())
    }

    /// Resolves a resource path against `{base_url}/{api_version}`.
    ///
    /// Each path segment is percent-escaped independently, so an identifier
    /// can never introduce extra segments or a query string.
    pub fn resource_url(&self, path: &ResourcePath) -> AssistantsResult<Url> {
        let mut url = self.parsed_base_url()?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ConfigurationError::InvalidBaseUrl(format!(
                    "{} cannot be used as a base URL",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty();
            if !self.api_version.is_empty() {
                segments.push(&self.api_version);
            }
            segments.extend(path.segments());
        }
        Ok(url)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.push((name.into(), value.into()));
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    fn parsed_base_url(&self) -> AssistantsResult<Url> {
        let url = Url::parse(self.base_url.trim_end_matches('/')).map_err(|e| {
            AssistantsError::Configuration(ConfigurationError::InvalidBaseUrl(format!(
                "{}: {}",
                self.base_url, e
            )))
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigurationError::InvalidBaseUrl(format!(
                "{} cannot be used as a base URL",
                self.base_url
            ))
            .into());
        }

        Ok(url)
    }
}

impl std::fmt::Debug for AssistantsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantsConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_headers", &self.custom_headers)
            .finish()
    }
}

fn default_user_agent() -> String {
    format!("integrations-assistants/{}", env!("CARGO_PKG_VERSION"))
}
