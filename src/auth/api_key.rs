use crate::auth::AuthProvider;
use crate::errors::{AssistantsResult, ConfigurationError};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Bearer token provider backed by a static API key.
pub struct ApiKeyProvider {
    api_key: SecretString,
}

impl ApiKeyProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
        }
    }

    pub fn from_secret(api_key: SecretString) -> Self {
        Self { api_key }
    }

    /// Validates the API key format
    pub fn validate(&self) -> AssistantsResult<()> {
        let key = self.api_key.expose_secret();

        if key.trim().is_empty() {
            return Err(ConfigurationError::MissingApiKey("API key is empty".to_string()).into());
        }

        if !Self::validate_key_format(key) {
            return Err(ConfigurationError::InvalidApiKeyFormat(
                "API key must not contain whitespace or control characters".to_string(),
            )
            .into());
        }

        Ok(())
    }

    fn validate_key_format(key: &str) -> bool {
        !key.is_empty() && !key.chars().any(|c| c.is_whitespace() || c.is_control())
    }

    fn header_value(&self) -> AssistantsResult<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))
            .map_err(|_| {
                ConfigurationError::InvalidApiKeyFormat(
                    "API key cannot be used in an Authorization header".to_string(),
                )
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait]
impl AuthProvider for ApiKeyProvider {
    async fn authenticate(&self, headers: &mut HeaderMap) -> AssistantsResult<()> {
        headers.insert(AUTHORIZATION, self.header_value()?);
        Ok(())
    }

    fn is_valid(&self) -> bool {
        Self::validate_key_format(self.api_key.expose_secret())
    }
}
