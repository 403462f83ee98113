use crate::auth::{ApiKeyProvider, AuthProvider};
use crate::client::AssistantsConfig;
use crate::errors::AssistantsResult;
use async_trait::async_trait;
use http::HeaderMap;
use std::sync::Arc;

/// Trait for managing authentication in requests
#[async_trait]
pub trait AuthManager: Send + Sync {
    /// Applies authentication headers to the request
    async fn apply_auth(&self, headers: &mut HeaderMap) -> AssistantsResult<()>;

    /// Validates the authentication configuration
    fn validate(&self) -> AssistantsResult<()>;
}

/// Attaches `Authorization: Bearer <key>` to every request.
pub struct BearerAuthManager {
    provider: Arc<dyn AuthProvider>,
}

impl BearerAuthManager {
    /// Creates a new BearerAuthManager from configuration
    pub fn new(config: &AssistantsConfig) -> Self {
        Self {
            provider: Arc::new(ApiKeyProvider::from_secret(config.api_key.clone())),
        }
    }

    /// Creates a new BearerAuthManager with a custom provider
    pub fn with_provider(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AuthManager for BearerAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> AssistantsResult<()> {
        self.provider.authenticate(headers).await
    }

    fn validate(&self) -> AssistantsResult<()> {
        if !self.provider.is_valid() {
            return Err(crate::errors::ConfigurationError::InvalidApiKeyFormat(
                "API key validation failed".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
