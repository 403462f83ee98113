use crate::auth::{AuthManager, BearerAuthManager};
use crate::client::{AssistantsClient, AssistantsClientImpl, AssistantsConfig};
use crate::errors::{AssistantsResult, ConfigurationError};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use tracing::debug;

pub struct AssistantsClientBuilder {
    config: Option<AssistantsConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    auth_manager: Option<Arc<dyn AuthManager>>,
}

impl AssistantsClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            auth_manager: None,
        }
    }

    pub fn with_config(mut self, config: AssistantsConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = Some(AssistantsConfig::new(api_key));
        self
    }

    /// Loads the configuration from `OPENAI_*` environment variables.
    pub fn from_env(self) -> AssistantsResult<Self> {
        Ok(self.with_config(AssistantsConfig::from_env()?))
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_auth_manager(mut self, auth_manager: Arc<dyn AuthManager>) -> Self {
        self.auth_manager = Some(auth_manager);
        self
    }

    /// Validates the configuration and wires up the client.
    ///
    /// Missing collaborators default to [`ReqwestTransport`] and
    /// [`BearerAuthManager`].
    pub fn build(self) -> AssistantsResult<Arc<dyn AssistantsClient>> {
        let config = self.config.ok_or_else(|| {
            ConfigurationError::MissingApiKey("API key must be provided".to_string())
        })?;
        config.validate()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };

        let auth_manager: Arc<dyn AuthManager> = match self.auth_manager {
            Some(auth_manager) => auth_manager,
            None => Arc::new(BearerAuthManager::new(&config)),
        };
        auth_manager.validate()?;

        debug!(base_url = %config.base_url, api_version = %config.api_version, "assistants client built");

        Ok(Arc::new(AssistantsClientImpl::new(
            config,
            transport,
            auth_manager,
        )))
    }
}

impl Default for AssistantsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
