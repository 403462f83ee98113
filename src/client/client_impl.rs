use crate::auth::AuthManager;
use crate::client::{AssistantsClient, AssistantsConfig, ResourceClient};
use crate::services::assistants::{
    AssistantService, AssistantServiceImpl, MessageService, MessageServiceImpl, ThreadService,
    ThreadServiceImpl,
};
use crate::transport::HttpTransport;
use std::sync::Arc;

pub struct AssistantsClientImpl {
    resources: ResourceClient,
    assistants_service: AssistantServiceImpl,
    threads_service: ThreadServiceImpl,
    messages_service: MessageServiceImpl,
}

impl AssistantsClientImpl {
    pub fn new(
        config: AssistantsConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        let resources = ResourceClient::new(Arc::new(config), transport, auth_manager);

        Self {
            assistants_service: AssistantServiceImpl::new(resources.clone()),
            threads_service: ThreadServiceImpl::new(resources.clone()),
            messages_service: MessageServiceImpl::new(resources.clone()),
            resources,
        }
    }
}

impl AssistantsClient for AssistantsClientImpl {
    fn assistants(&self) -> &dyn AssistantService {
        &self.assistants_service
    }

    fn threads(&self) -> &dyn ThreadService {
        &self.threads_service
    }

    fn messages(&self) -> &dyn MessageService {
        &self.messages_service
    }

    fn resources(&self) -> &ResourceClient {
        &self.resources
    }

    fn config(&self) -> &AssistantsConfig {
        self.resources.config()
    }
}

impl std::fmt::Debug for AssistantsClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantsClientImpl")
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}
