use crate::client::{ResourceClient, ResourcePath};
use crate::errors::AssistantsResult;
use crate::services::assistants::{Assistant, AssistantList, AssistantRequest};
use async_trait::async_trait;

#[async_trait]
pub trait AssistantService: Send + Sync {
    async fn create(&self, request: AssistantRequest) -> AssistantsResult<Assistant>;
    async fn list(&self) -> AssistantsResult<AssistantList>;
    async fn retrieve(&self, assistant_id: &str) -> AssistantsResult<Assistant>;
    async fn modify(&self, assistant_id: &str, request: AssistantRequest) -> AssistantsResult<Assistant>;
    async fn delete(&self, assistant_id: &str) -> AssistantsResult<()>;
}

pub struct AssistantServiceImpl {
    client: ResourceClient,
}

impl AssistantServiceImpl {
    pub fn new(client: ResourceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssistantService for AssistantServiceImpl {
    async fn create(&self, request: AssistantRequest) -> AssistantsResult<Assistant> {
        self.client
            .create(&ResourcePath::assistants(), &request)
            .await
    }

    async fn list(&self) -> AssistantsResult<AssistantList> {
        self.client
            .list(&ResourcePath::assistants())
            .await
            .map(AssistantList::from_object)
    }

    async fn retrieve(&self, assistant_id: &str) -> AssistantsResult<Assistant> {
        let path = ResourcePath::assistant(assistant_id)?;
        self.client.get(&path).await
    }

    async fn modify(&self, assistant_id: &str, request: AssistantRequest) -> AssistantsResult<Assistant> {
        let path = ResourcePath::assistant(assistant_id)?;
        self.client.modify(&path, &request).await
    }

    async fn delete(&self, assistant_id: &str) -> AssistantsResult<()> {
        let path = ResourcePath::assistant(assistant_id)?;
        self.client.delete(&path).await
    }
}
