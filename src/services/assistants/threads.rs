use crate::client::{ResourceClient, ResourcePath};
use crate::errors::AssistantsResult;
use crate::types::{unix_to_datetime, Metadata};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Thread {
    pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(unix_to_datetime)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

/// A plain-text message used to seed a new thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateThreadRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Vec<Message>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl CreateThreadRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_assistant(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: Some(assistant_id.into()),
            ..Self::default()
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.get_or_insert_with(Vec::new).push(message);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }
}

#[async_trait]
pub trait ThreadService: Send + Sync {
    async fn create(&self, request: CreateThreadRequest) -> AssistantsResult<Thread>;
    async fn retrieve(&self, thread_id: &str) -> AssistantsResult<Thread>;
}

pub struct ThreadServiceImpl {
    client: ResourceClient,
}

impl ThreadServiceImpl {
    pub fn new(client: ResourceClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ThreadService for ThreadServiceImpl {
    async fn create(&self, request: CreateThreadRequest) -> AssistantsResult<Thread> {
        self.client.create(&ResourcePath::threads(), &request).await
    }

    async fn retrieve(&self, thread_id: &str) -> AssistantsResult<Thread> {
        let path = ResourcePath::thread(thread_id)?;
        self.client.get(&path).await
    }
}
