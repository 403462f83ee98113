//! Typed async client for the assistants, threads and messages resources of
//! a conversational-AI provider's REST API.
//!
//! Every operation is one HTTP exchange routed through [`ResourceClient`],
//! which resolves the URL, attaches the bearer token, encodes the body,
//! checks the status against the single code the operation accepts and
//! decodes the reply. Failures come back as [`AssistantsError`], with one
//! variant per stage of that pipeline.
//!
//! ```no_run
//! use integrations_assistants::prelude::*;
//!
//! # async fn run() -> AssistantsResult<()> {
//! let client = AssistantsClientBuilder::new().from_env()?.build()?;
//!
//! let thread = client
//!     .threads()
//!     .create(CreateThreadRequest::for_assistant("asst_1").with_message(Message::user("hi")))
//!     .await?;
//! println!("{} created at {:?}", thread.id, thread.created_at_datetime());
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod errors;
pub mod services;
pub mod transport;
pub mod types;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
#[cfg(test)]
pub mod fixtures;

pub use client::{
    AssistantsClient, AssistantsClientBuilder, AssistantsClientImpl, ResourceClient, ResourcePath,
};
pub use errors::{AssistantsError, AssistantsResult};
pub use types::AssistantsConfig;

pub use services::assistants::{
    Assistant, AssistantList, AssistantRequest, AssistantService, CreateMessageRequest,
    CreateThreadRequest, Message, MessageContent, MessageResponse, MessageRole, MessageService,
    TextContent, Thread, ThreadService, Tool, ToolResources,
};

pub mod prelude {
    pub use crate::client::{AssistantsClient, AssistantsClientBuilder};
    pub use crate::errors::{AssistantsError, AssistantsResult};
    pub use crate::services::assistants::{
        AssistantRequest, AssistantService, CreateMessageRequest, CreateThreadRequest, Message,
        MessageRole, MessageService, ThreadService, Tool, ToolResources,
    };
    pub use crate::types::AssistantsConfig;
}
