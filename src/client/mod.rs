mod client_impl;
mod config;
mod factory;
mod resource_client;
mod resource_path;

pub use client_impl::AssistantsClientImpl;
pub use config::{AssistantsConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
pub use factory::AssistantsClientBuilder;
pub use resource_client::ResourceClient;
pub use resource_path::ResourcePath;

use crate::services::assistants::{AssistantService, MessageService, ThreadService};

/// Entry point to every resource the crate covers.
///
/// Implementations are `Send + Sync` and meant to be shared behind an `Arc`.
pub trait AssistantsClient: Send + Sync {
    fn assistants(&self) -> &dyn AssistantService;
    fn threads(&self) -> &dyn ThreadService;
    fn messages(&self) -> &dyn MessageService;

    /// The generic request routine the typed services are built on.
    fn resources(&self) -> &ResourceClient;

    fn config(&self) -> &AssistantsConfig;
}
