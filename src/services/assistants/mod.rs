mod messages;
mod service;
mod threads;
mod types;


pub use messages::{
    CreateMessageRequest, MessageContent, MessageResponse, MessageService, MessageServiceImpl,
    TextContent,
};
pub use service::{AssistantService, AssistantServiceImpl};
pub use threads::{
    CreateThreadRequest, Message, MessageRole, Thread, ThreadService, ThreadServiceImpl,
};
pub use types::{
    Assistant, AssistantList, AssistantRequest, StoreReferences, Tool, ToolResources,
};
