mod common;

pub use common::{unix_to_datetime, JsonObject, Metadata, ResourceKind};

pub use crate::client::AssistantsConfig;
