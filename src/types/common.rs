use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Untyped JSON object, as returned by collection endpoints.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Free-form string metadata attached to assistants, threads and messages.
pub type Metadata = HashMap<String, String>;

/// Category of entity exposed by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Assistant,
    Thread,
    Message,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Assistant => "assistant",
            ResourceKind::Thread => "thread",
            ResourceKind::Message => "message",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts service-assigned Unix seconds to a calendar time for display.
///
/// Returns `None` for values outside the representable range.
pub fn unix_to_datetime(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
