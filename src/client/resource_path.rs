use crate::errors::{AssistantsError, AssistantsResult};
use crate::types::ResourceKind;

/// Location of a resource, relative to `{base_url}/{api_version}`.
///
/// Values can only be built through the constructors below, which reject
/// identifiers that could not round-trip as a single path segment. Whatever
/// survives validation is percent-escaped when the URL is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    kind: ResourceKind,
    segments: Vec<String>,
}

impl ResourcePath {
    /// `beta/assistants`
    pub fn assistants() -> Self {
        Self::fixed(ResourceKind::Assistant, &["beta", "assistants"])
    }

    /// `beta/assistants/{id}`
    pub fn assistant(assistant_id: &str) -> AssistantsResult<Self> {
        let id = validate_identifier(ResourceKind::Assistant, assistant_id)?;
        Ok(Self::assistants().push(id))
    }

    /// `beta/threads`
    pub fn threads() -> Self {
        Self::fixed(ResourceKind::Thread, &["beta", "threads"])
    }

    /// `beta/threads/{id}`
    pub fn thread(thread_id: &str) -> AssistantsResult<Self> {
        let id = validate_identifier(ResourceKind::Thread, thread_id)?;
        Ok(Self::threads().push(id))
    }

    /// `threads/{id}/messages`
    ///
    /// Unlike the other paths this one is not under `beta`, matching where the
    /// service mounts message creation.
    pub fn thread_messages(thread_id: &str) -> AssistantsResult<Self> {
        let id = validate_identifier(ResourceKind::Thread, thread_id)?;
        Ok(Self {
            kind: ResourceKind::Message,
            segments: vec!["threads".to_string(), id.to_string(), "messages".to_string()],
        })
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Unescaped path segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    fn fixed(kind: ResourceKind, segments: &[&str]) -> Self {
        Self {
            kind,
            segments: segments.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn push(mut self, segment: &str) -> Self {
        self.segments.push(segment.to_string());
        self
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

fn validate_identifier(kind: ResourceKind, id: &str) -> AssistantsResult<&str> {
    let reason = if id.is_empty() {
        Some("identifier is empty")
    } else if id == "." || id == ".." {
        Some("identifier is a relative path segment")
    } else if id.trim() != id {
        Some("identifier has leading or trailing whitespace")
    } else if id.chars().any(char::is_control) {
        Some("identifier contains control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(AssistantsError::invalid_identifier(kind, id, reason)),
        None => Ok(id),
    }
}
