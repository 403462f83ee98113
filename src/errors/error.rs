use crate::errors::categories::{ConfigurationError, NetworkError};
use crate::types::ResourceKind;
use thiserror::Error;

pub type AssistantsResult<T> = Result<T, AssistantsError>;

/// Every way a single resource call can fail.
///
/// Each stage of the request pipeline maps to exactly one variant, so callers
/// can tell a bad identifier from a bad payload, a dead connection, a refused
/// request and a malformed reply.
#[derive(Error, Debug)]
pub enum AssistantsError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Invalid {kind} identifier {id:?}: {reason}")]
    InvalidIdentifier {
        kind: ResourceKind,
        id: String,
        reason: String,
    },

    #[error("Failed to encode request body: {message}")]
    Encoding { message: String },

    #[error("Transport error: {0}")]
    Transport(#[from] NetworkError),

    #[error("Unexpected status {status} (expected {expected}): {message}")]
    UnexpectedStatus {
        status: u16,
        expected: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("Failed to decode response body: {message}")]
    Decoding { message: String, body: String },
}

impl AssistantsError {
    pub fn invalid_identifier(
        kind: ResourceKind,
        id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AssistantsError::InvalidIdentifier {
            kind,
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn encoding(err: serde_json::Error) -> Self {
        AssistantsError::Encoding {
            message: err.to_string(),
        }
    }

    pub fn decoding(err: impl std::fmt::Display, body: &[u8]) -> Self {
        AssistantsError::Decoding {
            message: err.to_string(),
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// Status code returned by the service, when the call got that far.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AssistantsError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn error_code(&self) -> Option<&str> {
        match self {
            AssistantsError::UnexpectedStatus { error_code, .. } => error_code.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Stable short name of the failure stage, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            AssistantsError::Configuration(_) => "configuration",
            AssistantsError::InvalidIdentifier { .. } => "invalid_identifier",
            AssistantsError::Encoding { .. } => "encoding",
            AssistantsError::Transport(_) => "transport",
            AssistantsError::UnexpectedStatus { .. } => "unexpected_status",
            AssistantsError::Decoding { .. } => "decoding",
        }
    }
}

impl From<reqwest::Error> for AssistantsError {
    fn from(err: reqwest::Error) -> Self {
        let network = if err.is_timeout() {
            NetworkError::Timeout(err.to_string())
        } else if err.is_connect() {
            NetworkError::ConnectionFailed(err.to_string())
        } else if err.is_body() || err.is_decode() {
            NetworkError::Body(err.to_string())
        } else {
            NetworkError::RequestFailed(err.to_string())
        };
        AssistantsError::Transport(network)
    }
}

impl From<url::ParseError> for AssistantsError {
    fn from(err: url::ParseError) -> Self {
        AssistantsError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}
