use crate::errors::AssistantsError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub param: Option<String>,
}

pub struct ErrorMapper;

impl ErrorMapper {
    /// Builds the error for a response whose status was not the one the
    /// operation expects, pulling details out of the provider's error
    /// envelope when the body carries one.
    pub fn unexpected_status(status: u16, expected: u16, body: &[u8]) -> AssistantsError {
        let detail = Self::parse_error_response(body).map(|r| r.error);

        let message = match &detail {
            Some(d) => d.message.clone(),
            None => Self::fallback_message(status, body),
        };

        AssistantsError::UnexpectedStatus {
            status,
            expected,
            message,
            error_type: detail.as_ref().and_then(|d| d.error_type.clone()),
            error_code: detail.as_ref().and_then(|d| d.code.clone()),
        }
    }

    pub fn parse_error_response(body: &[u8]) -> Option<ApiErrorResponse> {
        serde_json::from_slice(body).ok()
    }

    fn fallback_message(status: u16, body: &[u8]) -> String {
        let text = String::from_utf8_lossy(body);
        let text = text.trim();
        if text.is_empty() {
            format!("HTTP error: {}", status)
        } else {
            text.to_string()
        }
    }
}
