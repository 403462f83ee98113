use crate::errors::{AssistantsError, AssistantsResult, ErrorMapper};
use crate::transport::HttpResponse;
use crate::types::JsonObject;
use http::StatusCode;
use serde::de::DeserializeOwned;

pub struct ResponseParser;

impl ResponseParser {
    /// Passes the response through only if its status is exactly `expected`.
    ///
    /// Any other status, including other 2xx codes, becomes
    /// [`AssistantsError::UnexpectedStatus`].
    pub fn expect_status(response: HttpResponse, expected: StatusCode) -> AssistantsResult<HttpResponse> {
        if response.status == expected {
            Ok(response)
        } else {
            Err(ErrorMapper::unexpected_status(
                response.status.as_u16(),
                expected.as_u16(),
                &response.body,
            ))
        }
    }

    pub fn parse_json<T: DeserializeOwned>(data: &[u8]) -> AssistantsResult<T> {
        serde_json::from_slice(data).map_err(|e| AssistantsError::decoding(e, data))
    }

    /// Decodes a body that must be a JSON object, whatever its members.
    pub fn parse_object(data: &[u8]) -> AssistantsResult<JsonObject> {
        match serde_json::from_slice::<serde_json::Value>(data) {
            Ok(serde_json::Value::Object(map)) => Ok(map),
            Ok(other) => Err(AssistantsError::decoding(
                format!("expected a JSON object, found {}", json_kind(&other)),
                data,
            )),
            Err(e) => Err(AssistantsError::decoding(e, data)),
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
