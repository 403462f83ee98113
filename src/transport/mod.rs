//! HTTP transport layer.
//!
//! A transport moves one plain-data request to the wire and hands back the
//! raw status, headers and body. It never interprets the status code; that
//! is left to the resource client, which knows what each operation expects.

mod http_transport;
mod request_builder;
mod response_parser;

pub use http_transport::ReqwestTransport;
pub use request_builder::RequestBuilder;
pub use response_parser::ResponseParser;

use crate::errors::AssistantsResult;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// A fully resolved outgoing request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

/// A response as received, before any status check or decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Response carrying a JSON document, as the service would send it.
    pub fn json(status: StatusCode, value: &serde_json::Value) -> Self {
        let mut response = Self::new(status, value.to_string());
        response.headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        response
    }
}

/// Sends requests over some wire.
///
/// Failures returned from `send` are reserved for requests that never
/// produced a response (connection refused, timeout, unreadable body).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> AssistantsResult<HttpResponse>;
}
