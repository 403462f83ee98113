use crate::errors::{AssistantsResult, ConfigurationError};
use crate::transport::HttpRequest;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::str::FromStr;
use url::Url;

const APPLICATION_JSON: &str = "application/json";

/// Assembles an [`HttpRequest`] one piece at a time.
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl RequestBuilder {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> AssistantsResult<Self> {
        let header_name = HeaderName::from_str(name.as_ref()).map_err(|e| {
            ConfigurationError::InvalidHeader(format!("{}: {}", name.as_ref(), e))
        })?;

        let header_value = HeaderValue::from_str(value.as_ref()).map_err(|e| {
            ConfigurationError::InvalidHeader(format!("{}: {}", name.as_ref(), e))
        })?;

        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Attaches an already encoded JSON body and labels it as such.
    pub fn json_body(mut self, body: Bytes) -> Self {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_JSON),
        );
        self.body = Some(body);
        self
    }

    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}
