//! Mock HTTP transport for testing

use crate::errors::{AssistantsError, AssistantsResult, NetworkError};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport};
use async_trait::async_trait;
use http::{Method, StatusCode};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mock HTTP transport that replays queued responses in order and records
/// every request it receives.
#[derive(Clone, Default)]
pub struct MockHttpTransport {
    inner: Arc<Mutex<MockHttpTransportInner>>,
}

#[derive(Default)]
struct MockHttpTransportInner {
    responses: VecDeque<AssistantsResult<HttpResponse>>,
    requests: Vec<HttpRequest>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a JSON response with the given status
    pub fn with_json_response(self, status: StatusCode, body: serde_json::Value) -> Self {
        self.push_response(HttpResponse::json(status, &body));
        self
    }

    /// Add a transport-level failure
    pub fn with_error(self, error: AssistantsError) -> Self {
        self.lock().responses.push_back(Err(error));
        self
    }

    pub fn push_response(&self, response: HttpResponse) {
        self.lock().responses.push_back(Ok(response));
    }

    /// Get the list of requests made
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().requests.clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.lock().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Verify that a request was made with the given method and URL path
    pub fn verify_request(&self, method: Method, path: &str) -> bool {
        self.lock()
            .requests
            .iter()
            .any(|r| r.method == method && r.url.path() == path)
    }

    fn lock(&self) -> MutexGuard<'_, MockHttpTransportInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: HttpRequest) -> AssistantsResult<HttpResponse> {
        let mut inner = self.lock();
        inner.requests.push(request);
        inner.responses.pop_front().unwrap_or_else(|| {
            Err(NetworkError::ConnectionFailed("no mock response queued".to_string()).into())
        })
    }
}
