//! Mock authentication for testing

use crate::auth::AuthManager;
use crate::errors::{AssistantsResult, ConfigurationError};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Writes a fixed bearer token and counts how often it was asked to.
#[derive(Debug, Default)]
pub struct MockAuthManager {
    fail: bool,
    calls: AtomicUsize,
}

impl MockAuthManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// An auth manager whose every call fails with a configuration error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthManager for MockAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> AssistantsResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.validate()?;
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer mock-token"));
        Ok(())
    }

    fn validate(&self) -> AssistantsResult<()> {
        if self.fail {
            return Err(ConfigurationError::InvalidApiKeyFormat("mock auth failure".to_string()).into());
        }
        Ok(())
    }
}
