use crate::auth::AuthManager;
use crate::client::{AssistantsConfig, ResourcePath};
use crate::errors::{AssistantsError, AssistantsResult};
use crate::transport::{HttpResponse, HttpTransport, RequestBuilder, ResponseParser};
use crate::types::JsonObject;
use bytes::Bytes;
use http::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Generic CRUD over [`ResourcePath`]s.
///
/// Every resource operation in the crate funnels through [`exchange`]:
/// resolve the URL, attach headers, send, and check the status against the
/// single code the operation accepts. Services only choose the path, the
/// payload and the shape to decode.
///
/// [`exchange`]: ResourceClient::exchange
#[derive(Clone)]
pub struct ResourceClient {
    config: Arc<AssistantsConfig>,
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
}

impl ResourceClient {
    pub fn new(
        config: Arc<AssistantsConfig>,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> Self {
        Self {
            config,
            transport,
            auth_manager,
        }
    }

    pub fn config(&self) -> &AssistantsConfig {
        &self.config
    }

    /// POST `payload` and decode the 200 body as `R`.
    pub async fn create<B, R>(&self, path: &ResourcePath, payload: &B) -> AssistantsResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(payload)?;
        let response = self
            .exchange(Method::POST, path, Some(body), StatusCode::OK)
            .await?;
        decode(path, &response)
    }

    /// GET a collection. The body must be a JSON object; its members are not
    /// interpreted.
    pub async fn list(&self, path: &ResourcePath) -> AssistantsResult<JsonObject> {
        let response = self
            .exchange(Method::GET, path, None, StatusCode::OK)
            .await?;
        ResponseParser::parse_object(&response.body).map_err(|err| {
            warn!(path = %path, error = %err, "collection body is not a JSON object");
            err
        })
    }

    pub async fn get<R>(&self, path: &ResourcePath) -> AssistantsResult<R>
    where
        R: DeserializeOwned,
    {
        let response = self
            .exchange(Method::GET, path, None, StatusCode::OK)
            .await?;
        decode(path, &response)
    }

    /// PATCH `payload` and decode the 200 body as `R`.
    pub async fn modify<B, R>(&self, path: &ResourcePath, payload: &B) -> AssistantsResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = encode(payload)?;
        let response = self
            .exchange(Method::PATCH, path, Some(body), StatusCode::OK)
            .await?;
        decode(path, &response)
    }

    /// DELETE, succeeding only on 204. The body is never read.
    pub async fn delete(&self, path: &ResourcePath) -> AssistantsResult<()> {
        self.exchange(Method::DELETE, path, None, StatusCode::NO_CONTENT)
            .await
            .map(|_| ())
    }

    /// Sends one request and returns the response only if its status is
    /// exactly `expected`.
    #[instrument(
        skip_all,
        fields(method = %method, kind = %path.kind(), path = %path, expected = expected.as_u16())
    )]
    pub async fn exchange(
        &self,
        method: Method,
        path: &ResourcePath,
        body: Option<Bytes>,
        expected: StatusCode,
    ) -> AssistantsResult<HttpResponse> {
        let url = self.config.resource_url(path)?;

        let mut builder = RequestBuilder::new(method, url);
        for (name, value) in &self.config.custom_headers {
            builder = builder.header(name, value)?;
        }
        self.auth_manager.apply_auth(builder.headers_mut()).await?;
        if let Some(body) = body {
            builder = builder.json_body(body);
        }

        let request = builder.build();
        debug!(url = %request.url, has_body = request.body.is_some(), "sending request");

        let response = self.transport.send(request).await.map_err(|err| {
            warn!(error = %err, kind = err.kind(), "request failed before a response arrived");
            err
        })?;

        debug!(status = response.status.as_u16(), bytes = response.body.len(), "received response");

        ResponseParser::expect_status(response, expected).map_err(|err| {
            warn!(
                status = err.status_code(),
                error = %err,
                "unexpected response status"
            );
            err
        })
    }
}

impl std::fmt::Debug for ResourceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn encode<B: Serialize + ?Sized>(payload: &B) -> AssistantsResult<Bytes> {
    serde_json::to_vec(payload)
        .map(Bytes::from)
        .map_err(AssistantsError::encoding)
}

fn decode<R: DeserializeOwned>(path: &ResourcePath, response: &HttpResponse) -> AssistantsResult<R> {
    ResponseParser::parse_json(&response.body).map_err(|err| {
        warn!(path = %path, error = %err, "response body does not match the expected shape");
        err
    })
}
