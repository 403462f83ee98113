//! Integration tests for the assistants resource

use super::*;
use integrations_assistants::{AssistantsError, ResourcePath};
use pretty_assertions::assert_eq;
use serde::{Serialize, Serializer};
use serde_json::json;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{body_json, body_partial_json, header};
use wiremock::ResponseTemplate;

fn tutor_request() -> AssistantRequest {
    AssistantRequest::new("gpt-4o", "Math Tutor", "You are a personal math tutor.")
        .with_tool(Tool::file_search())
        .with_tool_resources(ToolResources::new().with_vector_stores("file_search", ["vs_1"]))
}

#[tokio::test]
async fn test_create_assistant_integration_success() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/v1/beta/assistants")
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "model": "gpt-4o",
            "name": "Math Tutor",
            "instructions": "You are a personal math tutor.",
            "tools": [{"type": "file_search"}],
            "tool_resources": {"file_search": {"vector_store_ids": ["vs_1"]}}
        })))
        .respond_with(success_response(json!({
            "id": "asst_abc123",
            "object": "assistant",
            "created_at": 1700000000,
            "model": "gpt-4o",
            "name": "Math Tutor",
            "tools": [{"type": "file_search"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let assistant = client.assistants().create(tutor_request()).await.unwrap();

    assert_eq!(assistant.id.as_deref(), Some("asst_abc123"));
    assert_eq!(assistant.name.as_deref(), Some("Math Tutor"));
    assert_eq!(
        assistant.created_at_datetime().map(|d| d.to_rfc3339()),
        Some("2023-11-14T22:13:20+00:00".to_string())
    );
}

#[tokio::test]
async fn test_list_assistants_integration() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/beta/assistants")
        .respond_with(success_response(json!({
            "object": "list",
            "data": [{"id": "asst_1"}, {"id": "asst_2"}],
            "first_id": "asst_1",
            "last_id": "asst_2",
            "has_more": true
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let list = client.assistants().list().await.unwrap();

    assert_eq!(list.get("has_more"), Some(&json!(true)));
    let ids: Vec<_> = list
        .assistants()
        .unwrap()
        .into_iter()
        .filter_map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["asst_1".to_string(), "asst_2".to_string()]);

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(requests[0].headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_modify_assistant_integration() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("PATCH", "/v1/beta/assistants/asst_abc123")
        .and(body_partial_json(json!({"instructions": "Show every step."})))
        .respond_with(success_response(json!({
            "id": "asst_abc123",
            "instructions": "Show every step."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = AssistantRequest::new("gpt-4o", "Math Tutor", "Show every step.");
    let assistant = client
        .assistants()
        .modify("asst_abc123", request)
        .await
        .unwrap();

    assert_eq!(assistant.instructions.as_deref(), Some("Show every step."));
}

#[tokio::test]
async fn test_delete_assistant_204_is_success() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("DELETE", "/v1/beta/assistants/asst_abc123")
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client.assistants().delete("asst_abc123").await.unwrap();
}

#[tokio::test]
async fn test_delete_assistant_200_is_unexpected() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("DELETE", "/v1/beta/assistants/asst_abc123")
        .respond_with(success_response(json!({
            "id": "asst_abc123",
            "object": "assistant.deleted",
            "deleted": true
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.assistants().delete("asst_abc123").await.unwrap_err();

    assert!(matches!(
        err,
        AssistantsError::UnexpectedStatus {
            status: 200,
            expected: 204,
            ..
        }
    ));
}

#[tokio::test]
async fn test_retrieve_assistant_error_envelope() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/beta/assistants/asst_missing")
        .respond_with(error_response(
            404,
            json!({
                "error": {
                    "message": "No assistant found with id 'asst_missing'.",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": null
                }
            }),
        ))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .assistants()
        .retrieve("asst_missing")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "Unexpected status 404 (expected 200): No assistant found with id 'asst_missing'."
    );
}

#[tokio::test]
async fn test_retrieve_assistant_shape_mismatch() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/beta/assistants/asst_1")
        .respond_with(success_response(json!({"id": "asst_1", "tools": "file_search"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.assistants().retrieve("asst_1").await.unwrap_err();

    match err {
        AssistantsError::Decoding { body, .. } => assert!(body.contains("\"tools\"")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test_case("a/b", "/v1/beta/assistants/a%2Fb" ; "slash")]
#[test_case("a b", "/v1/beta/assistants/a%20b" ; "space")]
#[test_case("a?x=1", "/v1/beta/assistants/a%3Fx=1" ; "query marker")]
#[test_case("a#frag", "/v1/beta/assistants/a%23frag" ; "fragment marker")]
#[test_case("50%", "/v1/beta/assistants/50%25" ; "percent")]
#[tokio::test]
async fn test_retrieve_escapes_identifier(id: &str, expected_path: &str) {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", expected_path)
        .respond_with(success_response(json!({"id": id})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let assistant = client.assistants().retrieve(id).await.unwrap();
    assert_eq!(assistant.id.as_deref(), Some(id));
}

#[test_case("" ; "empty")]
#[test_case(".." ; "parent segment")]
#[test_case(" asst_1" ; "padded")]
#[test_case("asst\r\n1" ; "line break")]
#[tokio::test]
async fn test_retrieve_invalid_identifier_sends_nothing(id: &str) {
    let mock_server = setup_mock_server().await;

    let client = client_for(&mock_server);
    let err = client.assistants().retrieve(id).await.unwrap_err();

    assert_eq!(err.kind(), "invalid_identifier");
    assert_eq!(received_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_concurrent_creates_get_their_own_response() {
    let mock_server = setup_mock_server().await;

    for n in 0..8 {
        mock_with_auth("POST", "/v1/beta/assistants")
            .and(body_partial_json(json!({"name": format!("assistant-{n}")})))
            .respond_with(
                success_response(json!({"id": format!("asst_{n}"), "name": format!("assistant-{n}")}))
                    .set_delay(Duration::from_millis(10 * (8 - n))),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = client_for(&mock_server);
    let calls = (0..8u64).map(|n| {
        let client = client.clone();
        async move {
            let request = AssistantRequest::new("gpt-4o", format!("assistant-{n}"), "Be brief.");
            (n, client.assistants().create(request).await)
        }
    });

    for (n, result) in futures::future::join_all(calls).await {
        let assistant = result.unwrap();
        assert_eq!(assistant.id, Some(format!("asst_{n}")));
    }
}

struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("refusing to encode"))
    }
}

#[tokio::test]
async fn test_encoding_failure_sends_nothing() {
    let mock_server = setup_mock_server().await;

    let client = client_for(&mock_server);
    let err = client
        .resources()
        .create::<_, serde_json::Value>(&ResourcePath::assistants(), &Unencodable)
        .await
        .unwrap_err();

    assert!(matches!(err, AssistantsError::Encoding { .. }));
    assert!(err.to_string().contains("refusing to encode"));
    assert_eq!(received_count(&mock_server).await, 0);
}

#[tokio::test]
async fn test_custom_headers_and_user_agent() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/beta/assistants")
        .and(header("openai-beta", "assistants=v2"))
        .and(header("user-agent", "assistants-tests/1.0"))
        .respond_with(success_response(json!({"object": "list", "data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = AssistantsClientBuilder::new()
        .with_config(
            config_for(&mock_server)
                .with_header("OpenAI-Beta", "assistants=v2")
                .with_user_agent("assistants-tests/1.0"),
        )
        .build()
        .unwrap();

    let list = client.assistants().list().await.unwrap();
    assert!(list.assistants().unwrap().is_empty());
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("GET", "/v1/beta/assistants")
        .respond_with(
            success_response(json!({"object": "list", "data": []}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = AssistantsClientBuilder::new()
        .with_config(config_for(&mock_server).with_timeout(Duration::from_millis(50)))
        .build()
        .unwrap();

    let err = client.assistants().list().await.unwrap_err();
    assert_eq!(err.kind(), "transport");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = AssistantsClientBuilder::new()
        .with_config(AssistantsConfig::new(TEST_API_KEY).with_base_url("http://127.0.0.1:1"))
        .build()
        .unwrap();

    let err = client.assistants().list().await.unwrap_err();
    assert_eq!(err.kind(), "transport");
    assert_eq!(err.status_code(), None);
}
