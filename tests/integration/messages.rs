//! Integration tests for the messages resource

use super::*;
use integrations_assistants::AssistantsError;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::body_json;

#[tokio::test]
async fn test_create_message_integration() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/v1/threads/thread_1/messages")
        .and(body_json(json!({
            "role": "user",
            "content": [{"type": "text", "text": {"value": "What is 2 + 2?", "annotations": []}}]
        })))
        .respond_with(success_response(json!({
            "id": "msg_1",
            "object": "thread.message",
            "created_at": 1700000000,
            "assistant_id": null,
            "thread_id": "thread_1",
            "run_id": null,
            "role": "user",
            "content": [{"type": "text", "text": {"value": "What is 2 + 2?", "annotations": []}}],
            "attachments": [],
            "metadata": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let message = client
        .messages()
        .create(
            "thread_1",
            CreateMessageRequest::text(MessageRole::User, "What is 2 + 2?"),
        )
        .await
        .unwrap();

    assert_eq!(message.id.as_deref(), Some("msg_1"));
    assert_eq!(message.role, Some(MessageRole::User));
    assert_eq!(message.text(), "What is 2 + 2?");
    assert!(message.attachments.is_empty());
}

#[tokio::test]
async fn test_create_message_unknown_thread() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/v1/threads/thread_gone/messages")
        .respond_with(error_response(
            404,
            json!({
                "error": {
                    "message": "No thread found with id 'thread_gone'.",
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
        .messages()
        .create("thread_gone", CreateMessageRequest::text(MessageRole::User, "hello?"))
        .await
        .unwrap_err();

    match err {
        AssistantsError::UnexpectedStatus {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "No thread found with id 'thread_gone'.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_message_escapes_thread_id() {
    let mock_server = setup_mock_server().await;

    mock_with_auth("POST", "/v1/threads/thread%2F..%2Fadmin/messages")
        .respond_with(success_response(json!({"id": "msg_2", "content": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let message = client
        .messages()
        .create("thread/../admin", CreateMessageRequest::text(MessageRole::User, "x"))
        .await
        .unwrap();

    assert_eq!(message.id.as_deref(), Some("msg_2"));
}
