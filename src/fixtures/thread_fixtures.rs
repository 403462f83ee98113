//! Thread and message response fixtures

use serde_json::json;

pub fn thread_response() -> serde_json::Value {
    json!({
        "id": "thread_1",
        "object": "thread",
        "created_at": 1700000000,
        "metadata": {},
        "tool_resources": {}
    })
}

pub fn message_response() -> serde_json::Value {
    json!({
        "id": "msg_abc123",
        "object": "thread.message",
        "created_at": 1700000050,
        "assistant_id": null,
        "thread_id": "thread_1",
        "run_id": null,
        "role": "user",
        "content": [
            {
                "type": "text",
                "text": {"value": "I need to solve 3x + 11 = 14.", "annotations": []}
            }
        ],
        "attachments": [],
        "metadata": {}
    })
}
