//! Assistant response fixtures

use serde_json::json;

pub fn assistant_response() -> serde_json::Value {
    json!({
        "id": "asst_abc123",
        "object": "assistant",
        "created_at": 1700000000,
        "name": "Math Tutor",
        "description": null,
        "model": "gpt-4o",
        "instructions": "You are a personal math tutor.",
        "tools": [{"type": "file_search"}],
        "tool_resources": {"file_search": {"vector_store_ids": ["vs_1"]}},
        "metadata": {},
        "temperature": 1.0,
        "top_p": 1.0,
        "response_format": "auto"
    })
}

pub fn assistant_list_response() -> serde_json::Value {
    json!({
        "object": "list",
        "data": [
            assistant_response(),
            {
                "id": "asst_def456",
                "object": "assistant",
                "created_at": 1700000100,
                "name": "Coder",
                "model": "gpt-4o",
                "tools": [{"type": "code_interpreter"}]
            }
        ],
        "first_id": "asst_abc123",
        "last_id": "asst_def456",
        "has_more": false
    })
}
