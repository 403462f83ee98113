use crate::errors::{AssistantsError, AssistantsResult};
use crate::types::{unix_to_datetime, JsonObject, Metadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An assistant as returned by the service.
///
/// Everything is optional because the service only fills in `id` and
/// `created_at` once the assistant exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assistant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_resources: Option<ToolResources>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    /// Either the string `"auto"` or a format object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
}

impl Assistant {
    pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(unix_to_datetime)
    }
}

/// A capability tag such as `file_search`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub kind: String,
}

impl Tool {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }

    pub fn file_search() -> Self {
        Self::new("file_search")
    }

    pub fn code_interpreter() -> Self {
        Self::new("code_interpreter")
    }
}

/// Store references for one tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreReferences {
    #[serde(default)]
    pub vector_store_ids: Vec<String>,
}

/// Tool name to the stores that tool may read, serialized in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolResources(BTreeMap<String, StoreReferences>);

impl ToolResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vector_stores<I, S>(mut self, tool: impl Into<String>, store_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(
            tool.into(),
            StoreReferences {
                vector_store_ids: store_ids.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    pub fn get(&self, tool: &str) -> Option<&StoreReferences> {
        self.0.get(tool)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoreReferences)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Body for creating or modifying an assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantRequest {
    pub model: String,
    pub name: String,
    pub instructions: String,
    pub tools: Vec<Tool>,
    pub tool_resources: ToolResources,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
}

impl AssistantRequest {
    pub fn new(
        model: impl Into<String>,
        name: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            name: name.into(),
            instructions: instructions.into(),
            tools: Vec::new(),
            tool_resources: ToolResources::default(),
            description: None,
            metadata: None,
            temperature: None,
            top_p: None,
            response_format: None,
        }
    }

    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn with_tool_resources(mut self, tool_resources: ToolResources) -> Self {
        self.tool_resources = tool_resources;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_response_format(mut self, response_format: serde_json::Value) -> Self {
        self.response_format = Some(response_format);
        self
    }
}

/// Body of the list endpoint, kept as the service sent it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssistantList {
    raw: JsonObject,
}

impl AssistantList {
    pub fn from_object(raw: JsonObject) -> Self {
        Self { raw }
    }

    pub fn as_object(&self) -> &JsonObject {
        &self.raw
    }

    pub fn into_inner(self) -> JsonObject {
        self.raw
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.raw.get(key)
    }

    /// Decodes the `data` member as assistants.
    pub fn assistants(&self) -> AssistantsResult<Vec<Assistant>> {
        let data = self.raw.get("data").ok_or_else(|| {
            AssistantsError::decoding("list body has no \"data\" member", b"")
        })?;

        Vec::<Assistant>::deserialize(data)
            .map_err(|e| AssistantsError::decoding(e, data.to_string().as_bytes()))
    }
}
