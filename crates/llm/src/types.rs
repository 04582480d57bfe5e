//! Service payload types.
//!
//! Replies are kept as raw JSON: the shape of the retrieval reply changes
//! between API versions, so only the few fields we read get accessors.

use kbchat_core::config::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sampling settings for a generative request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceConfig {
    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature for sampling
    pub temperature: f32,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Knowledge base and generating model used for a retrieval request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseTarget {
    pub knowledge_base_id: String,
    pub model_arn: String,
}

impl KnowledgeBaseTarget {
    pub fn new(knowledge_base_id: impl Into<String>, model_arn: impl Into<String>) -> Self {
        Self {
            knowledge_base_id: knowledge_base_id.into(),
            model_arn: model_arn.into(),
        }
    }
}

/// Reply of the retrieval service.
///
/// Any field may be missing. A `null` reply is a valid, empty response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RagResponse(Value);

impl RagResponse {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// A response with no fields at all.
    pub fn empty() -> Self {
        Self(Value::Null)
    }

    /// The generated answer at `output.text`.
    pub fn output_text(&self) -> Option<&str> {
        self.0
            .get("output")
            .and_then(|output| output.get("text"))
            .and_then(Value::as_str)
    }

    /// The raw `citations` field, whatever its shape.
    pub fn citations(&self) -> Option<&Value> {
        self.0.get("citations")
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RagResponse {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}
