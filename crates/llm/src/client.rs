//! Client abstractions for the two external services.
//!
//! The generative service answers a question under a system instruction.
//! The retrieval service searches a knowledge base and answers from it,
//! returning citations alongside the text.

use crate::types::{InferenceConfig, KnowledgeBaseTarget, RagResponse};
use kbchat_core::AppResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A block of text content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub text: String,
}

impl ContentBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// "user" or "assistant"
    pub role: String,

    pub content: Vec<ContentBlock>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: vec![ContentBlock::new(text)],
        }
    }
}

/// Request for the generative (conversation) service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverseRequest {
    /// Model identifier (e.g., "amazon.nova-pro-v1:0")
    pub model_id: String,

    /// System instruction blocks
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub system: Vec<ContentBlock>,

    pub messages: Vec<Message>,

    pub inference_config: InferenceConfig,
}

impl ConverseRequest {
    /// Create a single-turn request with default inference settings.
    pub fn new(model_id: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            system: Vec::new(),
            messages: vec![Message::user(user_text)],
            inference_config: InferenceConfig::default(),
        }
    }

    /// Add a system instruction block.
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system.push(ContentBlock::new(system));
        self
    }

    /// Set the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.inference_config.max_tokens = max_tokens;
        self
    }

    /// Set the temperature for sampling.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.inference_config.temperature = temperature;
        self
    }
}

/// Reply of the generative service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConverseResponse(Value);

impl ConverseResponse {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// Concatenated text of every block in `output.message.content`.
    ///
    /// Returns `None` when the reply carries no text at all.
    pub fn generated_text(&self) -> Option<String> {
        let blocks = self
            .0
            .get("output")
            .and_then(|output| output.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(Value::as_array)?;

        let text: String = blocks
            .iter()
            .filter_map(|block| block.get("text").and_then(Value::as_str))
            .collect();

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ConverseResponse {
    fn from(raw: Value) -> Self {
        Self(raw)
    }
}

/// Text input of a retrieval request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    pub text: String,
}

/// Retrieval configuration of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveAndGenerateConfiguration {
    pub knowledge_base_configuration: KnowledgeBaseTarget,

    /// Always "KNOWLEDGE_BASE"
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request for the retrieval (RAG) service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveRequest {
    pub input: TextInput,
    pub retrieve_and_generate_configuration: RetrieveAndGenerateConfiguration,
}

impl RetrieveRequest {
    pub fn new(text: impl Into<String>, target: KnowledgeBaseTarget) -> Self {
        Self {
            input: TextInput { text: text.into() },
            retrieve_and_generate_configuration: RetrieveAndGenerateConfiguration {
                knowledge_base_configuration: target,
                kind: "KNOWLEDGE_BASE".to_string(),
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.input.text
    }

    pub fn target(&self) -> &KnowledgeBaseTarget {
        &self.retrieve_and_generate_configuration.knowledge_base_configuration
    }
}

/// Trait for generative model providers.
#[async_trait::async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Get the provider name (e.g., "replay").
    fn provider_name(&self) -> &str;

    /// Send one conversation request and return the raw reply.
    async fn converse(&self, request: &ConverseRequest) -> AppResult<ConverseResponse>;
}

/// Trait for retrieval-augmented generation providers.
#[async_trait::async_trait]
pub trait RetrievalClient: Send + Sync {
    /// Get the provider name (e.g., "replay").
    fn provider_name(&self) -> &str;

    /// Retrieve from the knowledge base and generate an answer.
    async fn retrieve_and_generate(&self, request: &RetrieveRequest) -> AppResult<RagResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_converse_request_shape() {
        let request = ConverseRequest::new("amazon.nova-pro-v1:0", "who is madonna")
            .with_system("Be brief.")
            .with_max_tokens(100);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "modelId": "amazon.nova-pro-v1:0",
                "system": [{"text": "Be brief."}],
                "messages": [{"role": "user", "content": [{"text": "who is madonna"}]}],
                "inferenceConfig": {"maxTokens": 100, "temperature": 0.5}
            })
        );
    }

    #[test]
    fn test_generated_text_joins_blocks() {
        let response = ConverseResponse::new(json!({
            "output": {"message": {"content": [{"text": "Hello, "}, {"image": {}}, {"text": "world"}]}}
        }));
        assert_eq!(response.generated_text().as_deref(), Some("Hello, world"));
    }

    #[test]
    fn test_generated_text_absent() {
        assert_eq!(ConverseResponse::default().generated_text(), None);
        assert_eq!(
            ConverseResponse::new(json!({"output": {"message": {"content": []}}}))
                .generated_text(),
            None
        );
        assert_eq!(
            ConverseResponse::new(json!({"output": {"message": {"content": [{"text": ""}]}}}))
                .generated_text(),
            None
        );
        assert_eq!(
            ConverseResponse::new(json!({"output": {"message": "oops"}})).generated_text(),
            None
        );
    }

    #[test]
    fn test_retrieve_request_shape() {
        let request = RetrieveRequest::new(
            "what is insulin",
            KnowledgeBaseTarget::new("KB123", "arn:model"),
        );

        assert_eq!(request.text(), "what is insulin");
        assert_eq!(request.target().knowledge_base_id, "KB123");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "input": {"text": "what is insulin"},
                "retrieveAndGenerateConfiguration": {
                    "knowledgeBaseConfiguration": {
                        "knowledgeBaseId": "KB123",
                        "modelArn": "arn:model"
                    },
                    "type": "KNOWLEDGE_BASE"
                }
            })
        );
    }
}
