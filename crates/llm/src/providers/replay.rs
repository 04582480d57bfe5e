//! Replay provider.
//!
//! Serves a recorded service reply instead of calling the service. The same
//! recording answers every request, which makes the provider suitable for
//! offline runs of the CLI and for tests.

use crate::client::{
    ConverseRequest, ConverseResponse, GenerativeClient, RetrievalClient, RetrieveRequest,
};
use crate::types::RagResponse;
use kbchat_core::{AppError, AppResult};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
enum Recording {
    File(PathBuf),
    Loaded(Value),
}

/// Client that answers from a recorded JSON reply.
#[derive(Debug, Clone)]
pub struct ReplayClient {
    recording: Recording,
}

impl ReplayClient {
    /// Replay the JSON document stored at `path`, read on every request.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            recording: Recording::File(path.as_ref().to_path_buf()),
        }
    }

    /// Replay an already parsed JSON document.
    pub fn from_value(value: Value) -> Self {
        Self {
            recording: Recording::Loaded(value),
        }
    }

    /// Parse `json` once and replay it.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(Self::from_value(serde_json::from_str(json)?))
    }

    async fn load(&self) -> AppResult<Value> {
        match &self.recording {
            Recording::Loaded(value) => Ok(value.clone()),
            Recording::File(path) => {
                tracing::debug!("Reading recorded reply from {:?}", path);
                let contents = tokio::fs::read_to_string(path).await?;
                Ok(serde_json::from_str(&contents)?)
            }
        }
    }
}

#[async_trait::async_trait]
impl GenerativeClient for ReplayClient {
    fn provider_name(&self) -> &str {
        "replay"
    }

    async fn converse(&self, request: &ConverseRequest) -> AppResult<ConverseResponse> {
        tracing::info!("Replaying converse reply for model {}", request.model_id);
        tracing::debug!("Request: {:?}", request);

        match self.load().await? {
            reply @ Value::Object(_) => Ok(ConverseResponse::new(reply)),
            other => Err(AppError::Llm(format!(
                "Recorded converse reply is not an object: {}",
                other
            ))),
        }
    }
}

#[async_trait::async_trait]
impl RetrievalClient for ReplayClient {
    fn provider_name(&self) -> &str {
        "replay"
    }

    async fn retrieve_and_generate(&self, request: &RetrieveRequest) -> AppResult<RagResponse> {
        tracing::info!(
            "Replaying retrieval reply for knowledge base {}",
            request.target().knowledge_base_id
        );
        tracing::debug!("Request: {:?}", request);

        Ok(RagResponse::new(self.load().await?))
    }
}
