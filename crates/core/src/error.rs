//! Error types for kbchat.
//!
//! One error enum covers every failure class that can reach a caller:
//! configuration, I/O, the two external services, prompt rendering and
//! serialization. Citation parsing never produces an error; malformed
//! citation data is simply omitted.

use thiserror::Error;

/// Unified error type for kbchat.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generative model service errors, including unreadable replies
    #[error("LLM error: {0}")]
    Llm(String),

    /// Retrieval (knowledge base) service errors
    #[error("Retrieval error: {0}")]
    Retrieval(String),

    /// Prompt rendering errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// The model replied without any text
    #[error("Model did not return any content.")]
    NoContent,

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
