//! Service integration crate for kbchat.
//!
//! Defines the two external collaborators as traits:
//! - [`GenerativeClient`]: answers a question under a system instruction
//! - [`RetrievalClient`]: answers a question from a knowledge base, with citations
//!
//! Callers construct a client and pass it to the answer flows explicitly.
//!
//! # Example
//! ```no_run
//! use kbchat_llm::{ConverseRequest, GenerativeClient, providers::ReplayClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ReplayClient::from_path("reply.json");
//! let request = ConverseRequest::new("amazon.nova-pro-v1:0", "Hello, world!");
//! let response = client.converse(&request).await?;
//! println!("{:?}", response.generated_text());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::{
    ContentBlock, ConverseRequest, ConverseResponse, GenerativeClient, Message, RetrieveRequest,
    RetrievalClient,
};
pub use providers::ReplayClient;
pub use types::{InferenceConfig, KnowledgeBaseTarget, RagResponse};
