//! Answer assembly for kbchat.
//!
//! Turns raw service replies into user-facing answers:
//! - [`citations`]: source names cited by a retrieval reply
//! - [`format`]: bullet, bold and "Sources:" post-processing
//! - [`pipeline`]: the general, knowledge base and chat flows
//!
//! # Example
//! ```
//! use kbchat_answer::{extract_pdf_filenames, finalize};
//! use kbchat_llm::RagResponse;
//! use serde_json::json;
//!
//! let response = RagResponse::new(json!({
//!     "output": {"text": "Take with food."},
//!     "citations": {"retrievedReferences": [
//!         {"location": {"s3Location": {"uri": "s3://kb/leaflet.pdf"}}}
//!     ]}
//! }));
//!
//! let answer = finalize(response.output_text(), &extract_pdf_filenames(&response));
//! assert_eq!(answer.as_str(), "Take with food.\u{2029}\u{2028}Sources: leaflet.pdf\n");
//! ```

pub mod citations;
pub mod format;
pub mod pipeline;
pub mod sources;
pub mod types;


// Re-export main types
pub use citations::{extract_pdf_filenames, extract_titles};
pub use format::{finalize, normalize_bullets, strip_bold, FormattedAnswer};
pub use pipeline::{answer_general, answer_with_knowledge_base, chat, format_rag_response};
pub use sources::SourceList;
pub use types::{Answer, AnswerKind, ChatMessage};
