//! Answer types.

use crate::format::FormattedAnswer;
use serde::{Deserialize, Serialize};

/// Which service produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    General,
    KnowledgeBase,
}

/// A formatted answer and where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub response: FormattedAnswer,

    #[serde(rename = "type")]
    pub kind: AnswerKind,
}

impl Answer {
    pub fn general(response: FormattedAnswer) -> Self {
        Self {
            response,
            kind: AnswerKind::General,
        }
    }

    pub fn knowledge_base(response: FormattedAnswer) -> Self {
        Self {
            response,
            kind: AnswerKind::KnowledgeBase,
        }
    }
}

/// A chat turn from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message: String,

    /// Answer from the knowledge base instead of the general model
    #[serde(default)]
    pub use_knowledge_base: bool,
}

impl ChatMessage {
    pub fn new(message: impl Into<String>, use_knowledge_base: bool) -> Self {
        Self {
            message: message.into(),
            use_knowledge_base,
        }
    }
}
