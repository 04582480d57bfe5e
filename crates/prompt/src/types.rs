//! Prompt types for kbchat.

use serde::{Deserialize, Serialize};

/// Built-in system instruction for every answer.
pub const SYSTEM_PROMPT: &str = "You are a medical knowledge assistant.\n\
Format answers as follows:\n\
- When needing to list out the retrieved contents, use bullet points, one sentence per line.\n\
- Each point must be concise and on its own line.\n\
- Always cite the source with document name.";

/// Template that sends the question on its own.
pub const QUESTION_TEMPLATE: &str = "{{question}}";

/// Template that carries the system instruction inline with the question,
/// for services that take a single text input.
pub const INLINE_GUIDANCE_TEMPLATE: &str = "{{system}}\n\nUser: {{question}}";

/// A prompt definition: a system instruction plus a Handlebars template for
/// the user turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptDefinition {
    /// Unique prompt identifier
    pub id: String,

    /// System instruction
    pub system: String,

    /// Template string with Handlebars syntax. Variables: `question`, `system`.
    pub template: String,
}

impl PromptDefinition {
    /// Prompt for general answers: the system instruction travels separately.
    pub fn general(system: Option<&str>) -> Self {
        Self {
            id: "kbchat.general".to_string(),
            system: system.unwrap_or(SYSTEM_PROMPT).to_string(),
            template: QUESTION_TEMPLATE.to_string(),
        }
    }

    /// Prompt for knowledge base answers.
    ///
    /// With `inline_guidance` the system instruction is folded into the text
    /// sent to the service.
    pub fn knowledge_base(system: Option<&str>, inline_guidance: bool) -> Self {
        let template = if inline_guidance {
            INLINE_GUIDANCE_TEMPLATE
        } else {
            QUESTION_TEMPLATE
        };

        Self {
            id: "kbchat.knowledge_base".to_string(),
            system: system.unwrap_or(SYSTEM_PROMPT).to_string(),
            template: template.to_string(),
        }
    }
}

/// A fully built prompt ready to send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuiltPrompt {
    /// System message
    pub system: String,

    /// User message
    pub user: String,

    /// Source prompt ID
    #[serde(rename = "sourcePromptId")]
    pub source_prompt_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_content() {
        assert!(SYSTEM_PROMPT.starts_with("You are a medical knowledge assistant.\n"));
        assert!(SYSTEM_PROMPT.contains("\n- Each point must be concise and on its own line.\n"));
        assert!(SYSTEM_PROMPT.ends_with("Always cite the source with document name."));
    }

    #[test]
    fn test_knowledge_base_templates() {
        assert_eq!(
            PromptDefinition::knowledge_base(None, false).template,
            QUESTION_TEMPLATE
        );
        assert_eq!(
            PromptDefinition::knowledge_base(None, true).template,
            INLINE_GUIDANCE_TEMPLATE
        );
    }

    #[test]
    fn test_system_override() {
        let def = PromptDefinition::general(Some("Be terse."));
        assert_eq!(def.system, "Be terse.");
        assert_eq!(PromptDefinition::general(None).system, SYSTEM_PROMPT);
    }
}
