//! Prompt system for kbchat.
//!
//! Holds the built-in system instruction and renders the text sent to each
//! service with Handlebars.

pub mod builder;
pub mod types;

// Re-export main types
pub use builder::build_prompt;
pub use types::{
    BuiltPrompt, PromptDefinition, INLINE_GUIDANCE_TEMPLATE, QUESTION_TEMPLATE, SYSTEM_PROMPT,
};
