//! Prompt builder for rendering templates.

use crate::types::{BuiltPrompt, PromptDefinition};
use handlebars::Handlebars;
use kbchat_core::{AppError, AppResult};
use std::collections::HashMap;

/// Build a prompt from a definition and the user's question.
///
/// # Example
/// ```
/// use kbchat_prompt::{build_prompt, PromptDefinition};
///
/// let built = build_prompt(&PromptDefinition::general(None), "What is insulin?").unwrap();
/// assert_eq!(built.user, "What is insulin?");
/// ```
pub fn build_prompt(definition: &PromptDefinition, question: &str) -> AppResult<BuiltPrompt> {
    tracing::debug!("Building prompt: {}", definition.id);

    let mut variables = HashMap::new();
    variables.insert("question", question);
    variables.insert("system", definition.system.as_str());

    let user = render_template(&definition.template, &variables)?;

    Ok(BuiltPrompt {
        system: definition.system.clone(),
        user,
        source_prompt_id: definition.id.clone(),
    })
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &HashMap<&str, &str>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Plain text, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    handlebars
        .render("prompt", variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))
}
