//! Answer flows.
//!
//! Each flow validates the configuration it needs, calls one service
//! through the client handed in by the caller, and formats the reply.

use crate::citations::extract_pdf_filenames;
use crate::format::{finalize, FormattedAnswer};
use crate::sources::SourceList;
use crate::types::{Answer, ChatMessage};
use kbchat_core::{AppConfig, AppError, AppResult};
use kbchat_llm::{
    ConverseRequest, GenerativeClient, KnowledgeBaseTarget, RagResponse, RetrievalClient,
    RetrieveRequest,
};
use kbchat_prompt::{build_prompt, PromptDefinition};

/// Answer `text` with the general model.
///
/// # Errors
/// - `AppError::Config` when no model id is configured
/// - `AppError::NoContent` when the model replies without text
/// - any error of the client itself
pub async fn answer_general(
    client: &dyn GenerativeClient,
    config: &AppConfig,
    text: &str,
) -> AppResult<Answer> {
    let model_id = config.require_model_id()?;

    let prompt = build_prompt(
        &PromptDefinition::general(config.system_prompt.as_deref()),
        text,
    )?;

    let request = ConverseRequest::new(model_id, prompt.user)
        .with_system(prompt.system)
        .with_max_tokens(config.max_tokens)
        .with_temperature(config.temperature);

    tracing::info!(
        "Asking model {} via {}",
        model_id,
        client.provider_name()
    );

    let response = client.converse(&request).await?;
    let generated = response.generated_text().ok_or_else(|| {
        tracing::error!("Model did not return any content.");
        AppError::NoContent
    })?;

    Ok(Answer::general(finalize(
        generated.as_str(),
        &SourceList::new(),
    )))
}

/// Answer `text` from the configured knowledge base.
///
/// # Errors
/// - `AppError::Config` when the knowledge base id or model reference is missing
/// - any error of the client itself
pub async fn answer_with_knowledge_base(
    client: &dyn RetrievalClient,
    config: &AppConfig,
    text: &str,
) -> AppResult<Answer> {
    let (knowledge_base_id, model_arn) = config.require_knowledge_base()?;

    let prompt = build_prompt(
        &PromptDefinition::knowledge_base(config.system_prompt.as_deref(), config.inline_guidance),
        text,
    )?;

    let request = RetrieveRequest::new(
        prompt.user,
        KnowledgeBaseTarget::new(knowledge_base_id, model_arn),
    );

    tracing::info!(
        "Querying knowledge base {} via {}",
        knowledge_base_id,
        client.provider_name()
    );

    let response = client.retrieve_and_generate(&request).await?;
    Ok(Answer::knowledge_base(format_rag_response(&response)))
}

/// Answer a chat turn with the service the user selected.
pub async fn chat(
    message: &ChatMessage,
    generative: &dyn GenerativeClient,
    retrieval: &dyn RetrievalClient,
    config: &AppConfig,
) -> AppResult<Answer> {
    if message.use_knowledge_base {
        answer_with_knowledge_base(retrieval, config, &message.message).await
    } else {
        answer_general(generative, config, &message.message).await
    }
}

/// Format a retrieval reply: its answer text followed by the cited PDFs.
///
/// A reply without `output.text` formats as an empty answer.
pub fn format_rag_response(response: &RagResponse) -> FormattedAnswer {
    let body = response.output_text();
    if body.is_none() {
        tracing::warn!("Retrieval reply has no output text");
    }

    let pdfs = extract_pdf_filenames(response);
    tracing::debug!("Citing {} PDF sources", pdfs.len());

    finalize(body, &pdfs)
}
