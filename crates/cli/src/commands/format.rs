//! Format command handler.
//!
//! Finalizes a recorded retrieval reply, or plain answer text, without
//! calling any service.

use super::read_input;
use clap::Args;
use kbchat_answer::{extract_pdf_filenames, finalize, FormattedAnswer, SourceList};
use kbchat_core::AppResult;
use kbchat_llm::RagResponse;
use std::path::PathBuf;

/// Format an answer for display
#[derive(Args, Debug)]
pub struct FormatCommand {
    /// Retrieval reply as JSON, or answer text with --plain (default: stdin)
    pub file: Option<PathBuf>,

    /// Treat the input as plain answer text
    #[arg(long)]
    pub plain: bool,

    /// Additional source name to cite (repeatable)
    #[arg(short, long = "source", value_name = "NAME")]
    pub sources: Vec<String>,
}

impl FormatCommand {
    /// Execute the format command.
    pub async fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing format command");
        tracing::debug!("Format command options: {:?}", self);

        let input = read_input(self.file.as_deref()).await?;
        let answer = self.format(&input)?;

        print!("{}", answer);
        Ok(())
    }

    fn format(&self, input: &str) -> AppResult<FormattedAnswer> {
        if self.plain {
            let sources: SourceList = self.sources.iter().map(String::as_str).collect();
            return Ok(finalize(input, &sources));
        }

        let response: RagResponse = serde_json::from_str(input)?;
        let mut sources = extract_pdf_filenames(&response);
        sources.extend(self.sources.iter().map(String::as_str));

        Ok(finalize(response.output_text(), &sources))
    }
}
