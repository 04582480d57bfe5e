//! Citations command handler.

use super::read_input;
use clap::Args;
use kbchat_answer::{extract_pdf_filenames, extract_titles, SourceList};
use kbchat_core::AppResult;
use kbchat_llm::RagResponse;
use std::path::PathBuf;

/// List the sources cited by a retrieval reply
#[derive(Args, Debug)]
pub struct CitationsCommand {
    /// Retrieval reply as JSON (default: stdin)
    pub file: Option<PathBuf>,

    /// List document titles instead of PDF file names
    #[arg(long)]
    pub titles: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl CitationsCommand {
    /// Execute the citations command.
    pub async fn execute(&self) -> AppResult<()> {
        tracing::info!("Executing citations command");
        tracing::debug!("Citations command options: {:?}", self);

        let input = read_input(self.file.as_deref()).await?;
        let sources = self.extract(&input)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&sources)?);
        } else {
            for name in &sources {
                println!("{}", name);
            }
        }

        Ok(())
    }

    fn extract(&self, input: &str) -> AppResult<SourceList> {
        let response: RagResponse = serde_json::from_str(input)?;
        if self.titles {
            Ok(extract_titles(&response))
        } else {
            Ok(extract_pdf_filenames(&response))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPLY: &str = r#"{"citations": [{"retrievedReferences": [
        {"metadata": {"x-amz-bedrock-kb-document-title": "Handbook"},
         "location": {"s3Location": {"uri": "s3://kb/handbook.pdf"}}},
        {"location": {"webLocation": {"url": "https://example.org/faq.html"}}}
    ]}]}"#;

    fn command(titles: bool) -> CitationsCommand {
        CitationsCommand {
            file: None,
            titles,
            json: false,
        }
    }

    #[test]
    fn test_extract_filenames() {
        let sources = command(false).extract(REPLY).unwrap();
        assert_eq!(sources.as_slice(), ["handbook.pdf"]);
    }

    #[test]
    fn test_extract_titles() {
        let sources = command(true).extract(REPLY).unwrap();
        assert_eq!(sources.as_slice(), ["Handbook", "faq.html"]);
    }

    #[test]
    fn test_null_reply_has_no_citations() {
        assert!(command(false).extract("null").unwrap().is_empty());
    }
}
