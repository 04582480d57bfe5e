//! Query command handler.
//!
//! Answers from the knowledge base using a recorded retrieval reply.

use super::{print_answer, replay_client};
use clap::Args;
use kbchat_answer::answer_with_knowledge_base;
use kbchat_core::{config::AppConfig, AppResult};
use std::path::PathBuf;

/// Answer a question from the knowledge base
#[derive(Args, Debug)]
pub struct QueryCommand {
    /// The question to ask
    pub text: String,

    /// Recorded retrieval reply (`-` for stdin)
    #[arg(short, long)]
    pub reply: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl QueryCommand {
    /// Execute the query command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing query command");
        tracing::debug!("Query command options: {:?}", self);

        let client = replay_client(&self.reply).await?;
        let answer = answer_with_knowledge_base(&client, config, &self.text).await?;

        print_answer(&answer, self.json)
    }
}
