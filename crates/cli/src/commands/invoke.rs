//! Invoke command handler.
//!
//! Answers with the general model from a recorded converse reply.

use super::{print_answer, replay_client};
use clap::Args;
use kbchat_answer::answer_general;
use kbchat_core::{config::AppConfig, AppResult};
use std::path::PathBuf;

/// Answer a question with the general model
#[derive(Args, Debug)]
pub struct InvokeCommand {
    /// The question to ask
    pub text: String,

    /// Recorded converse reply (`-` for stdin)
    #[arg(short, long)]
    pub reply: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl InvokeCommand {
    /// Execute the invoke command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing invoke command");
        tracing::debug!("Invoke command options: {:?}", self);

        let client = replay_client(&self.reply).await?;
        let answer = answer_general(&client, config, &self.text).await?;

        print_answer(&answer, self.json)
    }
}
