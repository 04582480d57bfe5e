//! Chat command handler.

use super::{print_answer, replay_client};
use clap::Args;
use kbchat_answer::{chat, ChatMessage};
use kbchat_core::{config::AppConfig, AppResult};
use std::path::PathBuf;

/// Answer a chat message with the general model or the knowledge base
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// The chat message
    pub message: String,

    /// Recorded reply of the selected service (`-` for stdin)
    #[arg(short, long)]
    pub reply: PathBuf,

    /// Answer from the knowledge base instead of the general model
    #[arg(short, long)]
    pub knowledge_base: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing chat command");
        tracing::debug!("Chat command options: {:?}", self);

        let message = ChatMessage::new(self.message.as_str(), self.knowledge_base);

        // One recording serves whichever service the message selects
        let client = replay_client(&self.reply).await?;
        let answer = chat(&message, &client, &client, config).await?;

        print_answer(&answer, self.json)
    }
}
