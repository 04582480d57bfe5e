//! Command handlers for the kbchat CLI.
//!
//! Recorded replies and inputs are read from a file, or from stdin when the
//! path is `-` or omitted.

pub mod chat;
pub mod citations;
pub mod format;
pub mod invoke;
pub mod query;

pub use chat::ChatCommand;
pub use citations::CitationsCommand;
pub use format::FormatCommand;
pub use invoke::InvokeCommand;
pub use query::QueryCommand;

use kbchat_answer::Answer;
use kbchat_core::AppResult;
use kbchat_llm::ReplayClient;
use std::path::Path;
use tokio::io::AsyncReadExt;

const STDIN_PATH: &str = "-";

fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new(STDIN_PATH))
}

/// Read the whole input from `path`, or stdin.
pub(crate) async fn read_input(path: Option<&Path>) -> AppResult<String> {
    match path {
        Some(path) if !is_stdin(Some(path)) => {
            tracing::debug!("Reading input from {:?}", path);
            Ok(tokio::fs::read_to_string(path).await?)
        }
        _ => {
            tracing::debug!("Reading input from stdin");
            let mut contents = String::new();
            tokio::io::stdin().read_to_string(&mut contents).await?;
            Ok(contents)
        }
    }
}

/// Client replaying the recorded reply at `path`.
pub(crate) async fn replay_client(path: &Path) -> AppResult<ReplayClient> {
    if is_stdin(Some(path)) {
        ReplayClient::from_json(&read_input(None).await?)
    } else {
        Ok(ReplayClient::from_path(path))
    }
}

/// Print an answer to stdout, as text or as a JSON envelope.
pub(crate) fn print_answer(answer: &Answer, json: bool) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(answer)?);
    } else {
        print!("{}", answer.response);
    }
    Ok(())
}
