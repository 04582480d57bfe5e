//! kbchat CLI
//!
//! Main entry point for the kbchat command-line tool.
//! Answers questions from recorded service replies and formats retrieval
//! answers with their cited sources.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CitationsCommand, ChatCommand, FormatCommand, InvokeCommand, QueryCommand};
use kbchat_core::{config::AppConfig, logging, AppResult, LogFormat};
use std::path::PathBuf;

/// kbchat - knowledge base chat front end
#[derive(Parser, Debug)]
#[command(name = "kbchat")]
#[command(about = "Answer questions from a generative model or a knowledge base", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to workspace directory (default: current directory)
    #[arg(short, long, global = true, env = "KBCHAT_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, global = true, env = "KBCHAT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Log line format (text, json)
    #[arg(long, global = true, env = "KBCHAT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer with the general model
    Invoke(InvokeCommand),

    /// Answer from the knowledge base, citing sources
    Query(QueryCommand),

    /// Answer a chat message with the selected service
    Chat(ChatCommand),

    /// Format a retrieval reply or plain answer text
    Format(FormatCommand),

    /// List the sources cited by a retrieval reply
    Citations(CitationsCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Pick up MODEL_ID and friends from a local .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load_with(cli.workspace, cli.config)?.with_overrides(
        None,
        cli.log_level,
        cli.log_format,
        cli.verbose,
        cli.no_color,
    );

    logging::init_logging(
        config.log_level.as_deref(),
        config.no_color,
        config.log_format,
    )?;

    tracing::info!("kbchat starting");
    tracing::debug!("Workspace: {:?}", config.workspace);
    tracing::debug!("Region: {}", config.region);

    let command_name = match &cli.command {
        Commands::Invoke(_) => "invoke",
        Commands::Query(_) => "query",
        Commands::Chat(_) => "chat",
        Commands::Format(_) => "format",
        Commands::Citations(_) => "citations",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    let result = match cli.command {
        Commands::Invoke(cmd) => cmd.execute(&config).await,
        Commands::Query(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
        Commands::Format(cmd) => cmd.execute().await,
        Commands::Citations(cmd) => cmd.execute().await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
