//! Configuration management for kbchat.
//!
//! Configuration is merged from, in increasing precedence:
//! - Built-in defaults
//! - A YAML config file (`.kbchat/config.yaml` in the workspace)
//! - Environment variables
//! - Command-line flags
//!
//! The binary also loads a `.env` file before calling [`AppConfig::load`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};
use crate::logging::LogFormat;

/// Default AWS region for both services.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default maximum tokens for generative answers.
pub const DEFAULT_MAX_TOKENS: u32 = 512;

/// Default sampling temperature for generative answers.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .kbchat/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Service region
    pub region: String,

    /// Model identifier for general (non-RAG) answers
    pub model_id: Option<String>,

    /// Knowledge base identifier for RAG answers
    pub knowledge_base_id: Option<String>,

    /// Model reference used by the knowledge base to generate answers
    pub model_arn: Option<String>,

    /// Maximum tokens for general answers
    pub max_tokens: u32,

    /// Sampling temperature for general answers
    pub temperature: f32,

    /// Replacement for the built-in system instruction
    pub system_prompt: Option<String>,

    /// Send the system instruction inline with knowledge base questions
    pub inline_guidance: bool,

    /// Log level override
    pub log_level: Option<String>,

    /// Log line format
    pub log_format: LogFormat,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    region: Option<String>,
    generation: Option<GenerationConfig>,
    knowledge_base: Option<KnowledgeBaseSection>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    model_id: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    system_prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KnowledgeBaseSection {
    id: Option<String>,
    model_arn: Option<String>,
    #[serde(default)]
    inline_guidance: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
    format: Option<LogFormat>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            region: DEFAULT_REGION.to_string(),
            model_id: None,
            knowledge_base_id: None,
            model_arn: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            system_prompt: None,
            inline_guidance: false,
            log_level: None,
            log_format: LogFormat::default(),
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `KBCHAT_WORKSPACE`: Override workspace path
    /// - `KBCHAT_CONFIG`: Path to config file
    /// - `AWS_REGION`: Service region
    /// - `MODEL_ID`: Model for general answers
    /// - `KNOWLEDGE_BASE_ID`: Knowledge base for RAG answers
    /// - `MODEL_ARN`: Model used by the knowledge base
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use kbchat_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Region: {}", config.region);
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_with(None, None)
    }

    /// Load configuration with an explicit workspace and config file.
    ///
    /// `None` falls back to `KBCHAT_WORKSPACE` and `KBCHAT_CONFIG`.
    pub fn load_with(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(workspace) = workspace.or_else(|| env_path("KBCHAT_WORKSPACE")) {
            config.workspace = workspace;
        }

        config.config_file = config_file.or_else(|| env_path("KBCHAT_CONFIG"));

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = config
            .config_file
            .clone()
            .unwrap_or_else(|| config.kbchat_dir().join("config.yaml"));

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        } else if config.config_file.is_some() {
            return Err(AppError::Config(format!(
                "Config file not found: {:?}",
                config_path
            )));
        }

        // Environment variables override YAML config
        if let Ok(region) = std::env::var("AWS_REGION") {
            config.region = region;
        }
        if let Ok(model_id) = std::env::var("MODEL_ID") {
            config.model_id = Some(model_id);
        }
        if let Ok(kb_id) = std::env::var("KNOWLEDGE_BASE_ID") {
            config.knowledge_base_id = Some(kb_id);
        }
        if let Ok(model_arn) = std::env::var("MODEL_ARN") {
            config.model_arn = Some(model_arn);
        }
        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }
        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;
        self.merge_yaml_str(&contents)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {:?}: {}", path, e)))
    }

    fn merge_yaml_str(&self, contents: &str) -> AppResult<Self> {
        let mut result = self.clone();
        if contents.trim().is_empty() {
            return Ok(result);
        }

        let config_file: ConfigFile = serde_yaml::from_str(contents)?;

        if let Some(region) = config_file.region {
            result.region = region;
        }

        if let Some(generation) = config_file.generation {
            if generation.model_id.is_some() {
                result.model_id = generation.model_id;
            }
            if let Some(max_tokens) = generation.max_tokens {
                result.max_tokens = max_tokens;
            }
            if let Some(temperature) = generation.temperature {
                result.temperature = temperature;
            }
            if generation.system_prompt.is_some() {
                result.system_prompt = generation.system_prompt;
            }
        }

        if let Some(kb) = config_file.knowledge_base {
            if kb.id.is_some() {
                result.knowledge_base_id = kb.id;
            }
            if kb.model_arn.is_some() {
                result.model_arn = kb.model_arn;
            }
            result.inline_guidance = kb.inline_guidance;
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
            if let Some(format) = logging.format {
                result.log_format = format;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    pub fn with_overrides(
        mut self,
        workspace: Option<PathBuf>,
        log_level: Option<String>,
        log_format: Option<LogFormat>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(workspace) = workspace {
            self.workspace = workspace;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if let Some(log_format) = log_format {
            self.log_format = log_format;
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the .kbchat directory.
    pub fn kbchat_dir(&self) -> PathBuf {
        self.workspace.join(".kbchat")
    }

    /// Validate settings shared by every command.
    pub fn validate(&self) -> AppResult<()> {
        if self.region.trim().is_empty() {
            return Err(AppError::Config(
                "AWS_REGION environment variable is missing.".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(AppError::Config(format!(
                "Temperature must be between 0.0 and 1.0, got {}",
                self.temperature
            )));
        }

        Ok(())
    }

    /// Model identifier for general answers, if configured.
    pub fn require_model_id(&self) -> AppResult<&str> {
        non_empty(self.model_id.as_deref())
            .ok_or_else(|| AppError::Config("MODEL_ID is not configured.".to_string()))
    }

    /// Knowledge base identifier and model reference, if both are configured.
    pub fn require_knowledge_base(&self) -> AppResult<(&str, &str)> {
        match (
            non_empty(self.knowledge_base_id.as_deref()),
            non_empty(self.model_arn.as_deref()),
        ) {
            (Some(kb_id), Some(model_arn)) => Ok((kb_id, model_arn)),
            _ => Err(AppError::Config(
                "Knowledge base configuration is missing.".to_string(),
            )),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).map(PathBuf::from)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
