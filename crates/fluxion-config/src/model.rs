use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for fluxion operations.
///
/// # Configuration File Format
///
/// ```toml
/// [defaults]
/// output_path = "./generated_pipeline.yml"
/// verbose = false
///
/// [llm]
/// api_key_env = "OPENAI_API_KEY"
/// model = "gpt-4o"
/// max_tokens = 4096
/// temperature = 0.2
/// timeout_seconds = 120
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Default values for command behavior.
    pub defaults: Defaults,
    /// Completion provider configuration.
    pub llm: LlmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            llm: LlmConfig::default(),
        }
    }
}

/// Default command behavior
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Defaults {
    /// Output path for generated pipeline configurations.
    pub output_path: Option<String>,
    pub verbose: Option<bool>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output_path: Some("./generated_pipeline.yml".to_string()),
            verbose: Some(false),
        }
    }
}

/// Completion provider configuration
///
/// The API key itself never appears in configuration; `api_key_env` names
/// the environment variable it is read from.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_key_env: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
    pub timeout_seconds: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key_env: Some("OPENAI_API_KEY".to_string()),
            base_url: None,
            model: Some("gpt-4o".to_string()),
            max_tokens: Some(4096),
            temperature: Some(0.2),
            timeout_seconds: Some(120),
        }
    }
}

/// CLI argument overrides applied on top of file/default configuration.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Explicit config file path (overrides discovery)
    pub config_path: Option<PathBuf>,
    /// Model override for provider calls
    pub model: Option<String>,
    /// Verbose output
    pub verbose: Option<bool>,
}
