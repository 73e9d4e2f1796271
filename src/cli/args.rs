//! CLI argument definitions and parsing structures
//!
//! This module defines the command-line interface structure using clap,
//! including the main `Cli` struct and the subcommand enum.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fluxion - generate and debug CI/CD pipelines with LLM assistance
#[derive(Parser)]
#[command(name = "fluxion")]
#[command(about = "A CLI tool that generates and debugs CI/CD pipeline configurations")]
#[command(long_about = r#"
fluxion generates GitHub Actions workflow configurations from a plain-text
description, and diagnoses failing workflows from their configuration and
error logs. Responses come from an LLM completion endpoint constrained by
strict JSON schemas, so output is always structured.

EXAMPLES:
  # Generate a workflow interactively
  fluxion generate

  # Generate from a description file, choosing the output path
  fluxion generate --prompt_file pipeline.txt --output .github/workflows/ci.yml

  # Debug a failing workflow
  fluxion debug --file .github/workflows/ci.yml --logs failure.log

  # Use a different model for one invocation
  fluxion debug -f ci.yml -l failure.log --model gpt-4o-mini

CONFIGURATION:
  Configuration is loaded with precedence: CLI flags > config file > defaults
  Config file is discovered by searching upward from CWD for .fluxion/config.toml
  Use --config to specify an explicit config file path

CREDENTIALS:
  The provider API key is read from the environment variable named by
  api_key_env in [llm] (default: OPENAI_API_KEY). Keys never live in
  configuration files or flags.
"#)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (overrides discovery)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model to use for provider calls
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate CI/CD pipeline/workflow configuration
    Generate {
        /// Output path for the generated configuration file
        #[arg(short, long)]
        output: Option<String>,

        /// Path to a file containing the pipeline description prompt
        #[arg(short = 'p', long = "prompt_file")]
        prompt_file: Option<String>,
    },

    /// Debug your pipeline configuration
    Debug {
        /// Path to your pipeline configuration file
        #[arg(short, long)]
        file: Option<String>,

        /// Path to the error logs from the failed run
        #[arg(short, long)]
        logs: Option<String>,
    },
}
