//! fluxion - generate and debug CI/CD pipeline configurations
//!
//! fluxion is a CLI tool that forwards pipeline descriptions (or a
//! failing pipeline plus its error logs) to an LLM completion endpoint
//! constrained by strict JSON schemas, and writes or prints the
//! structured result.
//!
//! All logic lives in the workspace crates; this crate is the command
//! surface that wires them together:
//!
//! - `fluxion-utils`: errors, exit codes, file I/O, logging
//! - `fluxion-config`: TOML configuration with discovery and precedence
//! - `fluxion-context`: heuristic project-type detection
//! - `fluxion-prompt`: system prompts, user-prompt templating, schemas
//! - `fluxion-llm`: schema-constrained completion client

pub mod cli;

pub use fluxion_config::{CliArgs, Config};
pub use fluxion_utils::{ExitCode, FluxionError};
