//! Foundation utilities for fluxion
//!
//! This crate provides the error taxonomy, exit codes, file I/O helpers,
//! and logging initialization shared by the rest of the workspace.

pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod logging;

pub use error::{ConfigError, FluxionError, LlmError};
pub use exit_codes::ExitCode;
