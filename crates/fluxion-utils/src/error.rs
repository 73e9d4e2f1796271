//! Error types for fluxion.
//!
//! `FluxionError` is the library-level error type returned by fluxion
//! operations. Every error terminates the current command after being
//! printed to standard error; there is no retry or partial-success state.
//! Library code returns `FluxionError` and does NOT call
//! `std::process::exit()`; the CLI maps errors to exit codes.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Library-level error type.
///
/// # Error Categories
///
/// | Category | Description |
/// |----------|-------------|
/// | `Config` | Configuration file or CLI argument errors |
/// | `Input` | Empty or missing required user input |
/// | `FileRead`/`FileWrite` | Filesystem failures, wrapped with the path |
/// | `Llm` | Completion provider failures (transport, auth, decode) |
#[derive(Error, Debug)]
pub enum FluxionError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Completion provider error: {0}")]
    Llm(#[from] LlmError),
}

impl FluxionError {
    /// Map this error to a CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::CLI_ARGS,
            Self::Input(_) => ExitCode::INPUT,
            Self::FileRead { .. } | Self::FileWrite { .. } | Self::Io(_) => ExitCode::IO,
            Self::Llm(_) => ExitCode::PROVIDER_FAILURE,
        }
    }
}

/// Configuration-related errors.
///
/// A missing config file is not an error; only a file that exists but
/// cannot be read or parsed is.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),
}

/// Errors from the structured completion client.
///
/// Transport, auth, quota, and outage errors come from the HTTP layer;
/// `Decode` means the provider responded but the content did not conform
/// to the requested schema. None of these are retried at the application
/// level; a single failed call aborts the operation.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Transport-level failure (connectivity, malformed response envelope)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Provider authentication failure (401, 403, missing API key)
    #[error("Provider authentication error: {0}")]
    ProviderAuth(String),

    /// Provider quota/rate limit exceeded (429)
    #[error("Provider quota exceeded: {0}")]
    ProviderQuota(String),

    /// Provider service outage (5xx errors, after transport retries)
    #[error("Provider outage: {0}")]
    ProviderOutage(String),

    /// Invocation timed out
    #[error("Timeout after {duration:?}")]
    Timeout { duration: Duration },

    /// Response content did not decode against the requested schema.
    /// Carries the raw content for diagnosis.
    #[error("Failed to decode provider response: {reason}")]
    Decode { reason: String, raw: String },

    /// Configuration error (missing API key, bad client construction)
    #[error("Misconfiguration: {0}")]
    Misconfiguration(String),
}
