//! Structured completion client for fluxion
//!
//! Talks to the completion provider over an OpenAI-compatible chat API
//! with a strict JSON-schema response constraint, and decodes responses
//! into typed results. The [`LlmBackend`] trait is the seam: production
//! code wires in [`OpenAiBackend`], tests wire in mocks.

use std::sync::Arc;
use std::time::Duration;

use fluxion_config::Config;
use fluxion_utils::LlmError;

mod client;
pub(crate) mod http_client;
mod openai_backend;
mod types;

pub use client::StructuredClient;
pub use openai_backend::OpenAiBackend;
pub use types::{CompletionRequest, CompletionResult, LlmBackend, Message, ResponseSchema, Role};

/// Build a [`StructuredClient`] from configuration.
///
/// # Errors
///
/// Returns `LlmError::Misconfiguration` if the API key environment
/// variable is unset or the HTTP client cannot be constructed.
pub fn client_from_config(config: &Config) -> Result<StructuredClient, LlmError> {
    let backend: Arc<dyn LlmBackend> = Arc::new(OpenAiBackend::new_from_config(config)?);
    let timeout = Duration::from_secs(config.llm.timeout_seconds.unwrap_or(120));
    Ok(StructuredClient::new(backend, timeout))
}
