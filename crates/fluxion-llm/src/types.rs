//! Request and response types for the completion client.

use std::time::Duration;

use async_trait::async_trait;
use fluxion_utils::LlmError;
use serde_json::Value;

/// Message role in a completion conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }
}

/// Strict JSON schema the provider must conform to.
///
/// `name` identifies the schema to the provider; `schema` is the JSON
/// Schema document with `additionalProperties: false` and every top-level
/// key required.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    pub name: String,
    pub schema: Value,
}

impl ResponseSchema {
    pub fn new(name: impl Into<String>, schema: Value) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

/// A single completion request: ordered message turns plus the schema
/// constraint on the response.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    /// Model override; empty means use the backend default.
    pub model: String,
    pub timeout: Duration,
    pub schema: ResponseSchema,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>, schema: ResponseSchema) -> Self {
        Self {
            messages,
            model: String::new(),
            timeout: Duration::from_secs(120),
            schema,
        }
    }
}

/// Raw completion outcome: the first choice's content plus provenance.
#[derive(Debug, Clone)]
pub struct CompletionResult {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub tokens_input: Option<u64>,
    pub tokens_output: Option<u64>,
}

impl CompletionResult {
    pub fn new(
        content: impl Into<String>,
        provider: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            provider: provider.into(),
            model: model.into(),
            tokens_input: None,
            tokens_output: None,
        }
    }
}

/// Backend abstraction over completion providers.
///
/// One implementation per provider; the rest of the crate only sees this
/// trait, which keeps tests on a mock backend instead of the network.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    async fn invoke(&self, req: CompletionRequest) -> Result<CompletionResult, LlmError>;
}
