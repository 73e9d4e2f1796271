//! Schema-typed wrapper over a completion backend.

use std::sync::Arc;
use std::time::Duration;

use fluxion_utils::LlmError;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{CompletionRequest, LlmBackend, Message, ResponseSchema};

/// Executes completion requests and decodes the response content into a
/// caller-chosen type.
///
/// The backend guarantees schema conformance as far as the provider
/// honors `strict`; decoding here is the last line of defense, and a
/// failure surfaces the raw content for diagnosis. A failed call is
/// never retried at this level.
#[derive(Clone)]
pub struct StructuredClient {
    backend: Arc<dyn LlmBackend>,
    timeout: Duration,
}

impl StructuredClient {
    pub fn new(backend: Arc<dyn LlmBackend>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Send one system/user prompt pair constrained by `schema` and decode
    /// the response as `T`.
    ///
    /// # Errors
    ///
    /// Propagates backend errors unchanged; a response that does not
    /// decode as `T` becomes `LlmError::Decode` carrying the raw content.
    pub async fn complete_as<T: DeserializeOwned>(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: ResponseSchema,
    ) -> Result<T, LlmError> {
        let mut req = CompletionRequest::new(
            vec![Message::system(system_prompt), Message::user(user_prompt)],
            schema,
        );
        req.timeout = self.timeout;

        let result = self.backend.invoke(req).await?;

        debug!(
            provider = %result.provider,
            model = %result.model,
            content_len = result.content.len(),
            "Decoding completion response"
        );

        serde_json::from_str(&result.content).map_err(|e| LlmError::Decode {
            reason: e.to_string(),
            raw: result.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompletionResult;
    use async_trait::async_trait;
    use serde::Deserialize;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Deserialize)]
    struct DebugShape {
        root_cause: String,
        fix: String,
        explanation: String,
    }

    /// Returns a canned response and counts invocations.
    struct MockBackend {
        response: String,
        calls: AtomicUsize,
    }

    impl MockBackend {
        fn new(response: &str) -> Self {
            Self {
                response: response.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LlmBackend for MockBackend {
        async fn invoke(&self, _req: CompletionRequest) -> Result<CompletionResult, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(CompletionResult::new(
                self.response.clone(),
                "mock",
                "mock-model",
            ))
        }
    }

    fn schema() -> ResponseSchema {
        ResponseSchema::new("debug_result", serde_json::json!({"type": "object"}))
    }

    #[tokio::test]
    async fn test_complete_as_decodes_conforming_response() {
        let backend = Arc::new(MockBackend::new(
            r#"{"root_cause": "bad cache key", "fix": "pin the key", "explanation": "the key changed"}"#,
        ));
        let client = StructuredClient::new(backend.clone(), Duration::from_secs(5));

        let result: DebugShape = client
            .complete_as("system", "user", schema())
            .await
            .unwrap();

        assert_eq!(result.root_cause, "bad cache key");
        assert_eq!(result.fix, "pin the key");
        assert_eq!(result.explanation, "the key changed");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_required_field_is_decode_error() {
        let backend = Arc::new(MockBackend::new(r#"{"root_cause": "x", "fix": "y"}"#));
        let client = StructuredClient::new(backend, Duration::from_secs(5));

        let result: Result<DebugShape, LlmError> =
            client.complete_as("system", "user", schema()).await;

        match result {
            Err(LlmError::Decode { reason, raw }) => {
                assert!(reason.contains("explanation"));
                assert!(raw.contains("root_cause"));
            }
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_content_is_decode_error() {
        let backend = Arc::new(MockBackend::new("not json at all"));
        let client = StructuredClient::new(backend, Duration::from_secs(5));

        let result: Result<DebugShape, LlmError> =
            client.complete_as("system", "user", schema()).await;

        assert!(matches!(result, Err(LlmError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_single_call_per_completion() {
        let backend = Arc::new(MockBackend::new("not json"));
        let client = StructuredClient::new(backend.clone(), Duration::from_secs(5));

        let _: Result<DebugShape, LlmError> =
            client.complete_as("system", "user", schema()).await;

        // Decode failure must not trigger a second provider call.
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
    }
}
