//! OpenAI chat-completions backend.
//!
//! Posts to the OpenAI-compatible chat completions endpoint with a strict
//! `json_schema` response format, so the provider is contractually bound
//! to the schema carried in the request.

use std::sync::Arc;

use async_trait::async_trait;
use fluxion_config::Config;
use fluxion_utils::LlmError;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http_client::HttpClient;
use crate::types::{CompletionRequest, CompletionResult, LlmBackend, Message, Role};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Clone)]
pub struct OpenAiBackend {
    client: Arc<HttpClient>,
    base_url: String,
    api_key: String,
    default_model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiBackend {
    /// # Errors
    ///
    /// Returns `LlmError::Misconfiguration` if the HTTP client cannot be
    /// constructed.
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        default_model: String,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<Self, LlmError> {
        let client = HttpClient::new()?;

        Ok(Self {
            client: Arc::new(client),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            default_model,
            max_tokens,
            temperature,
        })
    }

    /// Build a backend from configuration. The API key is read from the
    /// environment variable named by `llm.api_key_env`; the key itself
    /// never lives in configuration.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::Misconfiguration` if the key variable is unset
    /// or the HTTP client cannot be constructed.
    pub fn new_from_config(config: &Config) -> Result<Self, LlmError> {
        let api_key_env = config
            .llm
            .api_key_env
            .as_deref()
            .unwrap_or(DEFAULT_API_KEY_ENV);

        let api_key = std::env::var(api_key_env).map_err(|_| {
            LlmError::Misconfiguration(format!(
                "API key not found in environment variable '{}'. \
                 Please set this variable or configure a different api_key_env in [llm].",
                api_key_env
            ))
        })?;

        let default_model = config
            .llm
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self::new(
            api_key,
            config.llm.base_url.clone(),
            default_model,
            config.llm.max_tokens.unwrap_or(4096),
            config.llm.temperature.unwrap_or(0.2),
        )
    }

    fn resolve_model(&self, req: &CompletionRequest) -> String {
        if req.model.is_empty() {
            self.default_model.clone()
        } else {
            req.model.clone()
        }
    }

    fn convert_messages(messages: &[Message]) -> Vec<WireMessage> {
        messages
            .iter()
            .map(|msg| WireMessage {
                role: match msg.role {
                    Role::System => "system".to_string(),
                    Role::User => "user".to_string(),
                    Role::Assistant => "assistant".to_string(),
                },
                content: msg.content.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl LlmBackend for OpenAiBackend {
    async fn invoke(&self, req: CompletionRequest) -> Result<CompletionResult, LlmError> {
        let model = self.resolve_model(&req);

        debug!(
            provider = "openai",
            model = %model,
            schema = %req.schema.name,
            timeout_secs = req.timeout.as_secs(),
            "Invoking OpenAI backend"
        );

        let request_body = ChatRequest {
            model: model.clone(),
            messages: Self::convert_messages(&req.messages),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: ResponseFormat {
                format_type: "json_schema".to_string(),
                json_schema: JsonSchemaFormat {
                    name: req.schema.name.clone(),
                    schema: req.schema.schema.clone(),
                    strict: true,
                },
            },
        };

        let request = reqwest::Client::new()
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body);

        let response = self
            .client
            .execute_with_retry(request, req.timeout, "openai")
            .await?;

        let response_body: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Transport(format!("Failed to parse OpenAI response: {}", e)))?;

        let choice = response_body
            .choices
            .first()
            .ok_or_else(|| LlmError::Transport("OpenAI response missing choices[0]".to_string()))?;

        let content = choice.message.content.clone().ok_or_else(|| {
            LlmError::Transport("OpenAI response missing content in choices[0]".to_string())
        })?;

        let mut result = CompletionResult::new(content, "openai", model);

        if let Some(usage) = response_body.usage {
            result.tokens_input = Some(usage.prompt_tokens);
            result.tokens_output = Some(usage.completion_tokens);
        }

        debug!(
            provider = "openai",
            tokens_input = ?result.tokens_input,
            tokens_output = ?result.tokens_output,
            "OpenAI invocation completed"
        );

        Ok(result)
    }
}

#[derive(Debug, Clone, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: u32,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Clone, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
    json_schema: JsonSchemaFormat,
}

#[derive(Debug, Clone, Serialize)]
struct JsonSchemaFormat {
    name: String,
    schema: serde_json::Value,
    strict: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResponseSchema;

    fn backend() -> OpenAiBackend {
        OpenAiBackend::new(
            "test-key".to_string(),
            None,
            "gpt-4o".to_string(),
            4096,
            0.2,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_model_uses_default_when_empty() {
        let req = CompletionRequest::new(
            vec![Message::user("hi")],
            ResponseSchema::new("result", serde_json::json!({"type": "object"})),
        );
        assert_eq!(backend().resolve_model(&req), "gpt-4o");
    }

    #[test]
    fn test_resolve_model_prefers_request_model() {
        let mut req = CompletionRequest::new(
            vec![Message::user("hi")],
            ResponseSchema::new("result", serde_json::json!({"type": "object"})),
        );
        req.model = "gpt-4o-mini".to_string();
        assert_eq!(backend().resolve_model(&req), "gpt-4o-mini");
    }

    #[test]
    fn test_convert_messages_keeps_order_and_roles() {
        let messages = vec![
            Message::system("be strict"),
            Message::user("generate"),
            Message::new(Role::Assistant, "ok"),
        ];
        let wire = OpenAiBackend::convert_messages(&messages);
        assert_eq!(wire.len(), 3);
        assert_eq!(wire[0].role, "system");
        assert_eq!(wire[1].role, "user");
        assert_eq!(wire[2].role, "assistant");
        assert_eq!(wire[1].content, "generate");
    }

    #[test]
    fn test_request_body_carries_strict_json_schema() {
        let body = ChatRequest {
            model: "gpt-4o".to_string(),
            messages: vec![],
            max_tokens: 4096,
            temperature: 0.2,
            response_format: ResponseFormat {
                format_type: "json_schema".to_string(),
                json_schema: JsonSchemaFormat {
                    name: "debug_result".to_string(),
                    schema: serde_json::json!({"type": "object"}),
                    strict: true,
                },
            },
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["response_format"]["type"], "json_schema");
        assert_eq!(value["response_format"]["json_schema"]["name"], "debug_result");
        assert_eq!(value["response_format"]["json_schema"]["strict"], true);
    }

    #[test]
    fn test_new_from_config_missing_api_key() {
        let test_env_var = "OPENAI_API_KEY_TEST_MISSING";
        unsafe {
            std::env::remove_var(test_env_var);
        }

        let mut config = Config::minimal_for_testing();
        config.llm.api_key_env = Some(test_env_var.to_string());

        match OpenAiBackend::new_from_config(&config) {
            Err(LlmError::Misconfiguration(msg)) => {
                assert!(msg.contains(test_env_var));
                assert!(msg.contains("not found"));
            }
            _ => panic!("Expected Misconfiguration error for missing API key"),
        }
    }
}
