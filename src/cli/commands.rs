//! Command implementations.
//!
//! Both operations are single-pass pipelines: collect input, compose the
//! prompt, invoke the provider once, render the result. The first failed
//! step terminates the command; `run()` prints the error and maps it to
//! an exit code.

use std::path::{Path, PathBuf};

use dialoguer::Input;
use tracing::debug;

use fluxion_config::Config;
use fluxion_context::detect_project_context;
use fluxion_llm::{ResponseSchema, StructuredClient};
use fluxion_prompt::{
    DEBUG_SYSTEM_PROMPT, DebugResult, GENERATE_SYSTEM_PROMPT, GenerateResult,
    compose_debug_prompt, compose_generate_prompt, debug_schema, generate_schema,
};
use fluxion_utils::fs::{load_file, write_file};
use fluxion_utils::FluxionError;

const DEFAULT_OUTPUT_PATH: &str = "./generated_pipeline.yml";

/// Generate a workflow configuration and write it to the output path.
///
/// The description comes from `--prompt_file` when given, otherwise from
/// an interactive prompt. An empty description fails before any provider
/// call is made.
pub async fn generate(
    config: &Config,
    output: Option<String>,
    prompt_file: Option<String>,
) -> Result<(), FluxionError> {
    let description = match prompt_file {
        Some(path) => load_file(&path)?,
        None => prompt_text("Describe your CI/CD pipeline")?,
    };

    if description.trim().is_empty() {
        return Err(FluxionError::Input(
            "pipeline description cannot be empty".to_string(),
        ));
    }

    let output_path = resolve_output_path(output, config)?;

    let client = fluxion_llm::client_from_config(config)?;
    generate_with_client(&client, &description, &output_path).await
}

/// Provider round-trip and output rendering for generate.
///
/// The output file is written only after the response decoded; a
/// provider or decode failure leaves no file behind. Takes the client
/// explicitly so tests can drive it with a mock backend.
async fn generate_with_client(
    client: &StructuredClient,
    description: &str,
    output_path: &Path,
) -> Result<(), FluxionError> {
    let user_prompt = compose_generate_prompt(description);

    debug!(output = %output_path.display(), "Requesting pipeline generation");

    let result: GenerateResult = client
        .complete_as(
            GENERATE_SYSTEM_PROMPT,
            &user_prompt,
            ResponseSchema::new("generate_result", generate_schema()),
        )
        .await
        .map_err(FluxionError::from)?;

    write_file(output_path, &result.pipeline_config)?;

    println!("Pipeline Description: {}", result.pipeline_description);
    print_list("Assumptions", &result.assumptions);
    print_list("Requirements", &result.requirements);
    print_list("Next Steps", &result.next_steps);
    println!("Generated configuration written to: {}", output_path.display());

    Ok(())
}

/// Diagnose a failing workflow from its configuration and error logs.
///
/// Missing paths fall back to interactive prompts. Project context is
/// detected from the current working directory; detection cannot fail,
/// an unrecognized directory just contributes nothing to the prompt.
pub async fn debug(
    config: &Config,
    file: Option<String>,
    logs: Option<String>,
) -> Result<(), FluxionError> {
    let file_path = match file {
        Some(path) => path,
        None => prompt_text("Path to your pipeline configuration file")?,
    };
    let logs_path = match logs {
        Some(path) => path,
        None => prompt_text("Path to the error logs from the failed run")?,
    };

    let pipeline = load_file(&file_path)?;
    let log_text = load_file(&logs_path)?;

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let context = detect_project_context(&cwd);
    debug!(
        primary_language = %context.primary_language,
        "Detected project context"
    );

    let client = fluxion_llm::client_from_config(config)?;
    let user_prompt = compose_debug_prompt(&pipeline, &log_text, Some(&context));

    let result: DebugResult = client
        .complete_as(
            DEBUG_SYSTEM_PROMPT,
            &user_prompt,
            ResponseSchema::new("debug_result", debug_schema()),
        )
        .await
        .map_err(FluxionError::from)?;

    println!("──────────── Root Cause ────────────");
    println!("{}", result.root_cause);
    println!();
    println!("──────────── Fix ───────────────────");
    println!("{}", result.fix);
    println!();
    println!("──────────── Explanation ───────────");
    println!("{}", result.explanation);

    Ok(())
}

/// Resolve the output path: CLI flag > config default > built-in default,
/// then make it absolute so the summary names the real location.
fn resolve_output_path(output: Option<String>, config: &Config) -> Result<PathBuf, FluxionError> {
    let path = output
        .or_else(|| config.defaults.output_path.clone())
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    std::path::absolute(&path).map_err(FluxionError::Io)
}

fn print_list(label: &str, items: &[String]) {
    println!("{label}:");
    for item in items {
        println!("  - {item}");
    }
}

/// Single-field interactive text prompt with non-empty validation.
fn prompt_text(title: &str) -> Result<String, FluxionError> {
    Input::<String>::new()
        .with_prompt(title)
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("input cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| FluxionError::Input(format!("interactive prompt failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fluxion_llm::{CompletionRequest, CompletionResult, LlmBackend};
    use fluxion_utils::{ExitCode, LlmError};
    use std::sync::Arc;
    use std::time::Duration;

    /// Backend returning canned response content.
    struct CannedBackend {
        response: String,
    }

    #[async_trait]
    impl LlmBackend for CannedBackend {
        async fn invoke(&self, _req: CompletionRequest) -> Result<CompletionResult, LlmError> {
            Ok(CompletionResult::new(
                self.response.clone(),
                "canned",
                "canned-model",
            ))
        }
    }

    fn client_with_response(response: &str) -> StructuredClient {
        StructuredClient::new(
            Arc::new(CannedBackend {
                response: response.to_string(),
            }),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_generate_decode_failure_writes_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("generated_pipeline.yml");

        // Response omits every required field except pipeline_config.
        let client = client_with_response(r#"{"pipeline_config": "name: CI"}"#);

        let result = generate_with_client(&client, "run the tests", &output_path).await;

        match result {
            Err(FluxionError::Llm(LlmError::Decode { raw, .. })) => {
                assert!(raw.contains("pipeline_config"));
            }
            other => panic!("expected Decode error, got {:?}", other.err()),
        }
        assert!(!output_path.exists());
    }

    #[tokio::test]
    async fn test_generate_writes_pipeline_config_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("generated_pipeline.yml");

        let client = client_with_response(
            r#"{
                "pipeline_config": "name: CI\non: push\n",
                "pipeline_description": "Runs on push",
                "assumptions": [],
                "requirements": [],
                "next_steps": []
            }"#,
        );

        generate_with_client(&client, "run the tests", &output_path)
            .await
            .unwrap();

        let written = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(written, "name: CI\non: push\n");
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_description() {
        let dir = tempfile::tempdir().unwrap();
        let prompt_path = dir.path().join("empty.txt");
        std::fs::write(&prompt_path, "   \n\t\n").unwrap();

        let config = Config::minimal_for_testing();
        let result = generate(
            &config,
            None,
            Some(prompt_path.to_string_lossy().to_string()),
        )
        .await;

        // Fails before any provider client is even constructed.
        match result {
            Err(FluxionError::Input(msg)) => {
                assert!(!msg.is_empty());
                assert_eq!(
                    FluxionError::Input(msg).to_exit_code(),
                    ExitCode::INPUT
                );
            }
            other => panic!("expected Input error, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_generate_missing_prompt_file_is_read_error() {
        let config = Config::minimal_for_testing();
        let result = generate(&config, None, Some("/nonexistent/prompt.txt".to_string())).await;
        assert!(matches!(result, Err(FluxionError::FileRead { .. })));
    }

    #[tokio::test]
    async fn test_debug_missing_pipeline_file_is_read_error() {
        let config = Config::minimal_for_testing();
        let result = debug(
            &config,
            Some("/nonexistent/ci.yml".to_string()),
            Some("/nonexistent/run.log".to_string()),
        )
        .await;
        assert!(matches!(result, Err(FluxionError::FileRead { .. })));
    }

    #[test]
    fn test_resolve_output_path_prefers_cli_flag() {
        let config = Config::minimal_for_testing();
        let path = resolve_output_path(Some("custom.yml".to_string()), &config).unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("custom.yml"));
    }

    #[test]
    fn test_resolve_output_path_falls_back_to_config() {
        let mut config = Config::minimal_for_testing();
        config.defaults.output_path = Some("from_config.yml".to_string());
        let path = resolve_output_path(None, &config).unwrap();
        assert!(path.ends_with("from_config.yml"));
    }

    #[test]
    fn test_resolve_output_path_built_in_default() {
        let mut config = Config::minimal_for_testing();
        config.defaults.output_path = None;
        let path = resolve_output_path(None, &config).unwrap();
        assert!(path.ends_with("generated_pipeline.yml"));
    }
}
