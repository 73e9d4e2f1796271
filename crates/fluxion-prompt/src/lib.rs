//! Prompt composition and response schemas for fluxion
//!
//! Holds the fixed system prompts for both operations, the strict JSON
//! schemas the provider must conform to, and the templating that turns
//! user input into a single user-prompt string. Interpolated content is
//! copied verbatim; nothing here escapes or sanitizes it.

use fluxion_context::ProjectContext;
use serde::Deserialize;
use serde_json::{Value, json};

/// Decoded response payload for the generate operation.
///
/// Field names match the keys required by [`generate_schema`]; the
/// provider is constrained to exactly these keys, and decoding rejects
/// anything extra.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenerateResult {
    pub pipeline_config: String,
    pub pipeline_description: String,
    pub assumptions: Vec<String>,
    pub requirements: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Decoded response payload for the debug operation.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DebugResult {
    pub root_cause: String,
    pub fix: String,
    pub explanation: String,
}

/// System prompt for the debug operation.
pub const DEBUG_SYSTEM_PROMPT: &str = "You are a GitHub Actions debugging assistant.

Your job is simple:
1. Identify the root cause by analyzing the error logs and workflow configuration
2. Provide the exact fix needed - include specific code changes or configuration adjustments
3. Briefly explain (2-3 sentences) why it failed and how your fix resolves it

Focus only on fixing the actual error shown in the logs. Don't suggest improvements or optimizations unless they directly resolve the error.
We are using GitHub Actions as of 2025, so ensure your suggestions use current best practices and non-deprecated actions.";

/// System prompt for the generate operation.
pub const GENERATE_SYSTEM_PROMPT: &str = "You are a GitHub Actions workflow generator creating configurations for 2025.
Your job is to create a simple, working GitHub Actions YAML configuration that does exactly what the user asks for.

Guidelines:
- Use standard, reliable actions from the GitHub marketplace (prefer official GitHub actions)
- Ensure YAML syntax is valid with proper indentation
- Include basic security practices: use secrets for sensitive data, never hardcode credentials
- Keep workflows minimal - only include what the user explicitly requests
- NEVER use deprecated or archived actions - verify actions are actively maintained
- Include helpful inline comments explaining non-obvious configuration choices
- Use appropriate triggers
- Consider common CI/CD patterns: checkout code, setup environment, build, test, deploy

When providing context in your response:
- Assumptions: List what you assumed about the environment, languages, tools, or repository structure
- Requirements: List prerequisites needed before the workflow can run:
  * Repository secrets to configure (with example names)
  * Environment variables needed
  * Repository settings or permissions
  * Branch protection rules or environments
- Next Steps: Provide clear, actionable implementation steps

Output Requirements:
- Provide the complete, valid YAML workflow
- Ensure the workflow is immediately usable (copy-paste ready)
- Include appropriate error handling where applicable
- Use descriptive job and step names

Generate a straightforward workflow that works correctly and accomplishes the user's goal.";

/// Schema the provider must satisfy for a generate response.
#[must_use]
pub fn generate_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "pipeline_config": {
                "type": "string",
                "description": "The complete GitHub Actions workflow YAML configuration"
            },
            "pipeline_description": {
                "type": "string",
                "description": "A brief description of the generated pipeline"
            },
            "assumptions": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Any assumptions made while generating the pipeline"
            },
            "requirements": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Key requirements that the pipeline fulfills"
            },
            "next_steps": {
                "type": "array",
                "items": {"type": "string"},
                "description": "Recommended next steps after generating the pipeline"
            }
        },
        "required": [
            "pipeline_config",
            "pipeline_description",
            "assumptions",
            "requirements",
            "next_steps"
        ],
        "additionalProperties": false
    })
}

/// Schema the provider must satisfy for a debug response.
#[must_use]
pub fn debug_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "root_cause": {
                "type": "string",
                "description": "Brief explanation of what caused the failure"
            },
            "fix": {
                "type": "string",
                "description": "Exact code change or command needed to fix it"
            },
            "explanation": {
                "type": "string",
                "description": "Why this fix works (1-2 sentences max)"
            }
        },
        "required": ["root_cause", "fix", "explanation"],
        "additionalProperties": false
    })
}

/// Build the user prompt for the generate operation.
#[must_use]
pub fn compose_generate_prompt(description: &str) -> String {
    format!(
        "Create a GitHub Actions workflow based on the following prompt:\n{description}"
    )
}

/// Build the user prompt for the debug operation.
///
/// The project-context block is included only when detection found a
/// primary language; an empty context adds nothing to the prompt.
#[must_use]
pub fn compose_debug_prompt(
    pipeline: &str,
    logs: &str,
    context: Option<&ProjectContext>,
) -> String {
    let mut prompt = String::from("Analyze this GitHub Actions workflow failure.\n");

    if let Some(ctx) = context {
        if !ctx.primary_language.is_empty() {
            prompt.push_str("\nProject context:\n");
            prompt.push_str(&ctx.format_context());
            prompt.push('\n');
        }
    }

    prompt.push_str("\nWorkflow configuration:\n");
    prompt.push_str(pipeline);
    prompt.push_str("\n\nError logs:\n");
    prompt.push_str(logs);

    prompt
}
