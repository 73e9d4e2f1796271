//! Project-wide context aggregation.

use std::path::Path;

use tracing::debug;

use crate::detectors::{Detection, registry};

/// Everything fluxion learned about the project in one scan.
///
/// Built by [`detect_project_context`] and rendered into prompt text
/// with [`ProjectContext::format_context`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectContext {
    /// All detected languages, in registry order.
    pub languages: Vec<String>,
    /// First detected language; its detector fills the fields below.
    pub primary_language: String,
    pub framework: String,
    pub dependencies: Vec<String>,
    pub has_tests: bool,
    pub build_command: String,
    pub test_command: String,
    pub package_manager: String,
    /// Human-readable layout description, e.g. "cmd/ pattern, internal/ packages".
    pub structure: String,
    pub docker_files: Vec<String>,
    pub has_ci: bool,
    /// Workflow file names under .github/workflows, sorted.
    pub existing_ci: Vec<String>,
}

const DOCKER_FILES: &[&str] = &["Dockerfile", "docker-compose.yml", "docker-compose.yaml"];

/// Directory names that hint at a project layout convention.
const STRUCTURE_PATTERNS: &[(&str, &str)] = &[
    ("cmd", "cmd/ pattern"),
    ("src", "src/ pattern"),
    ("internal", "internal/ packages"),
    ("pkg", "pkg/ pattern"),
    ("api", "API project"),
    ("web", "web application"),
    ("services", "microservices"),
];

/// Scan the working directory and aggregate everything the detectors find.
///
/// Runs every registered detector. The first match becomes the primary
/// language and supplies the command and dependency fields; later
/// matches only extend the language list and OR into `has_tests`.
/// Detection never fails: an unreadable or empty directory yields an
/// empty context.
#[must_use]
pub fn detect_project_context(working_dir: &Path) -> ProjectContext {
    let mut ctx = ProjectContext::default();

    for detector in registry() {
        match detector.probe(working_dir) {
            Detection::Matched(lang) => {
                debug!(language = %lang.language, "detector matched");
                ctx.languages.push(lang.language.clone());

                if ctx.primary_language.is_empty() {
                    ctx.primary_language = lang.language;
                    ctx.framework = lang.framework;
                    ctx.dependencies = lang.dependencies;
                    ctx.build_command = lang.build_command;
                    ctx.test_command = lang.test_command;
                    ctx.package_manager = lang.package_manager;
                    ctx.has_tests = lang.has_tests;
                } else {
                    ctx.has_tests = ctx.has_tests || lang.has_tests;
                }
            }
            Detection::NotApplicable => {}
        }
    }

    for name in DOCKER_FILES {
        if working_dir.join(name).is_file() {
            ctx.docker_files.push((*name).to_string());
        }
    }

    scan_workflows(working_dir, &mut ctx);
    ctx.structure = detect_structure(working_dir);

    ctx
}

/// Record existing GitHub Actions workflows.
///
/// The presence of `.github/workflows` sets `has_ci` even when it holds
/// no YAML files. Names are sorted so prompt text is stable across
/// platforms.
fn scan_workflows(working_dir: &Path, ctx: &mut ProjectContext) {
    let workflows = working_dir.join(".github").join("workflows");
    let Ok(entries) = std::fs::read_dir(&workflows) else {
        return;
    };

    ctx.has_ci = true;
    for entry in entries.flatten() {
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(".yml") || name.ends_with(".yaml") {
            ctx.existing_ci.push(name);
        }
    }
    ctx.existing_ci.sort();
}

fn detect_structure(working_dir: &Path) -> String {
    let found: Vec<&str> = STRUCTURE_PATTERNS
        .iter()
        .filter(|(dir, _)| working_dir.join(dir).is_dir())
        .map(|(_, description)| *description)
        .collect();

    if found.is_empty() {
        "flat structure".to_string()
    } else {
        found.join(", ")
    }
}

impl ProjectContext {
    /// Render the context as a bulleted block for inclusion in a prompt.
    ///
    /// Empty fields are skipped entirely except `Has Tests`, which is
    /// always stated so the model never has to guess.
    #[must_use]
    pub fn format_context(&self) -> String {
        let mut parts = Vec::new();

        if !self.primary_language.is_empty() {
            parts.push(format!("- Primary Language: {}", self.primary_language));
        }

        if self.languages.len() > 1 {
            parts.push(format!("- Languages: {}", self.languages.join(", ")));
        }

        if !self.framework.is_empty() {
            parts.push(format!("- Framework: {}", self.framework));
        }

        if !self.package_manager.is_empty() {
            parts.push(format!("- Package Manager: {}", self.package_manager));
        }

        if !self.build_command.is_empty() {
            parts.push(format!("- Build Command: {}", self.build_command));
        }

        if !self.test_command.is_empty() {
            parts.push(format!("- Test Command: {}", self.test_command));
        }

        if !self.dependencies.is_empty() {
            let deps: Vec<&str> = self
                .dependencies
                .iter()
                .take(5)
                .map(String::as_str)
                .collect();
            parts.push(format!("- Key Dependencies: {}", deps.join(", ")));
        }

        parts.push(format!("- Has Tests: {}", self.has_tests));

        if !self.structure.is_empty() {
            parts.push(format!("- Project Structure: {}", self.structure));
        }

        if !self.docker_files.is_empty() {
            parts.push(format!("- Docker: {}", self.docker_files.join(", ")));
        }

        if self.has_ci {
            parts.push(format!("- Existing CI/CD: {}", self.existing_ci.join(", ")));
        }

        parts.join("\n")
    }
}
