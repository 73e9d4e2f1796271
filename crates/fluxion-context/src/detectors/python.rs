//! Python project detection.

use std::path::Path;

use super::{Detection, LanguageContext, LanguageDetector};

const MARKERS: &[&str] = &["requirements.txt", "setup.py", "pyproject.toml", "Pipfile"];

/// Lowercased dependency names mapped to framework labels. Unlike the
/// other detectors, every match is recorded; the last one found sets
/// the framework field.
const FRAMEWORKS: &[(&str, &str)] = &[
    ("django", "Django"),
    ("flask", "Flask"),
    ("fastapi", "FastAPI"),
    ("tornado", "Tornado"),
    ("pyramid", "Pyramid"),
];

pub struct PythonDetector;

impl LanguageDetector for PythonDetector {
    fn name(&self) -> &'static str {
        "Python"
    }

    fn probe(&self, dir: &Path) -> Detection {
        if !MARKERS.iter().any(|marker| dir.join(marker).is_file()) {
            return Detection::NotApplicable;
        }

        let mut ctx = LanguageContext {
            language: "Python".to_string(),
            package_manager: "pip".to_string(),
            test_command: "pytest".to_string(),
            ..LanguageContext::default()
        };

        if let Ok(content) = std::fs::read_to_string(dir.join("requirements.txt")) {
            let content = content.to_lowercase();

            for (key, framework) in FRAMEWORKS {
                if content.contains(key) {
                    ctx.framework = (*framework).to_string();
                    ctx.dependencies.push((*key).to_string());
                }
            }

            if content.contains("pytest") {
                ctx.has_tests = true;
            }
        }

        if dir.join("Pipfile").is_file() {
            ctx.package_manager = "pipenv".to_string();
        }

        if let Ok(content) = std::fs::read_to_string(dir.join("pyproject.toml")) {
            if content.contains("[tool.poetry]") {
                ctx.package_manager = "poetry".to_string();
            }
        }

        if dir.join("tests").is_dir() {
            ctx.has_tests = true;
        }

        Detection::Matched(ctx)
    }
}
