//! Node.js project detection.

use std::path::Path;

use tracing::debug;

use super::{Detection, LanguageContext, LanguageDetector};

/// Quoted dependency names mapped to framework labels. The quotes keep
/// the substring search anchored to JSON keys in package.json rather
/// than matching inside longer package names.
const FRAMEWORKS: &[(&str, &str)] = &[
    ("\"next\"", "Next.js"),
    ("\"react\"", "React"),
    ("\"vue\"", "Vue.js"),
    ("\"@angular/core\"", "Angular"),
    ("\"express\"", "Express.js"),
    ("\"nestjs\"", "NestJS"),
    ("\"vite\"", "Vite"),
    ("\"svelte\"", "Svelte"),
];

pub struct NodeDetector;

impl LanguageDetector for NodeDetector {
    fn name(&self) -> &'static str {
        "JavaScript/TypeScript"
    }

    fn probe(&self, dir: &Path) -> Detection {
        let package_json = dir.join("package.json");
        if !package_json.is_file() {
            return Detection::NotApplicable;
        }

        let mut ctx = LanguageContext {
            language: "JavaScript/TypeScript".to_string(),
            package_manager: detect_package_manager(dir),
            ..LanguageContext::default()
        };

        let Ok(content) = std::fs::read_to_string(&package_json) else {
            debug!(path = %package_json.display(), "package.json exists but could not be read");
            return Detection::Matched(ctx);
        };

        for (key, framework) in FRAMEWORKS {
            if content.contains(key) {
                ctx.framework = (*framework).to_string();
                ctx.dependencies.push(key.trim_matches('"').to_string());
                break;
            }
        }

        if content.contains("\"build\"") {
            ctx.build_command = format!("{} run build", ctx.package_manager);
        }
        if content.contains("\"test\"") {
            ctx.test_command = format!("{} test", ctx.package_manager);
            ctx.has_tests = true;
        }

        if content.contains("\"typescript\"") {
            ctx.dependencies.push("TypeScript".to_string());
        }

        Detection::Matched(ctx)
    }
}

/// Infer the package manager from the lockfile present, defaulting to npm.
fn detect_package_manager(dir: &Path) -> String {
    if dir.join("package-lock.json").is_file() {
        "npm"
    } else if dir.join("yarn.lock").is_file() {
        "yarn"
    } else if dir.join("pnpm-lock.yaml").is_file() {
        "pnpm"
    } else {
        "npm"
    }
    .to_string()
}
