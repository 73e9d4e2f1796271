//! Go project detection.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use super::{Detection, LanguageContext, LanguageDetector};

/// Known import-path fragments mapped to framework names.
///
/// Checked in order against each dependency line of the `go.mod`
/// require block; the first fragment found in a line wins for that line.
const FRAMEWORKS: &[(&str, &str)] = &[
    ("cobra", "Cobra CLI"),
    ("gin-gonic/gin", "Gin Web Framework"),
    ("gofiber/fiber", "Fiber Web Framework"),
    ("labstack/echo", "Echo Web Framework"),
    ("gorilla/mux", "Gorilla Mux"),
];

pub struct GoDetector;

impl LanguageDetector for GoDetector {
    fn name(&self) -> &'static str {
        "Go"
    }

    fn probe(&self, dir: &Path) -> Detection {
        let go_mod = dir.join("go.mod");
        if !go_mod.is_file() {
            return Detection::NotApplicable;
        }

        let mut ctx = LanguageContext {
            language: "Go".to_string(),
            build_command: "go build".to_string(),
            test_command: "go test ./...".to_string(),
            package_manager: "go mod".to_string(),
            ..LanguageContext::default()
        };

        // go.mod is readable in the common case; a read failure still
        // counts as a Go project with no dependency information.
        if let Ok(content) = std::fs::read_to_string(&go_mod) {
            parse_go_mod(&content, &mut ctx);
        } else {
            debug!(path = %go_mod.display(), "go.mod exists but could not be read");
        }

        ctx.has_tests = has_test_files(dir);

        // A root main.go means the module builds a binary.
        if dir.join("main.go").is_file() {
            ctx.build_command = "go build -o app".to_string();
        }

        Detection::Matched(ctx)
    }
}

/// Scan the require block of a go.mod for known framework imports.
///
/// The block opens on a line starting with `require` that contains `(`
/// and closes on a line containing `)`. Comment lines are skipped.
fn parse_go_mod(content: &str, ctx: &mut LanguageContext) {
    let mut in_require = false;

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if line.starts_with("require") {
            in_require = true;
            if line.contains('(') {
                continue;
            }
        }

        if in_require {
            if line.contains(')') {
                in_require = false;
                continue;
            }

            let Some(dep) = line.split_whitespace().next() else {
                continue;
            };
            if dep.starts_with("//") {
                continue;
            }

            for (fragment, framework) in FRAMEWORKS {
                if dep.contains(fragment) {
                    ctx.framework = (*framework).to_string();
                    ctx.dependencies.push((*fragment).to_string());
                    break;
                }
            }
        }
    }
}

/// Walk the tree looking for `*_test.go`, short-circuiting on the first hit.
fn has_test_files(dir: &Path) -> bool {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .any(|entry| {
            entry.file_type().is_file()
                && entry.file_name().to_string_lossy().ends_with("_test.go")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_no_go_mod_is_not_applicable() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(GoDetector.probe(dir.path()), Detection::NotApplicable);
    }

    #[test]
    fn test_detects_framework_in_require_block() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "go.mod",
            "module example.com/app\n\ngo 1.22\n\nrequire (\n\tgithub.com/spf13/cobra v1.8.0\n\tgithub.com/stretchr/testify v1.9.0\n)\n",
        );

        match GoDetector.probe(dir.path()) {
            Detection::Matched(ctx) => {
                assert_eq!(ctx.language, "Go");
                assert_eq!(ctx.framework, "Cobra CLI");
                assert_eq!(ctx.dependencies, vec!["cobra".to_string()]);
                assert_eq!(ctx.package_manager, "go mod");
                assert_eq!(ctx.build_command, "go build");
                assert_eq!(ctx.test_command, "go test ./...");
            }
            Detection::NotApplicable => panic!("go.mod should match"),
        }
    }

    #[test]
    fn test_comment_lines_in_require_block_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "go.mod",
            "module example.com/app\n\nrequire (\n\t// github.com/gin-gonic/gin v1.9.0\n\tgithub.com/gorilla/mux v1.8.1\n)\n",
        );

        match GoDetector.probe(dir.path()) {
            Detection::Matched(ctx) => {
                assert_eq!(ctx.framework, "Gorilla Mux");
                assert_eq!(ctx.dependencies, vec!["gorilla/mux".to_string()]);
            }
            Detection::NotApplicable => panic!("go.mod should match"),
        }
    }

    #[test]
    fn test_main_go_upgrades_build_command() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "go.mod", "module example.com/app\n");
        write(dir.path(), "main.go", "package main\n\nfunc main() {}\n");

        match GoDetector.probe(dir.path()) {
            Detection::Matched(ctx) => assert_eq!(ctx.build_command, "go build -o app"),
            Detection::NotApplicable => panic!("go.mod should match"),
        }
    }

    #[test]
    fn test_nested_test_file_sets_has_tests() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "go.mod", "module example.com/app\n");
        let pkg = dir.path().join("internal").join("server");
        std::fs::create_dir_all(&pkg).unwrap();
        std::fs::write(pkg.join("server_test.go"), "package server\n").unwrap();

        match GoDetector.probe(dir.path()) {
            Detection::Matched(ctx) => assert!(ctx.has_tests),
            Detection::NotApplicable => panic!("go.mod should match"),
        }
    }
}
