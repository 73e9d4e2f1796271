//! Language detector registry.
//!
//! Each detector probes a directory for its language's marker files and
//! reports either `Matched` with language-specific context or
//! `NotApplicable`. The registry order is fixed: it decides which
//! detector fills the primary-language fields when several match.

use std::path::Path;

mod go;
mod node;
mod python;

pub use go::GoDetector;
pub use node::NodeDetector;
pub use python::PythonDetector;

/// Outcome of probing a directory for one language.
///
/// A sum type rather than `Result`: "this is not my language" is an
/// expected outcome, not an error, and I/O failures during probing are
/// folded into `NotApplicable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// The directory belongs to this detector's language.
    Matched(LanguageContext),
    /// No marker files for this language were found.
    NotApplicable,
}

/// Language-specific detection results.
///
/// Produced by a detector's probe, consumed exactly once by the
/// aggregator in [`crate::detect_project_context`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageContext {
    pub language: String,
    pub framework: String,
    pub dependencies: Vec<String>,
    pub build_command: String,
    pub test_command: String,
    pub package_manager: String,
    pub has_tests: bool,
}

/// Contract every language detector implements.
pub trait LanguageDetector {
    /// Language name, e.g. "Go" or "Python".
    fn name(&self) -> &'static str;

    /// Probe the directory for this language's markers.
    fn probe(&self, dir: &Path) -> Detection;
}

/// The fixed, ordered detector registry.
///
/// Order matters: the first matching detector becomes the primary
/// language. To add a language, implement [`LanguageDetector`] and
/// append it here.
#[must_use]
pub fn registry() -> Vec<Box<dyn LanguageDetector>> {
    vec![
        Box::new(GoDetector),
        Box::new(NodeDetector),
        Box::new(PythonDetector),
    ]
}
