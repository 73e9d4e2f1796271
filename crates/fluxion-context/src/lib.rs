//! Project context detection for fluxion
//!
//! Scans a working directory for language and framework signals and
//! produces a [`ProjectContext`] summary used to enrich debug prompts.
//!
//! Detection runs a fixed, ordered registry of per-language probes
//! (Go, Node.js, Python). The first probe that matches fills the
//! primary-language fields; later probes may only broaden the language
//! list and OR into the test-presence flag. A probe that does not match
//! reports [`Detection::NotApplicable`]; probe failures are never
//! surfaced as errors.

mod context;
pub mod detectors;

pub use context::{ProjectContext, detect_project_context};
pub use detectors::{Detection, LanguageContext, LanguageDetector};
